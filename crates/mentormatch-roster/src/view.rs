//! Per-tab display payloads.
//!
//! A [`TabView`] is everything the display collaborator needs to render one
//! tab: the header keys for that tab and the filtered rows, both derived
//! from the authoritative roster without mutating it.

use serde::Serialize;

use mentormatch_types::{Participant, Tab, columns::columns_for_tab};

use crate::Roster;

/// The full render payload for one display tab.
#[derive(Debug, Clone, Serialize)]
pub struct TabView {
    /// Which tab this payload is for.
    pub tab: Tab,
    /// Header keys in render order (common columns plus the role groups the
    /// tab shows).
    pub columns: Vec<&'static str>,
    /// The filtered rows, in authoritative-roster order.
    pub rows: Vec<Participant>,
}

impl TabView {
    /// Build the payload for `tab` from the current roster state.
    #[must_use]
    pub fn build(roster: &Roster, tab: Tab) -> Self {
        Self {
            tab,
            columns: columns_for_tab(tab),
            rows: roster.view(tab),
        }
    }
}
