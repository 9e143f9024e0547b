//! Pure role filter.
//!
//! Narrows a roster to the subset a display tab shows. Stable: relative
//! order of the surviving records is the roster order.

use mentormatch_types::{Participant, Tab};

/// The subset of the roster the given tab displays, in roster order.
///
/// `Tab::All` is the identity (a copy of the full roster); the role tabs
/// keep only records of that role. Never mutates the input.
#[must_use]
pub fn filter_by_tab(roster: &[Participant], tab: Tab) -> Vec<Participant> {
    match tab.role() {
        None => roster.to_vec(),
        Some(role) => roster
            .iter()
            .filter(|p| p.role() == role)
            .cloned()
            .collect(),
    }
}
