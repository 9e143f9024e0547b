//! Pure stable sorter over the whitelisted numeric keys.
//!
//! Ordering mixes participants of both roles: a key that does not apply to a
//! record's role compares as zero, the same as a missing value. Stability is
//! part of the contract — equal keys keep their roster order in both
//! directions, so descending uses a reversed comparator rather than a
//! post-reverse (which would flip ties).

use mentormatch_types::{Participant, SortKey};

/// Reorder the roster by `key`, ascending or descending. Returns a new
/// sequence; the input is not mutated.
///
/// An unknown key cannot reach this function: the whitelist of sortable
/// fields is the [`SortKey`] type itself. The permissive handling of raw
/// header tokens lives at the roster-plane boundary.
#[must_use]
pub fn sort_by_key(roster: &[Participant], key: SortKey, ascending: bool) -> Vec<Participant> {
    let mut sorted = roster.to_vec();
    if ascending {
        sorted.sort_by(|a, b| a.sort_value(key).cmp(&b.sort_value(key)));
    } else {
        sorted.sort_by(|a, b| b.sort_value(key).cmp(&a.sort_value(key)));
    }
    sorted
}
