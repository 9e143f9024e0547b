//! # mentormatch-roster
//!
//! **Roster state plane**: ownership of the authoritative roster,
//! add → rematch orchestration, explicit sorting, and per-tab views.
//!
//! ## Architecture
//!
//! The roster plane sits between the intake/display collaborators and
//! MatchCore:
//! 1. **Roster**: owns the authoritative, matched participant list
//! 2. **TabView**: packages columns + filtered rows for one display tab
//!
//! ## Record Flow
//!
//! ```text
//! intake → validate() → Roster.add() → match_roster() → authoritative roster
//!                                                     → view(tab) / TabView
//! ```
//!
//! Every mutation is followed, inside the mutating call, by a full rematch
//! over the entire roster — a causal contract, not a background reaction.
//! Reads never mutate match data.

pub mod roster;
pub mod view;

pub use roster::Roster;
pub use view::TabView;
