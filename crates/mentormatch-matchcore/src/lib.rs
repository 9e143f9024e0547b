//! # mentormatch-matchcore
//!
//! **Pure deterministic compute plane for MentorMatch.**
//!
//! MatchCore takes a roster of participants and derives, filters, or reorders
//! it. It has:
//!
//! - **Zero side effects**: no state, no I/O — every function returns a new
//!   sequence and leaves its input untouched
//! - **Deterministic output**: same roster in -> same roster out
//! - **Order preservation**: derivation and filtering keep roster order;
//!   sorting is stable, so equal keys keep roster order too
//!
//! The roster plane (`mentormatch-roster`) owns the authoritative roster and
//! decides *when* these functions run; this crate only decides *what* they
//! produce.

pub mod filter;
pub mod matcher;
pub mod sorter;

pub use filter::filter_by_tab;
pub use matcher::match_roster;
pub use sorter::sort_by_key;
