//! # mentormatch-types
//!
//! Shared types, errors, and intake validation for the **MentorMatch**
//! roster engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`ParticipantId`]
//! - **Participant model**: [`Participant`], [`Role`], [`Profile`],
//!   [`StudentProfile`], [`MentorProfile`]
//! - **Display vocabulary**: [`Tab`], [`SortKey`], column contracts in
//!   [`columns`]
//! - **Intake validation**: [`validate::missing_fields`], [`validate::validate`]
//! - **Seed data**: [`seed::seed_roster`]
//! - **Errors**: [`MentormatchError`] with `MM_ERR_` prefix codes

pub mod columns;
pub mod error;
pub mod ids;
pub mod participant;
pub mod seed;
pub mod sort_key;
pub mod tab;
pub mod validate;

// Re-export all primary types at crate root for ergonomic imports:
//   use mentormatch_types::{Participant, Role, Tab, SortKey, ...};

pub use error::*;
pub use ids::*;
pub use participant::*;
pub use sort_key::*;
pub use tab::*;

// Column contracts are accessed via `mentormatch_types::columns::COMMON_COLUMNS`
// (not re-exported to keep the key lists namespaced).
