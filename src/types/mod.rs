//! Core data types for the matching engine.
//!
//! ## Types
//!
//! - [`Participant`]: Marker trait for caller-side participant ids
//! - [`ParticipantState`]: Proposing, Holding or Exhausted
//! - [`Slot`]: One position of a preference list (active or tombstoned)
//! - [`MatchEvent`]: One step of the proposal sequence
//! - [`Phase1Receipt`]: Run summary with a deterministic state root
//! - [`MatchError`], [`LookupError`], [`BuildError`]: Caller errors

mod participant;
mod slot;
mod event;
mod receipt;
pub mod error;

pub use participant::{Participant, ParticipantKey, ParticipantState};
pub use slot::Slot;
pub use event::MatchEvent;
pub use receipt::{
    Phase1Receipt, OUTCOME_ALL_HELD, OUTCOME_NO_STABLE_MATCHING, OUTCOME_UNFINISHED,
};
pub use error::{BuildError, LookupError, MatchError};
