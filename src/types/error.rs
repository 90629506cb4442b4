//! Error types.
//!
//! Every error here is a caller mistake: the input has to be fixed, a
//! retry will fail the same way. Rejections, displacements and a single
//! participant running out of candidates are ordinary algorithm steps and
//! never surface as errors.

use thiserror::Error;

/// A `(person, target)` pair does not resolve against the preference table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unknown participant: {0}")]
    UnknownParticipant(String),

    /// Tombstoned entries still exist for this check; only targets that
    /// were never listed raise it.
    #[error("{target} is not in {person}'s preference list")]
    NotInPreferenceList { person: String, target: String },
}

/// The input preference lists are malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("participant registered twice: {0}")]
    DuplicateParticipant(String),

    #[error("{0} lists themselves")]
    SelfPreference(String),

    #[error("{person} lists {target} more than once")]
    DuplicateEntry { person: String, target: String },

    #[error("{person} lists unregistered participant {target}")]
    UnlistedParticipant { person: String, target: String },
}

/// Top-level error returned by the matching engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("invalid proposal: {0}")]
    InvalidProposal(#[from] LookupError),

    #[error("invalid preferences: {0}")]
    InvalidPreferences(#[from] BuildError),
}
