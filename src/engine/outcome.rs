//! Phase 1 results and counters.

use std::fmt;

use crate::types::{OUTCOME_ALL_HELD, OUTCOME_NO_STABLE_MATCHING};

/// Terminal state of a phase 1 run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase1Outcome<P> {
    /// Every participant holds exactly one proposal.
    AllHeld,

    /// `exhausted` was rejected by every candidate on their list, so the
    /// instance admits no stable matching. When several participants are
    /// exhausted, the first in registration order is reported.
    NoStableMatching { exhausted: P },
}

impl<P> Phase1Outcome<P> {
    #[inline]
    pub fn is_all_held(&self) -> bool {
        matches!(self, Phase1Outcome::AllHeld)
    }

    /// The exhausted participant, if the run proved there is no stable matching.
    pub fn exhausted(&self) -> Option<&P> {
        match self {
            Phase1Outcome::AllHeld => None,
            Phase1Outcome::NoStableMatching { exhausted } => Some(exhausted),
        }
    }

    /// Receipt outcome code
    pub fn code(&self) -> u8 {
        match self {
            Phase1Outcome::AllHeld => OUTCOME_ALL_HELD,
            Phase1Outcome::NoStableMatching { .. } => OUTCOME_NO_STABLE_MATCHING,
        }
    }
}

impl<P: fmt::Display> fmt::Display for Phase1Outcome<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase1Outcome::AllHeld => f.write_str("every participant holds a proposal"),
            Phase1Outcome::NoStableMatching { exhausted } => {
                write!(f, "no stable matching: {exhausted} was rejected by everyone")
            }
        }
    }
}

/// Counters accumulated over the lifetime of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineStats {
    /// Proposals made, accepted or not
    pub proposals: u64,
    /// Proposals a target agreed to hold
    pub acceptances: u64,
    /// Rejections recorded (including displacements)
    pub rejections: u64,
    /// Held proposals replaced by a better one
    pub displacements: u64,
}
