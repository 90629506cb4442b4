//! Proposal events.
//!
//! The engine describes every step it takes as a [`MatchEvent`]. Events
//! are always emitted through `tracing` and, when the engine is configured
//! to record them, appended to an in-engine journal. Neither path feeds
//! back into the algorithm.

use std::fmt;

use tracing::{debug, trace};

use crate::types::Participant;

/// One step of the proposal sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEvent<P> {
    /// `person` proposed to `target`.
    Proposed { person: P, target: P },

    /// `holder` now holds `proposer`'s proposal.
    Accepted { holder: P, proposer: P },

    /// `by` rejected `person`; `by` is gone from `person`'s list.
    Rejected { person: P, by: P },

    /// `holder` dropped `displaced` in favour of `by`.
    Displaced { holder: P, displaced: P, by: P },

    /// `person` was rejected by every candidate on their list.
    Exhausted { person: P },
}

impl<P: Participant> MatchEvent<P> {
    /// Emit the event as a structured `tracing` record.
    pub(crate) fn log(&self) {
        match self {
            MatchEvent::Proposed { person, target } => {
                trace!(%person, %target, "proposal");
            }
            MatchEvent::Accepted { holder, proposer } => {
                debug!(%holder, %proposer, "proposal accepted");
            }
            MatchEvent::Rejected { person, by } => {
                debug!(%person, %by, "proposal rejected");
            }
            MatchEvent::Displaced { holder, displaced, by } => {
                debug!(%holder, %displaced, %by, "held proposal displaced");
            }
            MatchEvent::Exhausted { person } => {
                debug!(%person, "preference list exhausted");
            }
        }
    }
}

impl<P: fmt::Display> fmt::Display for MatchEvent<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchEvent::Proposed { person, target } => write!(f, "{person} proposes to {target}"),
            MatchEvent::Accepted { holder, proposer } => write!(f, "{holder} accepts {proposer}"),
            MatchEvent::Rejected { person, by } => write!(f, "{person} rejected by {by}"),
            MatchEvent::Displaced { holder, displaced, by } => {
                write!(f, "{holder} drops {displaced} for {by}")
            }
            MatchEvent::Exhausted { person } => write!(f, "{person} rejected by everyone"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display() {
        let event = MatchEvent::Proposed { person: "jacek", target: "tomek" };
        assert_eq!(event.to_string(), "jacek proposes to tomek");

        let event = MatchEvent::Displaced { holder: "jacek", displaced: "atomek", by: "tomek" };
        assert_eq!(event.to_string(), "jacek drops atomek for tomek");

        let event = MatchEvent::Exhausted { person: "tytus" };
        assert_eq!(event.to_string(), "tytus rejected by everyone");
    }
}
