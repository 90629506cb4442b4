//! Participant identifiers and per-participant state.
//!
//! Callers identify participants with their own values (names, numeric
//! ids). Inside the engine every participant is addressed by a dense
//! registration key assigned at construction time; the caller's value is
//! only translated at the public boundary.

use std::fmt;
use std::hash::Hash;

/// Registration key of a participant (0-based, registration order).
pub type ParticipantKey = usize;

/// Marker trait for participant identifiers.
///
/// Blanket-implemented for every `Clone + Eq + Hash + Debug + Display`
/// type, so `&'static str`, `String` and integer ids all work.
///
/// ## Example
///
/// ```
/// use stable_roommates::types::Participant;
///
/// fn takes<P: Participant>(_: P) {}
///
/// takes("jacek");
/// takes(String::from("tomek"));
/// takes(42u32);
/// ```
pub trait Participant: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T> Participant for T where T: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

// ============================================================================
// ParticipantState enum
// ============================================================================

/// Where a participant stands in the proposal sequence.
///
/// A participant moves between `Proposing` and `Holding` any number of
/// times (every displacement sends it back to `Proposing`). `Exhausted`
/// is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParticipantState {
    /// No one currently holds this participant's proposal and it still
    /// has candidates left.
    #[default]
    Proposing,
    /// Another participant holds this participant's proposal.
    Holding,
    /// Every candidate on this participant's list has rejected them.
    Exhausted,
}

impl ParticipantState {
    /// True if the participant still needs to propose.
    #[inline]
    pub fn is_proposing(self) -> bool {
        self == ParticipantState::Proposing
    }

    /// True for the terminal state.
    #[inline]
    pub fn is_exhausted(self) -> bool {
        self == ParticipantState::Exhausted
    }
}

impl fmt::Display for ParticipantState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParticipantState::Proposing => "proposing",
            ParticipantState::Holding => "holding",
            ParticipantState::Exhausted => "exhausted",
        };
        f.write_str(name)
    }
}
