//! Preference list slots.
//!
//! A slot is one position in a participant's ranked list. Removing a
//! candidate tombstones its slot instead of compacting the list, so the
//! rank (slot index) of every surviving candidate never changes.

use crate::types::ParticipantKey;

/// One position in a preference list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The candidate is still viable.
    Active(ParticipantKey),
    /// The candidate was removed. Its position still counts for ranking.
    Removed,
}

impl Slot {
    /// The candidate held by this slot, if it has not been removed.
    #[inline]
    pub fn active(self) -> Option<ParticipantKey> {
        match self {
            Slot::Active(key) => Some(key),
            Slot::Removed => None,
        }
    }

    #[inline]
    pub fn is_removed(self) -> bool {
        matches!(self, Slot::Removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_active() {
        assert_eq!(Slot::Active(3).active(), Some(3));
        assert!(!Slot::Active(3).is_removed());
    }

    #[test]
    fn test_slot_removed() {
        assert_eq!(Slot::Removed.active(), None);
        assert!(Slot::Removed.is_removed());
    }
}
