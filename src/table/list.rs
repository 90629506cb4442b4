//! A single participant's ranked preference list.
//!
//! ## Layout
//!
//! ```text
//! rank:      0          1          2          3
//! slots:  [Active(2)] [Removed] [Active(0)] [Removed]
//!             ^head
//! ```
//!
//! - `slots[i]` is the candidate at rank `i`, or a tombstone
//! - `positions` maps a candidate key to its rank for O(1) lookup
//! - `head` never moves backwards: slots are only ever tombstoned

use std::collections::HashMap;

use crate::types::{ParticipantKey, Slot};

/// Ranked candidates of one participant, rank 0 most preferred.
#[derive(Debug, Clone)]
pub struct PreferenceList {
    /// Slot per rank. Never reordered or compacted.
    slots: Vec<Slot>,

    /// Candidate key to rank, for every candidate ever listed.
    positions: HashMap<ParticipantKey, usize>,

    /// Number of `Slot::Active` entries.
    remaining: usize,

    /// Index of the first active slot (or `slots.len()` when exhausted).
    head: usize,
}

impl PreferenceList {
    /// Create a list from candidate keys in rank order.
    ///
    /// Callers must pass distinct keys; the table validates input before
    /// building lists.
    pub fn new(entries: &[ParticipantKey]) -> Self {
        let slots: Vec<Slot> = entries.iter().map(|&key| Slot::Active(key)).collect();
        let positions = entries
            .iter()
            .enumerate()
            .map(|(rank, &key)| (key, rank))
            .collect();

        Self {
            remaining: slots.len(),
            slots,
            positions,
            head: 0,
        }
    }

    /// Number of candidates originally listed.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of candidates not yet tombstoned.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// True if `key` was ever listed, tombstoned or not.
    #[inline]
    pub fn contains(&self, key: ParticipantKey) -> bool {
        self.positions.contains_key(&key)
    }

    /// Original rank of `key`, or None if never listed or already removed.
    pub fn rank_of(&self, key: ParticipantKey) -> Option<usize> {
        let rank = *self.positions.get(&key)?;
        self.slots[rank].active().map(|_| rank)
    }

    /// Most preferred candidate still standing.
    pub fn first_remaining(&self) -> Option<ParticipantKey> {
        self.slots[self.head..].iter().find_map(|slot| slot.active())
    }

    /// Least preferred candidate still standing.
    pub fn last_remaining(&self) -> Option<ParticipantKey> {
        self.slots[self.head..].iter().rev().find_map(|slot| slot.active())
    }

    /// Tombstone `key`.
    ///
    /// # Returns
    ///
    /// `true` if an active slot was tombstoned, `false` if `key` was already
    /// removed or never listed.
    pub fn remove(&mut self, key: ParticipantKey) -> bool {
        let Some(&rank) = self.positions.get(&key) else {
            return false;
        };
        if self.slots[rank].is_removed() {
            return false;
        }

        self.slots[rank] = Slot::Removed;
        self.remaining -= 1;

        while self.head < self.slots.len() && self.slots[self.head].is_removed() {
            self.head += 1;
        }

        true
    }

    /// All slots in rank order.
    #[inline]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
