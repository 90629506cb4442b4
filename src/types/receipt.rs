//! Phase 1 receipt.
//!
//! A `Phase1Receipt` summarizes one run of the proposal sequence: how many
//! steps of each kind were taken, how it ended, and a state root over the
//! reduced preference table and held proposals.

use ssz_rs::prelude::*;
use sha2::{Sha256, Digest};

/// Outcome code: the run has not reached a terminal state.
pub const OUTCOME_UNFINISHED: u8 = 0;

/// Outcome code: every participant holds a proposal.
pub const OUTCOME_ALL_HELD: u8 = 1;

/// Outcome code: some participant was rejected by every candidate.
pub const OUTCOME_NO_STABLE_MATCHING: u8 = 2;

/// Execution summary of a phase 1 run.
///
/// ## State Root
///
/// The 32-byte state root is a SHA-256 hash of the tombstone pattern of
/// every preference list plus the held proposal of every participant, in
/// registration order. Two runs over the same input with the same
/// visitation order produce the same root.
///
/// ## Example
///
/// ```
/// use stable_roommates::types::{Phase1Receipt, OUTCOME_ALL_HELD};
///
/// let receipt = Phase1Receipt::with_computed_root(
///     12,                     // proposals
///     8,                      // acceptances
///     4,                      // rejections
///     2,                      // displacements
///     6,                      // held_count
///     OUTCOME_ALL_HELD,
///     b"state bytes",
/// );
/// assert!(receipt.all_held());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct Phase1Receipt {
    /// Proposals made (including rejected ones)
    pub proposals: u64,

    /// Proposals accepted
    pub acceptances: u64,

    /// Rejections recorded
    pub rejections: u64,

    /// Held proposals replaced by a better one
    pub displacements: u64,

    /// Participants holding a proposal when the receipt was taken
    pub held_count: u64,

    /// One of the `OUTCOME_*` codes
    pub outcome: u8,

    /// SHA-256 over the reduced table and held proposals
    pub state_root: [u8; 32],
}

impl Phase1Receipt {
    pub fn new(
        proposals: u64,
        acceptances: u64,
        rejections: u64,
        displacements: u64,
        held_count: u64,
        outcome: u8,
        state_root: [u8; 32],
    ) -> Self {
        Self {
            proposals,
            acceptances,
            rejections,
            displacements,
            held_count,
            outcome,
            state_root,
        }
    }

    /// Create a receipt whose state root is the hash of `state_data`.
    pub fn with_computed_root(
        proposals: u64,
        acceptances: u64,
        rejections: u64,
        displacements: u64,
        held_count: u64,
        outcome: u8,
        state_data: &[u8],
    ) -> Self {
        let state_root = Self::compute_hash(state_data);
        Self::new(proposals, acceptances, rejections, displacements, held_count, outcome, state_root)
    }

    /// Fingerprint a serialized table-and-ledger state.
    pub fn compute_hash(state_data: &[u8]) -> [u8; 32] {
        Sha256::digest(state_data).into()
    }

    /// Fingerprint of the reduced table, for logs and the demo output.
    pub fn state_root_hex(&self) -> String {
        hex::encode(self.state_root)
    }

    #[inline]
    pub fn all_held(&self) -> bool {
        self.outcome == OUTCOME_ALL_HELD
    }

    #[inline]
    pub fn no_stable_matching(&self) -> bool {
        self.outcome == OUTCOME_NO_STABLE_MATCHING
    }

    /// Share of proposals that were accepted.
    ///
    /// Returns None if no proposals were made.
    pub fn acceptance_rate(&self) -> Option<f64> {
        if self.proposals == 0 {
            None
        } else {
            Some(self.acceptances as f64 / self.proposals as f64)
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
