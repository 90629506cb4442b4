//! Proposal ledger: who holds whose proposal, and who rejected whom.
//!
//! ## Bookkeeping
//!
//! Held proposals are tracked in both directions:
//!
//! ```text
//! held[holder]         = proposer   (what the holder is sitting on)
//! accepted_by[proposer] = holder    (where the proposer's offer rests)
//! ```
//!
//! `accepted_by` follows the most recent acceptance. Setting a holder never
//! touches any other holder, so an offer accepted twice through the public
//! `accept` stays held in both places until each holder lets go. Proposals
//! made by the engine never reach that state. Rejections are filed under
//! the participant who was rejected.

use std::collections::BTreeSet;

use crate::types::ParticipantKey;

/// Held proposals and rejection history, keyed by registration key.
#[derive(Debug, Clone)]
pub struct ProposalLedger {
    /// Proposal currently held by each participant
    held: Vec<Option<ParticipantKey>>,

    /// Participant currently holding each participant's proposal
    accepted_by: Vec<Option<ParticipantKey>>,

    /// Participants that rejected each participant
    rejections: Vec<BTreeSet<ParticipantKey>>,

    /// Number of `Some` entries in `held`
    held_count: usize,
}

impl ProposalLedger {
    /// Create an empty ledger for `participants` participants
    pub fn new(participants: usize) -> Self {
        Self {
            held: vec![None; participants],
            accepted_by: vec![None; participants],
            rejections: vec![BTreeSet::new(); participants],
            held_count: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.held.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    // ========================================================================
    // Held proposals
    // ========================================================================

    /// Proposer whose offer `person` currently holds
    #[inline]
    pub fn held(&self, person: ParticipantKey) -> Option<ParticipantKey> {
        self.held[person]
    }

    /// Participant currently holding `proposer`'s offer
    #[inline]
    pub fn accepted_by(&self, proposer: ParticipantKey) -> Option<ParticipantKey> {
        self.accepted_by[proposer]
    }

    /// Make `person` hold `proposer`'s offer. Only `person`'s slot is
    /// overwritten.
    ///
    /// # Returns
    ///
    /// The proposer previously held by `person`, if it was someone else.
    /// Recording that proposer's rejection is up to the caller.
    pub fn set_held(
        &mut self,
        person: ParticipantKey,
        proposer: ParticipantKey,
    ) -> Option<ParticipantKey> {
        let previous = self.held[person].replace(proposer);
        match previous {
            None => self.held_count += 1,
            Some(prev) if prev != proposer => self.detach(prev, person),
            Some(_) => {}
        }
        self.accepted_by[proposer] = Some(person);

        previous.filter(|&prev| prev != proposer)
    }

    /// Drop whatever `person` holds.
    ///
    /// Returns the released proposer.
    pub fn release(&mut self, person: ParticipantKey) -> Option<ParticipantKey> {
        let proposer = self.held[person].take()?;
        self.detach(proposer, person);
        self.held_count -= 1;
        Some(proposer)
    }

    /// Clear `proposer`'s back link if it still points at `holder`.
    #[inline]
    fn detach(&mut self, proposer: ParticipantKey, holder: ParticipantKey) {
        if self.accepted_by[proposer] == Some(holder) {
            self.accepted_by[proposer] = None;
        }
    }

    /// Number of participants holding a proposal
    #[inline]
    pub fn held_count(&self) -> usize {
        self.held_count
    }

    /// True when every participant holds a proposal
    #[inline]
    pub fn all_held(&self) -> bool {
        self.held_count == self.held.len()
    }

    // ========================================================================
    // Rejections
    // ========================================================================

    /// Record that `who` was rejected by `rejected_by`.
    ///
    /// Returns `false` if this rejection was already on file.
    pub fn record_rejection(&mut self, rejected_by: ParticipantKey, who: ParticipantKey) -> bool {
        self.rejections[who].insert(rejected_by)
    }

    /// How many distinct participants have rejected `person`
    #[inline]
    pub fn rejection_count(&self, person: ParticipantKey) -> usize {
        self.rejections[person].len()
    }

    /// Participants that rejected `person`, in key order
    pub fn rejected_by(&self, person: ParticipantKey) -> impl Iterator<Item = ParticipantKey> + '_ {
        self.rejections[person].iter().copied()
    }

    #[inline]
    pub fn was_rejected_by(&self, person: ParticipantKey, by: ParticipantKey) -> bool {
        self.rejections[person].contains(&by)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
