//! Phase 1 proposal engine.
//!
//! ## Proposal Rules
//!
//! I. When `x` receives a proposal from `y`:
//!    - `x` rejects it at once if it already holds a proposal from someone
//!      it ranks higher than `y`
//!    - otherwise `x` holds it, rejecting any poorer proposal it held
//!
//! II. Each participant proposes down its list in rank order, stopping
//!     when a proposal is held. A later rejection makes it continue from
//!     where it stopped, never from the top.
//!
//! A rejection always tombstones the rejecting participant in the
//! rejected participant's list, so every proposal either sticks or
//! permanently shrinks one list. That bounds the run by the total number
//! of list entries.

use tracing::{debug, info};

use crate::engine::{EngineConfig, EngineStats, Phase1Outcome};
use crate::ledger::ProposalLedger;
use crate::table::{PreferenceTable, ProposalSnapshot};
use crate::types::{
    MatchError, MatchEvent, Participant, ParticipantKey, ParticipantState, Phase1Receipt,
    OUTCOME_UNFINISHED,
};

/// What happened to a single proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Offer {
    /// The target holds the proposal. `displaced` lost its place.
    Accepted { displaced: Option<ParticipantKey> },
    Rejected,
}

/// Stable Roommates phase 1 engine.
///
/// Owns the preference table and the proposal ledger of one instance.
/// Operations take caller-side participant ids and validate them before
/// touching any state.
///
/// ## Example
///
/// ```
/// use stable_roommates::MatchingEngine;
///
/// let mut engine = MatchingEngine::new(vec![
///     ("jacek", vec!["tomek", "atomek", "tytus"]),
///     ("tomek", vec!["jacek", "tytus", "atomek"]),
///     ("atomek", vec!["tomek", "tytus", "jacek"]),
///     ("tytus", vec!["tomek", "atomek", "jacek"]),
/// ]).unwrap();
///
/// let outcome = engine.run_phase1();
///
/// assert!(outcome.is_all_held());
/// assert_eq!(engine.held_proposal(&"tomek"), Some(&"jacek"));
/// ```
#[derive(Debug)]
pub struct MatchingEngine<P> {
    table: PreferenceTable<P>,
    ledger: ProposalLedger,
    config: EngineConfig,
    stats: EngineStats,
    events: Vec<MatchEvent<P>>,
}

impl<P: Participant> MatchingEngine<P> {
    /// Create an engine with the default configuration.
    pub fn new<I>(preferences: I) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = (P, Vec<P>)>,
    {
        Self::with_config(preferences, EngineConfig::default())
    }

    pub fn with_config<I>(preferences: I, config: EngineConfig) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = (P, Vec<P>)>,
    {
        let table = PreferenceTable::new(preferences)?;
        Ok(Self::from_table(table, config))
    }

    /// Create an engine over an already built table.
    pub fn from_table(table: PreferenceTable<P>, config: EngineConfig) -> Self {
        let ledger = ProposalLedger::new(table.len());
        Self {
            table,
            ledger,
            config,
            stats: EngineStats::default(),
            events: Vec::new(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn table(&self) -> &PreferenceTable<P> {
        &self.table
    }

    #[inline]
    pub fn ledger(&self) -> &ProposalLedger {
        &self.ledger
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn stats(&self) -> EngineStats {
        self.stats
    }

    /// Recorded events (empty unless the journal is enabled)
    #[inline]
    pub fn events(&self) -> &[MatchEvent<P>] {
        &self.events
    }

    /// Drain the event journal
    pub fn take_events(&mut self) -> Vec<MatchEvent<P>> {
        std::mem::take(&mut self.events)
    }

    /// Snapshot of every preference list, tombstones as `None`.
    pub fn proposals(&self) -> ProposalSnapshot<P> {
        self.table.snapshot()
    }

    /// Proposer whose offer `person` currently holds.
    ///
    /// Unknown participants hold nothing.
    pub fn held_proposal(&self, person: &P) -> Option<&P> {
        let key = self.table.key_of(person)?;
        self.ledger.held(key).map(|proposer| self.table.participant(proposer))
    }

    /// Current state of `person`, None if unknown.
    pub fn state(&self, person: &P) -> Option<ParticipantState> {
        self.table.key_of(person).map(|key| self.state_of(key))
    }

    // ========================================================================
    // Single steps
    // ========================================================================

    /// `person` proposes to `target`.
    ///
    /// # Returns
    ///
    /// `true` if `target` now holds the proposal. A displaced previous
    /// holder is rejected by `target` and becomes free to propose again.
    ///
    /// # Errors
    ///
    /// [`MatchError::InvalidProposal`] if `person` is unknown or `target`
    /// was never on `person`'s list.
    pub fn propose(&mut self, person: &P, target: &P) -> Result<bool, MatchError> {
        let (person, target) = self.table.validate(person, target)?;
        Ok(matches!(self.offer(person, target), Offer::Accepted { .. }))
    }

    /// `target` rejects `person`: `target` leaves `person`'s list and the
    /// rejection is filed under `person`. If `target` was holding
    /// `person`'s proposal it lets go of it.
    pub fn reject(&mut self, person: &P, target: &P) -> Result<(), MatchError> {
        let (person, target) = self.table.validate(person, target)?;
        self.reject_keys(person, target);
        Ok(())
    }

    /// `target` holds `person`'s proposal, displacing whoever it held.
    ///
    /// Only `target`'s slot changes. If another participant still holds
    /// `person`'s proposal it keeps holding it.
    pub fn accept(&mut self, person: &P, target: &P) -> Result<(), MatchError> {
        let (person, target) = self.table.validate(person, target)?;
        self.accept_keys(person, target);
        Ok(())
    }

    /// True if `target` already holds a proposal it prefers to `person`'s.
    ///
    /// A `person` that `target` no longer ranks (tombstoned or never
    /// listed) always loses. A held proposer that `target` no longer ranks
    /// always wins.
    pub fn has_better_proposal(&self, person: &P, target: &P) -> Result<bool, MatchError> {
        let (person, target) = self.table.validate(person, target)?;
        Ok(self.holds_better(target, person))
    }

    /// Reject the least preferred candidate still on `person`'s list.
    ///
    /// Returns `false` if the list was already exhausted.
    pub fn reject_weakest(&mut self, person: &P) -> Result<bool, MatchError> {
        let person = self.table.validate_participant(person)?;

        match self.table.last_remaining(person) {
            Some(weakest) => {
                self.reject_keys(person, weakest);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Propose down `person`'s list until a proposal is held.
    ///
    /// Anyone displaced along the way resumes proposing before this
    /// returns. Stops early if a participant runs out of candidates.
    ///
    /// # Returns
    ///
    /// `true` if `person`'s proposal is held when the cascade settles.
    pub fn propose_until_success(&mut self, person: &P) -> Result<bool, MatchError> {
        let person = self.table.validate_participant(person)?;
        Ok(self.propose_from(person))
    }

    // ========================================================================
    // Driving loop
    // ========================================================================

    /// Run the proposal sequence to its terminal state.
    pub fn run_phase1(&mut self) -> Phase1Outcome<P> {
        info!(participants = self.table.len(), order = ?self.config.visit_order, "phase 1 started");

        let order = self.config.visit_order.keys(self.table.len());
        let outcome = loop {
            if let Some(outcome) = self.outcome() {
                break outcome;
            }

            // While unfinished, someone's proposal is not held and that
            // participant still has candidates, so every pass progresses.
            for &person in &order {
                if self.state_of(person).is_proposing() {
                    self.propose_from(person);
                    if self.is_finished() {
                        break;
                    }
                }
            }
        };

        info!(
            proposals = self.stats.proposals,
            rejections = self.stats.rejections,
            held = self.ledger.held_count(),
            outcome = %outcome,
            "phase 1 finished"
        );
        outcome
    }

    /// True once every participant holds a proposal or someone has been
    /// rejected by their whole list.
    pub fn is_finished(&self) -> bool {
        self.ledger.all_held() || self.first_exhausted().is_some()
    }

    /// Terminal outcome, None while the run is unfinished.
    pub fn outcome(&self) -> Option<Phase1Outcome<P>> {
        if let Some(person) = self.first_exhausted() {
            Some(Phase1Outcome::NoStableMatching {
                exhausted: self.table.participant(person).clone(),
            })
        } else if self.ledger.all_held() {
            Some(Phase1Outcome::AllHeld)
        } else {
            None
        }
    }

    /// Summarize the run so far.
    pub fn receipt(&self) -> Phase1Receipt {
        let outcome = self
            .outcome()
            .map_or(OUTCOME_UNFINISHED, |outcome| outcome.code());

        Phase1Receipt::with_computed_root(
            self.stats.proposals,
            self.stats.acceptances,
            self.stats.rejections,
            self.stats.displacements,
            self.ledger.held_count() as u64,
            outcome,
            &self.state_bytes(),
        )
    }

    // ========================================================================
    // Internals (registration keys)
    // ========================================================================

    fn state_of(&self, person: ParticipantKey) -> ParticipantState {
        if self.is_exhausted(person) {
            ParticipantState::Exhausted
        } else if self.ledger.accepted_by(person).is_some() {
            ParticipantState::Holding
        } else {
            ParticipantState::Proposing
        }
    }

    /// Rejected by as many participants as were originally listed.
    #[inline]
    fn is_exhausted(&self, person: ParticipantKey) -> bool {
        self.ledger.rejection_count(person) == self.table.original_len(person)
    }

    fn first_exhausted(&self) -> Option<ParticipantKey> {
        (0..self.table.len()).find(|&person| self.is_exhausted(person))
    }

    fn holds_better(&self, target: ParticipantKey, person: ParticipantKey) -> bool {
        let Some(previous) = self.ledger.held(target) else {
            return false;
        };
        if previous == person {
            return false;
        }

        match self.table.rank_of(target, person) {
            None => true,
            Some(current) => match self.table.rank_of(target, previous) {
                Some(previous_rank) => previous_rank < current,
                // an unranked holder keeps its place against any newcomer
                None => true,
            },
        }
    }

    fn offer(&mut self, person: ParticipantKey, target: ParticipantKey) -> Offer {
        self.stats.proposals += 1;
        let event = MatchEvent::Proposed { person: self.name(person), target: self.name(target) };
        self.emit(event);

        if self.ledger.held(target) == Some(person) {
            return Offer::Accepted { displaced: None };
        }

        if self.holds_better(target, person) {
            self.reject_keys(person, target);
            Offer::Rejected
        } else {
            let displaced = self.accept_keys(person, target);
            Offer::Accepted { displaced }
        }
    }

    fn accept_keys(
        &mut self,
        person: ParticipantKey,
        target: ParticipantKey,
    ) -> Option<ParticipantKey> {
        let displaced = self.ledger.set_held(target, person);
        self.stats.acceptances += 1;
        let event = MatchEvent::Accepted { holder: self.name(target), proposer: self.name(person) };
        self.emit(event);

        if let Some(previous) = displaced {
            self.stats.displacements += 1;
            let event = MatchEvent::Displaced {
                holder: self.name(target),
                displaced: self.name(previous),
                by: self.name(person),
            };
            self.emit(event);
            self.reject_keys(previous, target);
        }

        displaced
    }

    fn reject_keys(&mut self, person: ParticipantKey, target: ParticipantKey) {
        if self.ledger.held(target) == Some(person) {
            self.ledger.release(target);
        }

        let removed = self.table.remove(person, target);
        let recorded = self.ledger.record_rejection(target, person);
        if !(removed || recorded) {
            return;
        }

        self.stats.rejections += 1;
        let event = MatchEvent::Rejected { person: self.name(person), by: self.name(target) };
        self.emit(event);

        if self.is_exhausted(person) {
            let event = MatchEvent::Exhausted { person: self.name(person) };
            self.emit(event);
        }
    }

    /// Rule II for `start`, plus everyone displaced while it runs.
    fn propose_from(&mut self, start: ParticipantKey) -> bool {
        let mut pending = vec![start];

        while let Some(person) = pending.pop() {
            // Bounded by the length of person's list: every pass either
            // gets held or tombstones one entry.
            while self.ledger.accepted_by(person).is_none() {
                let Some(target) = self.table.first_remaining(person) else {
                    break;
                };
                if let Offer::Accepted { displaced } = self.offer(person, target) {
                    pending.extend(displaced);
                }
            }

            if self.is_exhausted(person) {
                debug!(person = %self.table.participant(person), "cascade halted");
                break;
            }
        }

        self.ledger.accepted_by(start).is_some()
    }

    fn state_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        for person in 0..self.table.len() {
            let list = self.table.list(person);
            bytes.extend_from_slice(&(list.len() as u64).to_le_bytes());
            for slot in list.slots() {
                let word = slot.active().map_or(0, |key| key as u64 + 1);
                bytes.extend_from_slice(&word.to_le_bytes());
            }
        }

        for person in 0..self.table.len() {
            let word = self.ledger.held(person).map_or(0, |key| key as u64 + 1);
            bytes.extend_from_slice(&word.to_le_bytes());
        }

        bytes
    }

    #[inline]
    fn name(&self, key: ParticipantKey) -> P {
        self.table.participant(key).clone()
    }

    fn emit(&mut self, event: MatchEvent<P>) {
        event.log();
        if self.config.record_events {
            self.events.push(event);
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LookupError;

    fn four() -> MatchingEngine<&'static str> {
        MatchingEngine::new(vec![
            ("jacek", vec!["tomek", "atomek", "tytus"]),
            ("tomek", vec!["jacek", "tytus", "atomek"]),
            ("atomek", vec!["tomek", "tytus", "jacek"]),
            ("tytus", vec!["tomek", "atomek", "jacek"]),
        ])
        .unwrap()
    }

    fn pair() -> MatchingEngine<&'static str> {
        MatchingEngine::new(vec![("jacek", vec!["tomek"]), ("tomek", vec!["jacek"])]).unwrap()
    }

    #[test]
    fn test_propose_unknown_person() {
        let mut engine = four();

        let err = engine.propose(&"ghost", &"ghost").unwrap_err();
        assert_eq!(
            err,
            MatchError::InvalidProposal(LookupError::UnknownParticipant("ghost".into()))
        );
    }

    #[test]
    fn test_propose_unknown_target() {
        let mut engine = four();

        let err = engine.propose(&"jacek", &"ghost").unwrap_err();
        assert!(matches!(
            err,
            MatchError::InvalidProposal(LookupError::NotInPreferenceList { .. })
        ));
    }

    #[test]
    fn test_failed_validation_leaves_state() {
        let mut engine = four();
        let before = engine.proposals();

        assert!(engine.reject(&"jacek", &"ghost").is_err());
        assert!(engine.accept(&"ghost", &"jacek").is_err());
        assert!(engine.reject_weakest(&"ghost").is_err());

        assert_eq!(engine.proposals(), before);
        assert_eq!(engine.stats(), EngineStats::default());
    }

    #[test]
    fn test_has_better_proposal() {
        let mut engine = four();

        // jacek prefers tomek over atomek
        assert!(engine.propose(&"tomek", &"jacek").unwrap());
        assert!(engine.has_better_proposal(&"atomek", &"jacek").unwrap());
    }

    #[test]
    fn test_has_no_better_proposal() {
        let mut engine = four();

        assert!(engine.propose(&"atomek", &"jacek").unwrap());
        assert!(!engine.has_better_proposal(&"tomek", &"jacek").unwrap());
    }

    #[test]
    fn test_has_better_proposal_is_read_only() {
        let mut engine = four();
        engine.propose(&"atomek", &"jacek").unwrap();
        let before = engine.proposals();

        engine.has_better_proposal(&"tomek", &"jacek").unwrap();

        assert_eq!(engine.proposals(), before);
        assert_eq!(engine.held_proposal(&"jacek"), Some(&"atomek"));
    }

    #[test]
    fn test_nothing_held_is_never_better() {
        let engine = four();
        assert!(!engine.has_better_proposal(&"tytus", &"jacek").unwrap());
    }

    #[test]
    fn test_reject() {
        let mut engine = pair();

        engine.reject(&"jacek", &"tomek").unwrap();

        let snapshot = engine.proposals();
        assert_eq!(snapshot.get(&"jacek"), Some(&[None][..]));
        assert_eq!(snapshot.get(&"tomek"), Some(&[Some("jacek")][..]));
    }

    #[test]
    fn test_reject_releases_held_proposal() {
        let mut engine = pair();
        engine.accept(&"jacek", &"tomek").unwrap();

        engine.reject(&"jacek", &"tomek").unwrap();

        assert_eq!(engine.held_proposal(&"tomek"), None);
        assert_eq!(engine.state(&"jacek"), Some(ParticipantState::Exhausted));
    }

    #[test]
    fn test_reject_twice_counts_once() {
        let mut engine = pair();

        engine.reject(&"jacek", &"tomek").unwrap();
        engine.reject(&"jacek", &"tomek").unwrap();

        assert_eq!(engine.stats().rejections, 1);
        assert_eq!(engine.ledger().rejection_count(0), 1);
    }

    #[test]
    fn test_accept() {
        let mut engine = pair();

        engine.accept(&"jacek", &"tomek").unwrap();

        assert_eq!(engine.held_proposal(&"tomek"), Some(&"jacek"));
        assert_eq!(engine.held_proposal(&"jacek"), None);
        assert_eq!(engine.state(&"jacek"), Some(ParticipantState::Holding));
    }

    #[test]
    fn test_reject_weakest() {
        let mut engine = MatchingEngine::new(vec![
            ("jacek", vec!["tomek", "atomek"]),
            ("tomek", vec!["jacek", "atomek"]),
            ("atomek", vec!["jacek", "tomek"]),
        ])
        .unwrap();

        assert!(engine.reject_weakest(&"jacek").unwrap());

        let snapshot = engine.proposals();
        assert_eq!(snapshot.get(&"jacek"), Some(&[Some("tomek"), None][..]));
        assert_eq!(snapshot.get(&"tomek"), Some(&[Some("jacek"), Some("atomek")][..]));
        assert_eq!(snapshot.get(&"atomek"), Some(&[Some("jacek"), Some("tomek")][..]));
    }

    #[test]
    fn test_reject_weakest_until_empty() {
        let mut engine = pair();

        assert!(engine.reject_weakest(&"jacek").unwrap());
        assert!(!engine.reject_weakest(&"jacek").unwrap());
        assert_eq!(engine.stats().rejections, 1);
    }

    #[test]
    fn test_propose_displaces_previous() {
        let mut engine = four();

        assert!(engine.propose(&"atomek", &"jacek").unwrap());
        assert!(engine.propose(&"tomek", &"jacek").unwrap());

        assert_eq!(engine.held_proposal(&"jacek"), Some(&"tomek"));
        // atomek lost jacek for good
        let snapshot = engine.proposals();
        assert_eq!(snapshot.get(&"atomek"), Some(&[Some("tomek"), Some("tytus"), None][..]));
        assert!(engine.ledger().was_rejected_by(2, 0));
        assert_eq!(engine.state(&"atomek"), Some(ParticipantState::Proposing));
        assert_eq!(engine.stats().displacements, 1);
    }

    #[test]
    fn test_propose_rejected_removes_target() {
        let mut engine = four();

        engine.propose(&"tomek", &"jacek").unwrap();
        assert!(!engine.propose(&"atomek", &"jacek").unwrap());

        assert_eq!(engine.held_proposal(&"jacek"), Some(&"tomek"));
        let snapshot = engine.proposals();
        assert_eq!(snapshot.get(&"atomek"), Some(&[Some("tomek"), Some("tytus"), None][..]));
    }

    #[test]
    fn test_propose_again_while_held() {
        let mut engine = four();

        assert!(engine.propose(&"tomek", &"jacek").unwrap());
        assert!(engine.propose(&"tomek", &"jacek").unwrap());

        assert_eq!(engine.held_proposal(&"jacek"), Some(&"tomek"));
        assert_eq!(engine.stats().displacements, 0);
        assert_eq!(engine.stats().rejections, 0);
    }

    #[test]
    fn test_propose_to_removed_rejected() {
        let mut engine = four();

        // atomek has dropped jacek from its list
        engine.reject(&"atomek", &"jacek").unwrap();
        engine.propose(&"tytus", &"atomek").unwrap();
        assert!(engine.has_better_proposal(&"jacek", &"atomek").unwrap());
    }

    #[test]
    fn test_unranked_holder_keeps_place() {
        let mut engine = four();

        engine.propose(&"atomek", &"jacek").unwrap();
        // atomek rejects jacek, so atomek leaves jacek's list
        engine.reject(&"jacek", &"atomek").unwrap();

        assert!(engine.has_better_proposal(&"tytus", &"jacek").unwrap());
        assert!(!engine.propose(&"tytus", &"jacek").unwrap());

        assert_eq!(engine.held_proposal(&"jacek"), Some(&"atomek"));
        assert_eq!(engine.proposals().get(&"tytus"), Some(&[Some("tomek"), Some("atomek"), None][..]));
        assert_eq!(engine.stats().displacements, 0);
    }

    #[test]
    fn test_accept_leaves_other_holder() {
        let config = EngineConfig::default().with_event_journal(true);
        let mut engine = MatchingEngine::with_config(
            vec![
                ("jacek", vec!["tomek", "atomek", "tytus"]),
                ("tomek", vec!["jacek", "tytus", "atomek"]),
                ("atomek", vec!["tomek", "tytus", "jacek"]),
                ("tytus", vec!["tomek", "atomek", "jacek"]),
            ],
            config,
        )
        .unwrap();

        engine.accept(&"jacek", &"tomek").unwrap();
        engine.accept(&"jacek", &"atomek").unwrap();

        assert_eq!(engine.held_proposal(&"tomek"), Some(&"jacek"));
        assert_eq!(engine.held_proposal(&"atomek"), Some(&"jacek"));
        assert_eq!(engine.ledger().held_count(), 2);
        assert_eq!(engine.stats().rejections, 0);
        assert_eq!(
            engine.proposals().get(&"jacek"),
            Some(&[Some("tomek"), Some("atomek"), Some("tytus")][..])
        );
        assert_eq!(
            engine.events(),
            &[
                MatchEvent::Accepted { holder: "tomek", proposer: "jacek" },
                MatchEvent::Accepted { holder: "atomek", proposer: "jacek" },
            ]
        );
    }

    #[test]
    fn test_propose_until_success_cascades() {
        let mut engine = four();

        engine.propose(&"atomek", &"jacek").unwrap();
        assert!(engine.propose_until_success(&"tomek").unwrap());

        // tomek displaced atomek at jacek; atomek carried on to tomek
        assert_eq!(engine.held_proposal(&"jacek"), Some(&"tomek"));
        assert_eq!(engine.held_proposal(&"tomek"), Some(&"atomek"));
        assert_eq!(engine.state(&"atomek"), Some(ParticipantState::Holding));
    }

    #[test]
    fn test_run_phase1_four() {
        let mut engine = four();

        let outcome = engine.run_phase1();

        assert_eq!(outcome, Phase1Outcome::AllHeld);
        assert!(engine.is_finished());
        assert_eq!(engine.held_proposal(&"tomek"), Some(&"jacek"));
        assert_eq!(engine.held_proposal(&"jacek"), Some(&"tomek"));
        assert_eq!(engine.held_proposal(&"atomek"), Some(&"tytus"));
        assert_eq!(engine.held_proposal(&"tytus"), Some(&"atomek"));

        let snapshot = engine.proposals();
        assert_eq!(snapshot.get(&"atomek"), Some(&[None, Some("tytus"), Some("jacek")][..]));
        assert_eq!(snapshot.get(&"tytus"), Some(&[None, Some("atomek"), Some("jacek")][..]));
    }

    #[test]
    fn test_run_phase1_no_stable_matching() {
        let mut engine = MatchingEngine::new(vec![
            ("a", vec!["b", "c", "d"]),
            ("b", vec!["c", "a", "d"]),
            ("c", vec!["a", "b", "d"]),
            ("d", vec!["a", "b", "c"]),
        ])
        .unwrap();

        let outcome = engine.run_phase1();

        assert_eq!(outcome, Phase1Outcome::NoStableMatching { exhausted: "d" });
        assert_eq!(engine.state(&"d"), Some(ParticipantState::Exhausted));
        assert_eq!(engine.proposals().get(&"d"), Some(&[None, None, None][..]));
        assert_eq!(engine.stats().proposals, 6);
    }

    #[test]
    fn test_run_phase1_empty_instance() {
        let mut engine: MatchingEngine<&str> = MatchingEngine::new(vec![]).unwrap();

        assert!(engine.is_finished());
        assert_eq!(engine.run_phase1(), Phase1Outcome::AllHeld);
    }

    #[test]
    fn test_run_phase1_empty_list() {
        let mut engine =
            MatchingEngine::new(vec![("a", vec![]), ("b", vec![])]).unwrap();

        assert_eq!(engine.run_phase1(), Phase1Outcome::NoStableMatching { exhausted: "a" });
        assert_eq!(engine.stats().proposals, 0);
    }

    #[test]
    fn test_outcome_unfinished() {
        let engine = four();

        assert!(!engine.is_finished());
        assert_eq!(engine.outcome(), None);
        assert_eq!(engine.receipt().outcome, OUTCOME_UNFINISHED);
    }

    #[test]
    fn test_event_journal() {
        let config = EngineConfig::default().with_event_journal(true);
        let mut engine =
            MatchingEngine::with_config(vec![("a", vec!["b"]), ("b", vec!["a"])], config).unwrap();

        engine.run_phase1();

        let events = engine.take_events();
        assert_eq!(
            events,
            vec![
                MatchEvent::Proposed { person: "a", target: "b" },
                MatchEvent::Accepted { holder: "b", proposer: "a" },
                MatchEvent::Proposed { person: "b", target: "a" },
                MatchEvent::Accepted { holder: "a", proposer: "b" },
            ]
        );
        assert!(engine.events().is_empty());
    }

    #[test]
    fn test_event_journal_off_by_default() {
        let mut engine = four();
        engine.run_phase1();
        assert!(engine.events().is_empty());
    }

    #[test]
    fn test_unknown_participant_holds_nothing() {
        let engine = four();
        assert_eq!(engine.held_proposal(&"ghost"), None);
        assert_eq!(engine.state(&"ghost"), None);
    }
}
