//! Preference table: every participant's ranked list.
//!
//! ## Architecture
//!
//! - **Slab**: one [`PreferenceList`] per participant, keyed by
//!   registration key
//! - **HashMap**: participant id to registration key, for translating
//!   caller ids at the public boundary
//! - **Vec**: registration key back to participant id
//!
//! Each list plays two roles: "my remaining candidates" for its owner, and
//! "how I rank you" for everyone proposing to the owner. There is exactly
//! one copy of it.
//!
//! ## Example
//!
//! ```
//! use stable_roommates::table::PreferenceTable;
//!
//! let table = PreferenceTable::new(vec![
//!     ("jacek", vec!["tomek", "atomek"]),
//!     ("tomek", vec!["jacek", "atomek"]),
//!     ("atomek", vec!["jacek", "tomek"]),
//! ]).unwrap();
//!
//! let (jacek, atomek) = table.validate(&"jacek", &"atomek").unwrap();
//! assert_eq!(table.rank_of(jacek, atomek), Some(1));
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;

use slab::Slab;

use crate::table::{PreferenceList, ProposalSnapshot};
use crate::types::{BuildError, LookupError, Participant, ParticipantKey};

/// All preference lists of one matching instance.
#[derive(Debug, Clone)]
pub struct PreferenceTable<P> {
    /// Preference lists. Key: registration key
    lists: Slab<PreferenceList>,

    /// Registration key to participant id
    participants: Vec<P>,

    /// Participant id to registration key
    index: HashMap<P, ParticipantKey>,
}

impl<P: Participant> PreferenceTable<P> {
    /// Build a table from `(participant, ranked candidates)` pairs.
    ///
    /// Participants are registered in iteration order.
    ///
    /// # Errors
    ///
    /// [`BuildError`] if a participant is registered twice, lists
    /// themselves, lists a candidate twice, or lists someone who was never
    /// registered.
    pub fn new<I>(preferences: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (P, Vec<P>)>,
    {
        let preferences: Vec<(P, Vec<P>)> = preferences.into_iter().collect();

        let mut participants = Vec::with_capacity(preferences.len());
        let mut index = HashMap::with_capacity(preferences.len());
        for (person, _) in &preferences {
            if index.insert(person.clone(), participants.len()).is_some() {
                return Err(BuildError::DuplicateParticipant(person.to_string()));
            }
            participants.push(person.clone());
        }

        let mut lists = Slab::with_capacity(preferences.len());
        for (owner, (person, candidates)) in preferences.iter().enumerate() {
            let mut seen = HashSet::with_capacity(candidates.len());
            let mut entries = Vec::with_capacity(candidates.len());

            for target in candidates {
                if target == person {
                    return Err(BuildError::SelfPreference(person.to_string()));
                }
                let key = *index.get(target).ok_or_else(|| BuildError::UnlistedParticipant {
                    person: person.to_string(),
                    target: target.to_string(),
                })?;
                if !seen.insert(key) {
                    return Err(BuildError::DuplicateEntry {
                        person: person.to_string(),
                        target: target.to_string(),
                    });
                }
                entries.push(key);
            }

            let key = lists.insert(PreferenceList::new(&entries));
            debug_assert_eq!(key, owner);
        }

        Ok(Self { lists, participants, index })
    }

    // ========================================================================
    // Size and Lookup
    // ========================================================================

    /// Number of registered participants
    #[inline]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Participants in registration order
    #[inline]
    pub fn participants(&self) -> &[P] {
        &self.participants
    }

    /// Participant id for a registration key
    #[inline]
    pub fn participant(&self, key: ParticipantKey) -> &P {
        &self.participants[key]
    }

    /// Registration key for a participant id
    #[inline]
    pub fn key_of(&self, person: &P) -> Option<ParticipantKey> {
        self.index.get(person).copied()
    }

    /// The list owned by `person`
    #[inline]
    pub fn list(&self, person: ParticipantKey) -> &PreferenceList {
        &self.lists[person]
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Resolve a single participant id.
    pub fn validate_participant(&self, person: &P) -> Result<ParticipantKey, LookupError> {
        self.key_of(person)
            .ok_or_else(|| LookupError::UnknownParticipant(person.to_string()))
    }

    /// Resolve a `(person, target)` pair.
    ///
    /// `target` only has to appear in `person`'s list in some state; a
    /// tombstoned entry passes.
    pub fn validate(
        &self,
        person: &P,
        target: &P,
    ) -> Result<(ParticipantKey, ParticipantKey), LookupError> {
        let person_key = self.validate_participant(person)?;

        match self.key_of(target) {
            Some(target_key) if self.lists[person_key].contains(target_key) => {
                Ok((person_key, target_key))
            }
            _ => Err(LookupError::NotInPreferenceList {
                person: person.to_string(),
                target: target.to_string(),
            }),
        }
    }

    // ========================================================================
    // Ranking (by registration key)
    // ========================================================================

    /// Rank of `target` in `person`'s list, None if never listed or removed.
    #[inline]
    pub fn rank_of(&self, person: ParticipantKey, target: ParticipantKey) -> Option<usize> {
        self.lists[person].rank_of(target)
    }

    #[inline]
    pub fn first_remaining(&self, person: ParticipantKey) -> Option<ParticipantKey> {
        self.lists[person].first_remaining()
    }

    #[inline]
    pub fn last_remaining(&self, person: ParticipantKey) -> Option<ParticipantKey> {
        self.lists[person].last_remaining()
    }

    #[inline]
    pub fn remaining_len(&self, person: ParticipantKey) -> usize {
        self.lists[person].remaining()
    }

    #[inline]
    pub fn original_len(&self, person: ParticipantKey) -> usize {
        self.lists[person].len()
    }

    #[inline]
    pub fn is_exhausted(&self, person: ParticipantKey) -> bool {
        self.lists[person].is_exhausted()
    }

    /// Tombstone `target` in `person`'s list. Idempotent.
    ///
    /// Returns `true` if an entry was actually tombstoned.
    #[inline]
    pub fn remove(&mut self, person: ParticipantKey, target: ParticipantKey) -> bool {
        self.lists[person].remove(target)
    }

    // ========================================================================
    // Snapshots
    // ========================================================================

    /// Copy of every list with tombstones as `None`, in registration order.
    pub fn snapshot(&self) -> ProposalSnapshot<P> {
        let rows = self
            .lists
            .iter()
            .map(|(owner, list)| {
                let slots = list
                    .slots()
                    .iter()
                    .map(|slot| slot.active().map(|key| self.participants[key].clone()))
                    .collect();
                (self.participants[owner].clone(), slots)
            })
            .collect();

        ProposalSnapshot::new(rows)
    }
}

impl<P: Participant> fmt::Display for PreferenceTable<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (owner, list) in self.lists.iter() {
            write!(f, "{}:", self.participants[owner])?;
            for slot in list.slots() {
                match slot.active() {
                    Some(key) => write!(f, " {}", self.participants[key])?,
                    None => f.write_str(" x")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
