//! Point-in-time copy of the preference table.

use std::fmt;

/// Every participant's list at one moment, tombstones as `None`.
///
/// Rows are in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalSnapshot<P> {
    rows: Vec<(P, Vec<Option<P>>)>,
}

impl<P> ProposalSnapshot<P> {
    pub fn new(rows: Vec<(P, Vec<Option<P>>)>) -> Self {
        Self { rows }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[(P, Vec<Option<P>>)] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<(P, Vec<Option<P>>)> {
        self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = (&P, &[Option<P>])> {
        self.rows.iter().map(|(person, slots)| (person, slots.as_slice()))
    }
}

impl<P: PartialEq> ProposalSnapshot<P> {
    /// Slots of `person`'s list.
    pub fn get(&self, person: &P) -> Option<&[Option<P>]> {
        self.rows
            .iter()
            .find(|(owner, _)| owner == person)
            .map(|(_, slots)| slots.as_slice())
    }

    /// Number of tombstoned slots in `person`'s list.
    pub fn removed_count(&self, person: &P) -> Option<usize> {
        self.get(person)
            .map(|slots| slots.iter().filter(|slot| slot.is_none()).count())
    }
}

impl<P> From<Vec<(P, Vec<Option<P>>)>> for ProposalSnapshot<P> {
    fn from(rows: Vec<(P, Vec<Option<P>>)>) -> Self {
        Self::new(rows)
    }
}

impl<P: fmt::Display> fmt::Display for ProposalSnapshot<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (person, slots) in &self.rows {
            write!(f, "{person}:")?;
            for slot in slots {
                match slot {
                    Some(target) => write!(f, " {target}")?,
                    None => f.write_str(" x")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_lookup() {
        let snapshot = ProposalSnapshot::from(vec![
            ("jacek", vec![None]),
            ("tomek", vec![Some("jacek")]),
        ]);

        assert_eq!(snapshot.get(&"jacek"), Some(&[None][..]));
        assert_eq!(snapshot.removed_count(&"jacek"), Some(1));
        assert_eq!(snapshot.removed_count(&"tomek"), Some(0));
        assert_eq!(snapshot.get(&"ghost"), None);
    }

    #[test]
    fn test_snapshot_display() {
        let snapshot = ProposalSnapshot::from(vec![
            ("jacek", vec![None]),
            ("tomek", vec![Some("jacek")]),
        ]);

        assert_eq!(snapshot.to_string(), "jacek: x\ntomek: jacek\n");
    }
}
