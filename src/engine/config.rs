//! Engine configuration.
//!
//! The configuration is plain in-memory data; nothing here reads the
//! environment or the filesystem.

use crate::types::ParticipantKey;

/// Order in which the driving loop visits participants.
///
/// Any order reaches the same reduced preference structure, but the
/// intermediate bookkeeping (and therefore the event journal) depends on
/// it. Both orders are deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisitOrder {
    /// Participants in the order they were registered
    #[default]
    Registration,
    /// Participants in reverse registration order
    Reverse,
}

impl VisitOrder {
    /// Registration keys of `participants` participants in visit order.
    pub fn keys(self, participants: usize) -> Vec<ParticipantKey> {
        match self {
            VisitOrder::Registration => (0..participants).collect(),
            VisitOrder::Reverse => (0..participants).rev().collect(),
        }
    }
}

/// Matching engine configuration.
///
/// ## Example
///
/// ```
/// use stable_roommates::engine::{EngineConfig, VisitOrder};
///
/// let config = EngineConfig::default()
///     .with_visit_order(VisitOrder::Reverse)
///     .with_event_journal(true);
///
/// assert_eq!(config.visit_order, VisitOrder::Reverse);
/// assert!(config.record_events);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    /// Visitation order of the driving loop
    pub visit_order: VisitOrder,

    /// Keep every [`MatchEvent`](crate::types::MatchEvent) in an in-engine journal
    pub record_events: bool,
}

impl EngineConfig {
    pub fn with_visit_order(mut self, visit_order: VisitOrder) -> Self {
        self.visit_order = visit_order;
        self
    }

    pub fn with_event_journal(mut self, record_events: bool) -> Self {
        self.record_events = record_events;
        self
    }
}
