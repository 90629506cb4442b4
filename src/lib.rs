//! # Stable Roommates
//!
//! Phase 1 of Irving's Stable Roommates algorithm: participants propose
//! down their ranked lists until everyone holds exactly one proposal, or
//! someone has been rejected by every candidate (no stable matching).
//!
//! ## Architecture
//!
//! - **Types**: Participant ids, list slots, events, receipts, errors
//! - **Table**: Slab-backed preference lists with tombstoning
//! - **Ledger**: Held proposals and rejection history
//! - **Engine**: The proposal/rejection protocol and its driving loop
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Fixed visitation order, reproducible state roots
//! 2. **Stable Ranks**: Removing a candidate never shifts anyone else's rank
//! 3. **Synchronous Execution**: No I/O, no suspension points
//! 4. **Observability without side effects**: Events go to `tracing` and an
//!    optional journal, never back into the algorithm
//!
//! Computing the final matching (phase 2, rotation elimination) is out of
//! scope.

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Participant, Slot, MatchEvent, Phase1Receipt, errors
pub mod types;

/// Preference storage: PreferenceList, PreferenceTable, ProposalSnapshot
pub mod table;

/// Proposal ledger: held proposals and rejections
pub mod ledger;

/// Matching engine: phase 1 driving loop
pub mod engine;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{MatchError, MatchEvent, Participant, ParticipantState, Phase1Receipt};
pub use table::{PreferenceTable, ProposalSnapshot};
pub use ledger::ProposalLedger;
pub use engine::{EngineConfig, MatchingEngine, Phase1Outcome, VisitOrder};
