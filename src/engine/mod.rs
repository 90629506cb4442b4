//! Matching engine module.
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Same input and visit order always produce the same
//!    reduced table, held proposals and state root
//! 2. **Synchronous Execution**: Every displacement cascade completes
//!    before the next participant is visited
//! 3. **Bounded Work**: Each proposal is either held or removes one list
//!    entry for good, so a run takes at most as many steps as there are
//!    list entries
//!
//! ## Termination
//!
//! A run ends when either
//!
//! - every participant holds exactly one proposal, or
//! - some participant has been rejected by everyone on their list, which
//!   proves the instance has no stable matching
//!
//! ## Example
//!
//! ```
//! use stable_roommates::engine::{MatchingEngine, Phase1Outcome};
//!
//! let mut engine = MatchingEngine::new(vec![
//!     ("a", vec!["b", "c", "d"]),
//!     ("b", vec!["c", "a", "d"]),
//!     ("c", vec!["a", "b", "d"]),
//!     ("d", vec!["a", "b", "c"]),
//! ]).unwrap();
//!
//! // d is everyone's last choice
//! let outcome = engine.run_phase1();
//! assert_eq!(outcome, Phase1Outcome::NoStableMatching { exhausted: "d" });
//! ```

pub mod config;
pub mod matcher;
pub mod outcome;

pub use config::{EngineConfig, VisitOrder};
pub use matcher::MatchingEngine;
pub use outcome::{EngineStats, Phase1Outcome};
