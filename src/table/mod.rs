//! Preference storage for the matching engine.
//!
//! ## Components
//!
//! - [`PreferenceList`]: One participant's ranked candidates with tombstones
//! - [`PreferenceTable`]: Every list, slab-backed, plus the id index
//! - [`ProposalSnapshot`]: Owned copy of the table for callers
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Validate pair | O(1) |
//! | Rank lookup | O(1) |
//! | Remove candidate | O(1) amortized |
//! | First remaining | O(1) amortized |
//! | Last remaining | O(n) |

pub mod list;
pub mod preferences;
pub mod snapshot;

pub use list::PreferenceList;
pub use preferences::PreferenceTable;
pub use snapshot::ProposalSnapshot;
