//! Accord Balance Checker
//!
//! Decides whether a complete signed graph is structurally balanced: whether
//! its nodes split into at most two factions with friendly edges inside each
//! faction and hostile edges between them.
//!
//! Two algorithms are provided:
//! - **Brute force** ([`is_balanced_brute_force`]): every triangle must hold
//!   an even number of hostile edges. O(n³).
//! - **Partition** ([`is_balanced_by_partition`]): split around a pivot node
//!   and verify the split. O(n²).
//!
//! Both fail with [`BalanceError::MissingEdge`] on an incomplete graph.
//!
//! # Examples
//!
//! ```
//! use accord_balance::{BalanceChecker, Strategy, Verdict};
//!
//! let graph = accord_graph::build(["3 3", "A ++ B", "B ++ C", "A ++ C"]).unwrap();
//! let checker = BalanceChecker::new(Strategy::BruteForce);
//!
//! match checker.check(&graph).unwrap() {
//!     Verdict::Balanced(factions) => assert!(factions.rivals.is_empty()),
//!     Verdict::Unbalanced(triangle) => panic!("unexpected witness {:?}", triangle),
//! }
//! ```

#![warn(missing_docs)]

mod checker;
mod completeness;
mod error;
mod partition;
mod triangle;

pub use checker::{check, BalanceChecker, Strategy, Verdict};
pub use completeness::require_complete;
pub use error::BalanceError;
pub use partition::{check_partition, factions, is_balanced_by_partition, Factions};
pub use triangle::{find_unbalanced_triangle, is_balanced_brute_force, is_balanced_triad, Triangle};
