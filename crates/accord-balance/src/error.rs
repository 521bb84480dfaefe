//! Balance checker error types

use thiserror::Error;

/// Errors that can occur while checking balance
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BalanceError {
    /// A pair of distinct nodes has no recorded sign
    #[error("Missing edge between '{a}' and '{b}': graph is not complete")]
    MissingEdge {
        /// First node of the pair (earlier in graph order)
        a: String,
        /// Second node of the pair
        b: String,
    },
}
