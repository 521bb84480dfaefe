//! Edge lookups that refuse to guess

use crate::BalanceError;
use accord_graph::{Sign, SignedGraph};

/// Fail on the first pair of distinct nodes without a sign, in graph order
pub fn require_complete(graph: &SignedGraph) -> Result<(), BalanceError> {
    if graph.is_complete() {
        return Ok(());
    }
    match graph.missing_pairs().first() {
        Some(&(a, b)) => Err(missing(a, b)),
        None => Ok(()),
    }
}

/// Sign between two nodes, or `MissingEdge`
pub(crate) fn edge_sign(graph: &SignedGraph, a: &str, b: &str) -> Result<Sign, BalanceError> {
    graph.sign(a, b).ok_or_else(|| missing(a, b))
}

fn missing(a: &str, b: &str) -> BalanceError {
    BalanceError::MissingEdge {
        a: a.to_string(),
        b: b.to_string(),
    }
}
