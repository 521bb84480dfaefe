//! Strategy selection and reportable verdicts

use crate::completeness::require_complete;
use crate::partition::{check_partition, factions, Factions};
use crate::triangle::find_unbalanced_triangle;
use crate::{BalanceError, Triangle};
use accord_graph::SignedGraph;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Which balance algorithm to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Inspect every triangle, O(n³)
    BruteForce,

    /// Split around a pivot and verify the split, O(n²)
    #[default]
    Partition,
}

impl Strategy {
    /// All strategies, cheapest last
    pub const ALL: [Strategy; 2] = [Strategy::BruteForce, Strategy::Partition];

    /// Stable name used in configuration and output
    pub fn name(self) -> &'static str {
        match self {
            Strategy::BruteForce => "brute-force",
            Strategy::Partition => "partition",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brute-force" | "brute_force" | "triangle" => Ok(Strategy::BruteForce),
            "partition" | "factions" => Ok(Strategy::Partition),
            other => Err(format!("Unknown strategy '{}'", other)),
        }
    }
}

/// Outcome of a balance check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The graph splits cleanly into these factions
    Balanced(Factions),

    /// This triangle has an odd number of hostile edges
    Unbalanced(Triangle),
}

impl Verdict {
    /// Whether the graph is balanced
    pub fn is_balanced(&self) -> bool {
        matches!(self, Verdict::Balanced(_))
    }
}

/// Runs balance checks with a fixed strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceChecker {
    strategy: Strategy,
}

impl BalanceChecker {
    /// Create a checker for the given strategy
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// The configured strategy
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Decide balance and explain the answer
    pub fn check(&self, graph: &SignedGraph) -> Result<Verdict, BalanceError> {
        debug!(
            strategy = %self.strategy,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Checking balance"
        );
        let verdict = check(graph, self.strategy)?;
        debug!(strategy = %self.strategy, balanced = verdict.is_balanced(), "Balance checked");
        Ok(verdict)
    }

    /// Decide balance
    pub fn is_balanced(&self, graph: &SignedGraph) -> Result<bool, BalanceError> {
        Ok(self.check(graph)?.is_balanced())
    }
}

/// Decide balance with the given strategy
///
/// Both strategies agree on every complete graph. A balanced verdict
/// carries the pivot split; an unbalanced one carries a witness triangle.
pub fn check(graph: &SignedGraph, strategy: Strategy) -> Result<Verdict, BalanceError> {
    match strategy {
        Strategy::BruteForce => {
            require_complete(graph)?;
            match find_unbalanced_triangle(graph)? {
                Some(triangle) => Ok(Verdict::Unbalanced(triangle)),
                None => Ok(Verdict::Balanced(factions(graph)?)),
            }
        }
        Strategy::Partition => Ok(match check_partition(graph)? {
            Ok(factions) => Verdict::Balanced(factions),
            Err(triangle) => Verdict::Unbalanced(triangle),
        }),
    }
}
