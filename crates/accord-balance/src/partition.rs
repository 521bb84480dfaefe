//! Two-faction balance check from a single pivot
//!
//! The first node in graph order is the pivot. Every other node joins the
//! pivot's faction when friendly with it, the rival faction otherwise. The
//! graph is balanced iff that split is consistent: friendly inside each
//! faction, hostile across. Any inconsistent pair forms an unbalanced
//! triangle together with the pivot.

use crate::completeness::{edge_sign, require_complete};
use crate::{BalanceError, Triangle};
use accord_graph::SignedGraph;
use tracing::debug;

/// The two factions of a pivot split
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Factions {
    /// The pivot followed by every node friendly with it, in graph order
    pub allies: Vec<String>,

    /// Every node hostile to the pivot, in graph order
    pub rivals: Vec<String>,
}

impl Factions {
    /// The node the split was derived from (`None` for an empty graph)
    pub fn pivot(&self) -> Option<&str> {
        self.allies.first().map(String::as_str)
    }

    /// Total number of nodes across both factions
    pub fn len(&self) -> usize {
        self.allies.len() + self.rivals.len()
    }

    /// Whether both factions are empty
    pub fn is_empty(&self) -> bool {
        self.allies.is_empty() && self.rivals.is_empty()
    }
}

/// Split the graph around its first node
///
/// Only the edges to the pivot are inspected.
pub fn factions(graph: &SignedGraph) -> Result<Factions, BalanceError> {
    let mut nodes = graph.nodes();
    let Some(pivot) = nodes.next() else {
        return Ok(Factions::default());
    };

    let mut factions = Factions {
        allies: vec![pivot.to_string()],
        rivals: Vec::new(),
    };
    for node in nodes {
        if edge_sign(graph, pivot, node)?.is_friendly() {
            factions.allies.push(node.to_string());
        } else {
            factions.rivals.push(node.to_string());
        }
    }

    debug!(
        pivot,
        allies = factions.allies.len(),
        rivals = factions.rivals.len(),
        "Split graph around pivot"
    );
    Ok(factions)
}

/// Check the pivot split and return either the factions or a witness
///
/// Pairs involving the pivot are consistent by construction, so only pairs
/// of non-pivot nodes are inspected.
pub fn check_partition(graph: &SignedGraph) -> Result<Result<Factions, Triangle>, BalanceError> {
    require_complete(graph)?;
    let factions = factions(graph)?;
    if factions.is_empty() {
        return Ok(Ok(factions));
    }

    let pivot = factions.allies[0].as_str();
    let allies = &factions.allies[1..];
    let rivals = &factions.rivals[..];

    // within each faction every pair must be friendly
    for members in [allies, rivals] {
        for (i, u) in members.iter().enumerate() {
            for v in &members[i + 1..] {
                if edge_sign(graph, u, v)?.is_hostile() {
                    return witness(graph, pivot, u, v).map(Err);
                }
            }
        }
    }

    // across factions every pair must be hostile
    for u in allies {
        for v in rivals {
            if edge_sign(graph, u, v)?.is_friendly() {
                return witness(graph, pivot, u, v).map(Err);
            }
        }
    }

    Ok(Ok(factions))
}

/// O(n²) balance check over a two-faction split
///
/// # Examples
///
/// ```
/// use accord_balance::is_balanced_by_partition;
///
/// let graph = accord_graph::build([
///     "4 6", "A ++ B", "C ++ D", "A -- C", "A -- D", "B -- C", "B -- D",
/// ])
/// .unwrap();
/// assert!(is_balanced_by_partition(&graph).unwrap());
/// ```
pub fn is_balanced_by_partition(graph: &SignedGraph) -> Result<bool, BalanceError> {
    Ok(check_partition(graph)?.is_ok())
}

fn witness(graph: &SignedGraph, pivot: &str, u: &str, v: &str) -> Result<Triangle, BalanceError> {
    let triangle = Triangle::new(
        pivot,
        u,
        v,
        edge_sign(graph, pivot, u)?,
        edge_sign(graph, pivot, v)?,
        edge_sign(graph, u, v)?,
    );
    debug!(triangle = ?triangle.nodes, "Inconsistent pair in pivot split");
    Ok(triangle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use accord_graph::build;

    #[test]
    fn test_factions_split_on_pivot() {
        let graph = build(["4 6", "A ++ B", "C ++ D", "A -- C", "A -- D", "B -- C", "B -- D"])
            .unwrap();
        let factions = factions(&graph).unwrap();
        assert_eq!(factions.pivot(), Some("A"));
        assert_eq!(factions.allies, vec!["A", "B"]);
        assert_eq!(factions.rivals, vec!["C", "D"]);
        assert_eq!(factions.len(), 4);
    }

    #[test]
    fn test_factions_of_empty_graph() {
        let factions = factions(&SignedGraph::new()).unwrap();
        assert!(factions.is_empty());
        assert_eq!(factions.pivot(), None);
    }

    #[test]
    fn test_hostile_pair_among_allies() {
        let graph = build(["3 3", "A ++ B", "B -- C", "A ++ C"]).unwrap();
        let triangle = check_partition(&graph).unwrap().unwrap_err();
        assert_eq!(triangle.nodes, ["A", "B", "C"].map(String::from));
        assert!(!triangle.is_balanced());
    }

    #[test]
    fn test_hostile_pair_among_rivals() {
        let graph = build(["3 3", "A -- B", "B -- C", "A -- C"]).unwrap();
        let triangle = check_partition(&graph).unwrap().unwrap_err();
        assert_eq!(triangle.hostile_count(), 3);
    }

    #[test]
    fn test_friendly_pair_across_factions() {
        // passes both within-faction checks; only the cross check catches it
        let graph = build(["3 3", "P ++ X", "P -- Y", "X ++ Y"]).unwrap();
        let triangle = check_partition(&graph).unwrap().unwrap_err();
        assert_eq!(triangle.nodes, ["P", "X", "Y"].map(String::from));
        assert_eq!(triangle.hostile_count(), 1);
        assert!(!is_balanced_by_partition(&graph).unwrap());
    }

    #[test]
    fn test_single_and_pair_are_balanced() {
        let mut single = SignedGraph::new();
        single.add_node("A");
        assert!(is_balanced_by_partition(&single).unwrap());
        assert!(is_balanced_by_partition(&SignedGraph::new()).unwrap());

        let pair = build(["2 1", "A -- B"]).unwrap();
        assert!(is_balanced_by_partition(&pair).unwrap());
    }

    #[test]
    fn test_missing_pivot_edge() {
        let mut graph = SignedGraph::new();
        graph.add_node("A");
        graph.add_node("B");
        assert!(matches!(
            is_balanced_by_partition(&graph),
            Err(BalanceError::MissingEdge { .. })
        ));
    }
}
