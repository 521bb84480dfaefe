//! Brute-force balance check over every triangle
//!
//! A triangle is balanced when the product of its three signs is positive,
//! i.e. it holds zero or two hostile edges. A complete signed graph is
//! balanced when all of its triangles are.

use crate::completeness::{edge_sign, require_complete};
use crate::BalanceError;
use accord_graph::{Sign, SignedGraph};
use tracing::{debug, trace};

/// Three distinct nodes and the signs between them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triangle {
    /// The three corners, `[a, b, c]`
    pub nodes: [String; 3],

    /// Signs of `a-b`, `a-c` and `b-c`, in that order
    pub signs: [Sign; 3],
}

impl Triangle {
    /// Create a triangle from its corners and edge signs
    pub fn new(a: &str, b: &str, c: &str, ab: Sign, ac: Sign, bc: Sign) -> Self {
        Self {
            nodes: [a.to_string(), b.to_string(), c.to_string()],
            signs: [ab, ac, bc],
        }
    }

    /// Number of hostile edges (0 to 3)
    pub fn hostile_count(&self) -> usize {
        self.signs.iter().filter(|s| s.is_hostile()).count()
    }

    /// Whether the triangle is balanced
    pub fn is_balanced(&self) -> bool {
        is_balanced_triad(self.signs[0], self.signs[1], self.signs[2])
    }
}

/// Balance of a single triad of signs
///
/// | AB | AC | BC | balanced |
/// |----|----|----|----------|
/// | +  | +  | +  | yes      |
/// | +  | +  | -  | no       |
/// | +  | -  | +  | no       |
/// | -  | +  | +  | no       |
/// | +  | -  | -  | yes      |
/// | -  | +  | -  | yes      |
/// | -  | -  | +  | yes      |
/// | -  | -  | -  | no       |
pub fn is_balanced_triad(ab: Sign, ac: Sign, bc: Sign) -> bool {
    ab.value() * ac.value() * bc.value() > 0
}

/// Scan node triples in graph order and return the first unbalanced one
///
/// Fails with `MissingEdge` if a looked-up pair has no sign.
pub fn find_unbalanced_triangle(graph: &SignedGraph) -> Result<Option<Triangle>, BalanceError> {
    let nodes: Vec<&str> = graph.nodes().collect();
    let n = nodes.len();

    for i in 0..n {
        for j in (i + 1)..n {
            let ab = edge_sign(graph, nodes[i], nodes[j])?;
            for k in (j + 1)..n {
                let ac = edge_sign(graph, nodes[i], nodes[k])?;
                let bc = edge_sign(graph, nodes[j], nodes[k])?;
                trace!(a = nodes[i], b = nodes[j], c = nodes[k], "Inspecting triangle");

                if !is_balanced_triad(ab, ac, bc) {
                    let triangle = Triangle::new(nodes[i], nodes[j], nodes[k], ab, ac, bc);
                    debug!(triangle = ?triangle.nodes, "Found unbalanced triangle");
                    return Ok(Some(triangle));
                }
            }
        }
    }

    Ok(None)
}

/// O(n³) balance check over every node triple
///
/// Graphs with fewer than three nodes are vacuously balanced once they are
/// complete.
///
/// # Examples
///
/// ```
/// use accord_balance::is_balanced_brute_force;
///
/// let graph = accord_graph::build(["3 3", "A ++ B", "B ++ C", "A -- C"]).unwrap();
/// assert!(!is_balanced_brute_force(&graph).unwrap());
/// ```
pub fn is_balanced_brute_force(graph: &SignedGraph) -> Result<bool, BalanceError> {
    require_complete(graph)?;
    Ok(find_unbalanced_triangle(graph)?.is_none())
}
