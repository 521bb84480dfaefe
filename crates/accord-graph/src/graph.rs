//! Signed graph module
//!
//! An undirected graph whose edges carry a [`Sign`]. Nodes are kept in
//! first-seen order, and every listing this type produces follows that
//! order.

use crate::{GraphError, Sign};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Undirected signed graph without self-loops or multi-edges
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignedGraph {
    nodes: Vec<String>,
    index: HashMap<String, usize>,
    /// Keyed by (lower index, higher index)
    edges: BTreeMap<(usize, usize), Sign>,
}

impl SignedGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node
    ///
    /// Returns `true` if the node was not present before. Adding a node
    /// that already exists is a no-op.
    pub fn add_node(&mut self, node: &str) -> bool {
        let before = self.nodes.len();
        self.intern(node);
        self.nodes.len() > before
    }

    /// Set the sign between two distinct nodes
    ///
    /// Both endpoints are registered if needed. Any previous sign for the
    /// pair is overwritten and returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use accord_graph::{Sign, SignedGraph};
    ///
    /// let mut graph = SignedGraph::new();
    /// assert_eq!(graph.put_edge("Ned", "Cersei", Sign::Hostile).unwrap(), None);
    /// assert_eq!(
    ///     graph.put_edge("Cersei", "Ned", Sign::Friendly).unwrap(),
    ///     Some(Sign::Hostile)
    /// );
    /// assert!(graph.put_edge("Ned", "Ned", Sign::Friendly).is_err());
    /// ```
    pub fn put_edge(&mut self, a: &str, b: &str, sign: Sign) -> Result<Option<Sign>, GraphError> {
        if a == b {
            return Err(GraphError::SelfLoop { node: a.to_string() });
        }

        let i = self.intern(a);
        let j = self.intern(b);
        Ok(self.edges.insert(pair_key(i, j), sign))
    }

    /// Look up the sign between two nodes
    ///
    /// Symmetric in its arguments. Returns `None` when either node is
    /// unknown or the pair has no recorded sign.
    pub fn sign(&self, a: &str, b: &str) -> Option<Sign> {
        let i = *self.index.get(a)?;
        let j = *self.index.get(b)?;
        self.edges.get(&pair_key(i, j)).copied()
    }

    /// Whether the node is part of the graph
    pub fn contains_node(&self, node: &str) -> bool {
        self.index.contains_key(node)
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of signed pairs
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in first-seen order
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(String::as_str)
    }

    /// Every signed pair once, ordered by node position
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, Sign)> + '_ {
        self.edges
            .iter()
            .map(|(&(i, j), &sign)| (self.nodes[i].as_str(), self.nodes[j].as_str(), sign))
    }

    /// Pairs of distinct nodes that have no recorded sign, in node order
    pub fn missing_pairs(&self) -> Vec<(&str, &str)> {
        let n = self.nodes.len();
        let mut missing = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if !self.edges.contains_key(&(i, j)) {
                    missing.push((self.nodes[i].as_str(), self.nodes[j].as_str()));
                }
            }
        }
        missing
    }

    /// Whether every pair of distinct nodes carries a sign
    pub fn is_complete(&self) -> bool {
        let n = self.nodes.len();
        self.edges.len() == n * n.saturating_sub(1) / 2
    }

    fn intern(&mut self, node: &str) -> usize {
        if let Some(&i) = self.index.get(node) {
            return i;
        }
        let i = self.nodes.len();
        self.nodes.push(node.to_string());
        self.index.insert(node.to_string(), i);
        i
    }
}

fn pair_key(i: usize, j: usize) -> (usize, usize) {
    if i < j {
        (i, j)
    } else {
        (j, i)
    }
}

impl fmt::Display for SignedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "nodes: [{}], edges: {{", self.nodes.join(", "))?;
        for (n, (a, b, sign)) in self.edges().enumerate() {
            if n > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {} {}", a, sign, b)?;
        }
        f.write_str("}")
    }
}
