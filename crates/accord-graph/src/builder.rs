//! Graph construction from a line-oriented edge list
//!
//! The first line holds the declared node and edge counts. Every following
//! line is one edge: `NODE_A ++ NODE_B` (friendly) or
//! `NODE_A -- NODE_B` (hostile).

use crate::{GraphError, Sign, SignedGraph};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

const FRIENDLY_SEPARATOR: &str = " ++ ";
const HOSTILE_SEPARATOR: &str = " -- ";

/// How the declared header counts constrain the data lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderPolicy {
    /// Counts are hints; every data line is consumed
    #[default]
    Advisory,

    /// At most the declared edge count of data lines is consumed
    Bounded,

    /// Parsed counts must match the header exactly
    Strict,
}

/// Options for building a graph
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Header count enforcement
    pub header_policy: HeaderPolicy,
}

impl BuildOptions {
    /// Options with the given header policy
    pub fn with_policy(header_policy: HeaderPolicy) -> Self {
        Self { header_policy }
    }
}

/// Declared counts from the first input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Declared number of nodes
    pub node_count: usize,

    /// Declared number of edges
    pub edge_count: usize,
}

impl FromStr for Header {
    type Err = GraphError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(GraphError::parse(
                1,
                format!("expected '<nodes> <edges>' header, found '{}'", line),
            ));
        }

        let count = |token: &str, what: &str| {
            token.parse::<usize>().map_err(|e| {
                GraphError::parse(1, format!("invalid {} count '{}': {}", what, token, e))
            })
        };

        Ok(Header {
            node_count: count(parts[0], "node")?,
            edge_count: count(parts[1], "edge")?,
        })
    }
}

/// Incremental graph builder fed one line at a time
///
/// The first line pushed is the header. The graph is only handed out by
/// [`GraphBuilder::finish`], once all input has been seen.
#[derive(Debug)]
pub struct GraphBuilder {
    options: BuildOptions,
    header: Option<Header>,
    graph: SignedGraph,
    line_no: usize,
    edge_lines: usize,
    ignored_lines: usize,
}

impl GraphBuilder {
    /// Create a builder with the given options
    pub fn new(options: BuildOptions) -> Self {
        Self {
            options,
            header: None,
            graph: SignedGraph::new(),
            line_no: 0,
            edge_lines: 0,
            ignored_lines: 0,
        }
    }

    /// Consume the next input line
    pub fn push_line(&mut self, line: &str) -> Result<(), GraphError> {
        self.line_no += 1;
        let line = line.strip_suffix('\r').unwrap_or(line);

        let Some(header) = self.header else {
            let header: Header = line.parse()?;
            debug!(
                nodes = header.node_count,
                edges = header.edge_count,
                "Parsed header"
            );
            self.header = Some(header);
            return Ok(());
        };

        if self.options.header_policy == HeaderPolicy::Bounded
            && self.edge_lines >= header.edge_count
        {
            self.ignored_lines += 1;
            return Ok(());
        }

        if line.trim().is_empty() {
            return Err(GraphError::parse(self.line_no, "blank line where an edge was expected"));
        }

        let (a, b, sign) = parse_edge(line, self.line_no)?;
        let previous = self
            .graph
            .put_edge(a, b, sign)
            .map_err(|e| GraphError::parse(self.line_no, e.to_string()))?;

        match previous {
            Some(old) if old != sign => {
                debug!(line = self.line_no, a, b, %old, new = %sign, "Overwrote edge sign")
            }
            _ => debug!(line = self.line_no, a, b, %sign, "Added edge"),
        }

        self.edge_lines += 1;
        Ok(())
    }

    /// Finish building and hand out the graph
    pub fn finish(self) -> Result<SignedGraph, GraphError> {
        let header = self
            .header
            .ok_or_else(|| GraphError::parse(1, "missing '<nodes> <edges>' header"))?;

        let nodes = self.graph.node_count();
        let mismatch = nodes != header.node_count || self.edge_lines != header.edge_count;

        match self.options.header_policy {
            HeaderPolicy::Strict if mismatch => {
                return Err(GraphError::parse(
                    1,
                    format!(
                        "header declares {} nodes and {} edges, input has {} nodes and {} edges",
                        header.node_count, header.edge_count, nodes, self.edge_lines
                    ),
                ));
            }
            HeaderPolicy::Advisory if mismatch => {
                warn!(
                    declared_nodes = header.node_count,
                    declared_edges = header.edge_count,
                    nodes,
                    edges = self.edge_lines,
                    "Header counts do not match input"
                );
            }
            HeaderPolicy::Bounded if self.ignored_lines > 0 => {
                debug!(
                    ignored = self.ignored_lines,
                    "Ignored edge lines beyond the declared count"
                );
            }
            _ => {}
        }

        debug!(
            nodes,
            edges = self.graph.edge_count(),
            graph = %self.graph,
            "Built graph"
        );
        Ok(self.graph)
    }
}

/// Split a data line into its endpoints and sign
fn parse_edge(line: &str, line_no: usize) -> Result<(&str, &str, Sign), GraphError> {
    let (a, b, sign) = match line.split_once(FRIENDLY_SEPARATOR) {
        Some((a, b)) if !a.is_empty() && !b.is_empty() => (a, b, Sign::Friendly),
        _ => match line.split_once(HOSTILE_SEPARATOR) {
            Some((a, b)) if !a.is_empty() && !b.is_empty() => (a, b, Sign::Hostile),
            _ => {
                return Err(GraphError::parse(
                    line_no,
                    format!("expected 'A ++ B' or 'A -- B', found '{}'", line),
                ))
            }
        },
    };

    let has_separator = |part: &str| {
        part.contains(FRIENDLY_SEPARATOR) || part.contains(HOSTILE_SEPARATOR)
    };
    if has_separator(a) || has_separator(b) {
        return Err(GraphError::parse(
            line_no,
            format!("more than one separator in '{}'", line),
        ));
    }

    Ok((a, b, sign))
}

/// Build a graph from a sequence of lines using default options
///
/// # Examples
///
/// ```
/// use accord_graph::build;
///
/// let graph = build(["3 3", "A ++ B", "B ++ C", "A -- C"]).unwrap();
/// assert_eq!(graph.node_count(), 3);
/// assert!(graph.is_complete());
/// ```
pub fn build<I, S>(lines: I) -> Result<SignedGraph, GraphError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    build_with(lines, BuildOptions::default())
}

/// Build a graph from a sequence of lines
pub fn build_with<I, S>(lines: I, options: BuildOptions) -> Result<SignedGraph, GraphError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = GraphBuilder::new(options);
    for line in lines {
        builder.push_line(line.as_ref())?;
    }
    builder.finish()
}

/// Build a graph from a buffered reader
///
/// All lines are read before any of them is parsed.
pub fn build_from_reader<R: BufRead>(reader: R, options: BuildOptions) -> Result<SignedGraph, GraphError> {
    let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;
    build_with(lines, options)
}

/// Build a graph from a file
pub fn build_from_path<P: AsRef<Path>>(path: P, options: BuildOptions) -> Result<SignedGraph, GraphError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => GraphError::ResourceNotFound {
            path: path.to_path_buf(),
        },
        _ => GraphError::Io(e),
    })?;
    build_from_reader(BufReader::new(file), options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        let header: Header = "3 5".parse().unwrap();
        assert_eq!(header, Header { node_count: 3, edge_count: 5 });

        let header: Header = "  4\t6 ".parse().unwrap();
        assert_eq!(header.node_count, 4);
        assert_eq!(header.edge_count, 6);
    }

    #[test]
    fn test_parse_header_invalid() {
        assert!("".parse::<Header>().is_err());
        assert!("3".parse::<Header>().is_err());
        assert!("3 3 3".parse::<Header>().is_err());
        assert!("three 3".parse::<Header>().is_err());
        assert!("-1 3".parse::<Header>().is_err());
    }

    #[test]
    fn test_parse_edge_friendly() {
        let (a, b, sign) = parse_edge("Cersei ++ Jaime", 2).unwrap();
        assert_eq!((a, b, sign), ("Cersei", "Jaime", Sign::Friendly));
    }

    #[test]
    fn test_parse_edge_hostile() {
        let (a, b, sign) = parse_edge("Ned -- Cersei", 2).unwrap();
        assert_eq!((a, b, sign), ("Ned", "Cersei", Sign::Hostile));
    }

    #[test]
    fn test_parse_edge_multi_word_names() {
        let (a, b, _) = parse_edge("Jon Snow -- Ramsay Bolton", 2).unwrap();
        assert_eq!(a, "Jon Snow");
        assert_eq!(b, "Ramsay Bolton");
    }

    #[test]
    fn test_parse_edge_hyphenated_name() {
        let (a, b, sign) = parse_edge("Jean-Luc ++ Beverly", 2).unwrap();
        assert_eq!((a, b, sign), ("Jean-Luc", "Beverly", Sign::Friendly));
    }

    #[test]
    fn test_parse_edge_malformed() {
        for line in ["Ned Cersei", "Ned ++Cersei", "Ned+++Cersei", "++ Cersei", "Ned -- "] {
            let err = parse_edge(line, 7).unwrap_err();
            assert!(matches!(err, GraphError::Parse { line: 7, .. }), "{}", line);
        }
    }

    #[test]
    fn test_parse_edge_two_separators() {
        assert!(parse_edge("A ++ B -- C", 2).is_err());
        assert!(parse_edge("A ++ B ++ C", 2).is_err());
        assert!(parse_edge("A -- B -- C", 2).is_err());

        let err = parse_edge("A -- B ++ C", 4).unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 4, .. }));
    }

    #[test]
    fn test_build_rejects_hostile_then_friendly_separator() {
        let err = build(["2 1", "A -- B ++ C"]).unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_build_basic() {
        let graph = build(["2 1", "Cersei ++ Jaime"]).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.sign("Cersei", "Jaime"), Some(Sign::Friendly));
    }

    #[test]
    fn test_build_strips_carriage_returns() {
        let graph = build(["2 1\r", "A -- B\r"]).unwrap();
        assert_eq!(graph.sign("A", "B"), Some(Sign::Hostile));
        assert!(!graph.contains_node("B\r"));
    }

    #[test]
    fn test_build_rejects_blank_data_lines() {
        let err = build(["3 3", "A ++ B", "   ", "B ++ C", "A ++ C"]).unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 3, .. }));

        let err = build(["2 1", "", "A ++ B"]).unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));

        let err = build(["2 1", "A ++ B", "\r"]).unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_build_missing_header() {
        let lines: Vec<&str> = Vec::new();
        assert!(matches!(build(lines), Err(GraphError::Parse { line: 1, .. })));
    }

    #[test]
    fn test_build_reports_line_number() {
        let err = build(["3 3", "A ++ B", "B C", "A -- C"]).unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_build_rejects_self_loop() {
        let err = build(["1 1", "Hodor ++ Hodor"]).unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_duplicate_last_wins() {
        let graph = build(["2 2", "A ++ B", "B -- A"]).unwrap();
        assert_eq!(graph.sign("A", "B"), Some(Sign::Hostile));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_advisory_consumes_all_lines() {
        let graph = build(["2 1", "A ++ B", "B ++ C", "A ++ C"]).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_bounded_stops_at_declared_edges() {
        let options = BuildOptions::with_policy(HeaderPolicy::Bounded);
        let graph = build_with(["3 2", "A ++ B", "B ++ C", "A ++ C"], options).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.sign("A", "C"), None);
    }

    #[test]
    fn test_bounded_skips_malformed_lines_beyond_count() {
        let options = BuildOptions::with_policy(HeaderPolicy::Bounded);
        let graph = build_with(["2 1", "A ++ B", "garbage"], options).unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_strict_accepts_matching_counts() {
        let options = BuildOptions::with_policy(HeaderPolicy::Strict);
        let graph = build_with(["3 3", "A ++ B", "B ++ C", "A -- C"], options).unwrap();
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_strict_rejects_mismatch() {
        let options = BuildOptions::with_policy(HeaderPolicy::Strict);
        assert!(build_with(["3 2", "A ++ B", "B ++ C", "A -- C"], options).is_err());
        assert!(build_with(["4 3", "A ++ B", "B ++ C", "A -- C"], options).is_err());
    }

    #[test]
    fn test_build_from_reader() {
        let input = "3 3\nA -- B\nB -- C\nA -- C\n";
        let graph = build_from_reader(input.as_bytes(), BuildOptions::default()).unwrap();
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.sign("C", "A"), Some(Sign::Hostile));
    }

    #[test]
    fn test_build_from_missing_path() {
        let err = build_from_path("/definitely/not/here/input.txt", BuildOptions::default())
            .unwrap_err();
        assert!(matches!(err, GraphError::ResourceNotFound { .. }));
    }
}
