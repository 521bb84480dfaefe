//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use accord_balance::{Factions, Strategy, Triangle, Verdict};
use accord_graph::SignedGraph;
use colored::*;
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the outcome of a balance check.
    pub fn format_verdict(&self, verdict: &Verdict, strategy: Strategy) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(self.verdict_line(verdict.is_balanced())),
            OutputFormat::Quiet => Ok(verdict.is_balanced().to_string()),
            OutputFormat::Json => self.format_verdict_json(verdict, strategy),
            OutputFormat::Table => {
                let table = match verdict {
                    Verdict::Balanced(factions) => factions_table(factions),
                    Verdict::Unbalanced(triangle) => triangle_table(triangle),
                };
                Ok(format!("{}\n{}", self.verdict_line(verdict.is_balanced()), table))
            }
        }
    }

    fn format_verdict_json(&self, verdict: &Verdict, strategy: Strategy) -> Result<String> {
        let value = match verdict {
            Verdict::Balanced(factions) => json!({
                "balanced": true,
                "strategy": strategy.name(),
                "factions": {
                    "pivot": factions.pivot(),
                    "allies": factions.allies,
                    "rivals": factions.rivals,
                },
            }),
            Verdict::Unbalanced(triangle) => json!({
                "balanced": false,
                "strategy": strategy.name(),
                "witness": {
                    "nodes": triangle.nodes,
                    "hostile_edges": triangle.hostile_count(),
                    "edges": triangle_edges(triangle)
                        .iter()
                        .map(|(a, sign, b)| json!({ "a": a, "b": b, "sign": sign }))
                        .collect::<Vec<_>>(),
                },
            }),
        };
        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Format a parsed graph.
    pub fn format_graph(&self, graph: &SignedGraph) -> Result<String> {
        let missing = graph.missing_pairs();

        match self.format {
            OutputFormat::Quiet => Ok(graph.nodes().collect::<Vec<_>>().join("\n")),
            OutputFormat::Json => {
                let value = json!({
                    "nodes": graph.nodes().collect::<Vec<_>>(),
                    "edges": graph
                        .edges()
                        .map(|(a, b, sign)| json!({ "a": a, "b": b, "sign": sign.token() }))
                        .collect::<Vec<_>>(),
                    "complete": missing.is_empty(),
                    "missing": missing,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Text | OutputFormat::Table => {
                let mut out = if self.format == OutputFormat::Table {
                    edges_table(graph)
                } else {
                    graph.to_string()
                };
                out.push('\n');
                out.push_str(&self.info(&format!(
                    "{} node(s), {} edge(s)",
                    graph.node_count(),
                    graph.edge_count()
                )));
                if !missing.is_empty() {
                    let pairs: Vec<String> =
                        missing.iter().map(|(a, b)| format!("{} / {}", a, b)).collect();
                    out.push('\n');
                    out.push_str(&self.warning(&format!("Missing edges: {}", pairs.join(", "))));
                }
                Ok(out)
            }
        }
    }

    /// Format the results of running several strategies on one graph.
    pub fn format_comparison(&self, results: &[(Strategy, bool)]) -> Result<String> {
        let agree = results.windows(2).all(|w| w[0].1 == w[1].1);

        match self.format {
            OutputFormat::Quiet => Ok(agree.to_string()),
            OutputFormat::Json => {
                let value = json!({
                    "results": results
                        .iter()
                        .map(|(strategy, balanced)| json!({
                            "strategy": strategy.name(),
                            "balanced": balanced,
                        }))
                        .collect::<Vec<_>>(),
                    "agree": agree,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Text | OutputFormat::Table => {
                let mut out = if self.format == OutputFormat::Table {
                    let mut builder = Builder::default();
                    builder.push_record(["Strategy", "Result"]);
                    for (strategy, balanced) in results {
                        builder.push_record([strategy.name(), verdict_text(*balanced)]);
                    }
                    styled(builder)
                } else {
                    results
                        .iter()
                        .map(|(strategy, balanced)| format!("{}: {}", strategy, verdict_text(*balanced)))
                        .collect::<Vec<_>>()
                        .join("\n")
                };
                out.push('\n');
                if agree {
                    out.push_str(&self.success("Strategies agree"));
                } else {
                    out.push_str(&self.error("Strategies disagree"));
                }
                Ok(out)
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn verdict_line(&self, balanced: bool) -> String {
        let color = if balanced { "green" } else { "red" };
        self.colorize(verdict_text(balanced), color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Human-readable verdict.
pub fn verdict_text(balanced: bool) -> &'static str {
    if balanced {
        "Balanced"
    } else {
        "Not Balanced"
    }
}

fn triangle_edges(triangle: &Triangle) -> [(&str, &str, &str); 3] {
    let [a, b, c] = &triangle.nodes;
    let [ab, ac, bc] = triangle.signs;
    [
        (a.as_str(), ab.token(), b.as_str()),
        (a.as_str(), ac.token(), c.as_str()),
        (b.as_str(), bc.token(), c.as_str()),
    ]
}

fn factions_table(factions: &Factions) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Faction", "Size", "Members"]);
    builder.push_record([
        "Allies".to_string(),
        factions.allies.len().to_string(),
        factions.allies.join(", "),
    ]);
    builder.push_record([
        "Rivals".to_string(),
        factions.rivals.len().to_string(),
        factions.rivals.join(", "),
    ]);
    styled(builder)
}

fn triangle_table(triangle: &Triangle) -> String {
    let mut builder = Builder::default();
    builder.push_record(["A", "Sign", "B"]);
    for (a, sign, b) in triangle_edges(triangle) {
        builder.push_record([a, sign, b]);
    }
    styled(builder)
}

fn edges_table(graph: &SignedGraph) -> String {
    let mut builder = Builder::default();
    builder.push_record(["A", "Sign", "B"]);
    for (a, b, sign) in graph.edges() {
        builder.push_record([a, sign.token(), b]);
    }
    styled(builder)
}

fn styled(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}
