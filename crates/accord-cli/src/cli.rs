//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};

/// Accord - decide whether a signed social graph is structurally balanced.
#[derive(Debug, Parser)]
#[command(name = "accord")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "ACCORD_CONFIG")]
    pub config: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Balanced / Not Balanced (default)
    Text,
    /// Verdict plus factions or witness table
    Table,
    /// JSON format
    Json,
    /// true / false
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decide whether the graph is balanced
    Check(CheckArgs),

    /// Print the parsed graph
    Show(InputArgs),

    /// Run every strategy and report whether they agree
    Compare(InputArgs),
}

/// Where the edge list comes from and how to read it.
#[derive(Debug, Clone, Parser)]
pub struct InputArgs {
    /// Edge list file, or '-' for stdin
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: String,

    /// How header counts are enforced
    #[arg(short, long, value_enum)]
    pub policy: Option<PolicyArg>,
}

/// Default edge list location.
pub const DEFAULT_INPUT: &str = "input.txt";

impl Default for InputArgs {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.to_string(),
            policy: None,
        }
    }
}

/// Arguments for the check command.
#[derive(Debug, Clone, Default, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Balance algorithm
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,
}

/// Strategy argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyArg {
    /// Inspect every triangle, O(n^3)
    BruteForce,
    /// Split around a pivot, O(n^2)
    Partition,
}

/// Header policy argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PolicyArg {
    /// Counts are hints, all lines are read
    Advisory,
    /// Read at most the declared number of edges
    Bounded,
    /// Counts must match the input
    Strict,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<StrategyArg> for accord_balance::Strategy {
    fn from(strategy: StrategyArg) -> Self {
        match strategy {
            StrategyArg::BruteForce => accord_balance::Strategy::BruteForce,
            StrategyArg::Partition => accord_balance::Strategy::Partition,
        }
    }
}

impl From<PolicyArg> for accord_graph::HeaderPolicy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::Advisory => accord_graph::HeaderPolicy::Advisory,
            PolicyArg::Bounded => accord_graph::HeaderPolicy::Bounded,
            PolicyArg::Strict => accord_graph::HeaderPolicy::Strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["accord"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_check_command() {
        let cli = Cli::parse_from([
            "accord",
            "check",
            "westeros.txt",
            "--strategy",
            "brute-force",
            "--policy",
            "strict",
        ]);
        match cli.command {
            Some(Command::Check(args)) => {
                assert_eq!(args.input.input, "westeros.txt");
                assert_eq!(args.strategy, Some(StrategyArg::BruteForce));
                assert_eq!(args.input.policy, Some(PolicyArg::Strict));
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_default_input() {
        let cli = Cli::parse_from(["accord", "show"]);
        match cli.command {
            Some(Command::Show(args)) => assert_eq!(args.input, "input.txt"),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["accord", "compare", "-", "--format", "json", "-vv", "--no-color"]);
        assert_eq!(cli.format, Some(CliFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
        assert!(matches!(cli.command, Some(Command::Compare(ref args)) if args.input == "-"));
    }

    #[test]
    fn test_strategy_conversion() {
        let strategy: accord_balance::Strategy = StrategyArg::Partition.into();
        assert_eq!(strategy, accord_balance::Strategy::Partition);
    }
}
