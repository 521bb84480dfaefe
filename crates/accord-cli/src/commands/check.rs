//! Check command implementation.

use crate::cli::CheckArgs;
use crate::commands::load_graph;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use accord_balance::{BalanceChecker, Strategy};

/// Execute the check command.
pub fn execute_check(args: CheckArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", run_check(&args, config, formatter)?);
    Ok(())
}

/// Build the graph, decide balance and render the verdict.
pub fn run_check(args: &CheckArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let strategy: Strategy = args
        .strategy
        .map(Into::into)
        .unwrap_or_else(|| config.strategy.into());

    let graph = load_graph(&args.input, config)?;
    let verdict = BalanceChecker::new(strategy).check(&graph)?;

    formatter.format_verdict(&verdict, strategy)
}
