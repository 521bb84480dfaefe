//! Compare command implementation.

use crate::cli::InputArgs;
use crate::commands::load_graph;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use accord_balance::{BalanceChecker, Strategy};
use tracing::warn;

/// Execute the compare command.
pub fn execute_compare(args: InputArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", run_compare(&args, config, formatter)?);
    Ok(())
}

/// Run every strategy on the same graph and render the results.
pub fn run_compare(args: &InputArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let graph = load_graph(args, config)?;

    let mut results = Vec::with_capacity(Strategy::ALL.len());
    for strategy in Strategy::ALL {
        results.push((strategy, BalanceChecker::new(strategy).is_balanced(&graph)?));
    }

    if results.windows(2).any(|w| w[0].1 != w[1].1) {
        warn!(?results, "Strategies disagree");
    }

    formatter.format_comparison(&results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::io::Write;

    #[test]
    fn test_compare_agrees() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "4 6\nA ++ B\nC ++ D\nA -- C\nA -- D\nB -- C\nB -- D\n").unwrap();

        let args = InputArgs {
            input: file.path().to_string_lossy().into_owned(),
            policy: None,
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = run_compare(&args, &Config::default(), &formatter).unwrap();
        assert_eq!(output, "true");
    }
}
