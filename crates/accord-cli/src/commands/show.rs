//! Show command implementation.

use crate::cli::InputArgs;
use crate::commands::load_graph;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the show command.
pub fn execute_show(args: InputArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let graph = load_graph(&args, config)?;
    println!("{}", formatter.format_graph(&graph)?);
    Ok(())
}
