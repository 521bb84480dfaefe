//! Command implementations.

pub mod check;
pub mod compare;
pub mod show;

pub use self::check::execute_check;
pub use self::compare::execute_compare;
pub use self::show::execute_show;

use crate::cli::InputArgs;
use crate::config::Config;
use crate::error::Result;
use accord_graph::{build_from_path, build_from_reader, BuildOptions, HeaderPolicy, SignedGraph};
use tracing::info;

/// Build the graph named by the input arguments.
///
/// `-` reads from stdin; anything else is a file path. The header policy
/// comes from the arguments, falling back to the configuration.
pub fn load_graph(args: &InputArgs, config: &Config) -> Result<SignedGraph> {
    let policy: HeaderPolicy = args
        .policy
        .map(Into::into)
        .unwrap_or_else(|| config.header_policy.into());
    let options = BuildOptions::with_policy(policy);

    let graph = if args.input == "-" {
        build_from_reader(std::io::stdin().lock(), options)?
    } else {
        build_from_path(&args.input, options)?
    };

    info!(
        input = %args.input,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Loaded graph"
    );
    Ok(graph)
}
