//! Graph error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a signed graph
#[derive(Error, Debug)]
pub enum GraphError {
    /// Input source could not be located
    #[error("Input not found: {}", .path.display())]
    ResourceNotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// Input source exists but could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed header or data line
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based input line number
        line: usize,
        /// What was wrong with the line
        message: String,
    },

    /// Attempt to relate a node to itself
    #[error("Self-loop on node '{node}' is not allowed")]
    SelfLoop {
        /// The offending node
        node: String,
    },
}

impl GraphError {
    /// Create a parse error for the given line
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        GraphError::Parse {
            line,
            message: message.into(),
        }
    }
}
