use std::io;

use thiserror::Error;

/// Errors raised at the boundaries of the sources tree: node construction
/// and settings loading. Rendering and menu building never fail.
#[derive(Debug, Error)]
pub enum SourcesTreeError {
    #[error("invalid tree node: `{field}` {reason}")]
    InvalidNode {
        field: &'static str,
        reason: &'static str,
    },

    #[error("settings parse error: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SourcesTreeError>;
