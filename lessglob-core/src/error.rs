use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while expanding glob imports.
///
/// Pattern errors are configuration problems and abort the whole file;
/// filesystem access failures are propagated as-is. "Not found" is never an
/// error here, it is just an empty match set.
#[derive(Debug, Error)]
pub enum ExpandError {
    /// An ignore pattern from configuration failed to compile.
    #[error("invalid ignore pattern '{pattern}': {source}")]
    InvalidIgnorePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// A directive's wildcard was rejected by the glob engine.
    #[error("invalid import pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// The filesystem refused access while resolving a pattern.
    #[error("cannot read {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExpandError>;
