use std::path::PathBuf;

use crate::error::{ExpandError, Result};

/// Files produced by resolving one pattern against one search base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSet {
    /// Base directory that produced the matches.
    pub base: PathBuf,
    /// Matched paths in the glob engine's lexical order.
    pub files: Vec<PathBuf>,
}

/// Resolves `pattern` against `bases` in priority order.
///
/// The first base with at least one filesystem match wins and iteration
/// stops there; bases are never unioned. A missing or empty directory
/// simply yields no matches and resolution advances to the next base.
/// `None` means every base came up empty.
pub fn resolve(pattern: &str, bases: &[PathBuf]) -> Result<Option<MatchSet>> {
    for base in bases {
        let full_pattern = base.join(pattern);
        log::debug!(
            "Resolving '{}' against {}",
            pattern,
            base.display()
        );

        let entries = glob::glob(&full_pattern.to_string_lossy()).map_err(|e| {
            ExpandError::InvalidPattern {
                pattern: pattern.to_string(),
                source: e,
            }
        })?;

        let mut files = Vec::new();
        for entry in entries {
            match entry {
                Ok(path) => files.push(path),
                // Unreadable entries are access failures, not empty results
                Err(e) => {
                    return Err(ExpandError::Walk {
                        path: e.path().to_path_buf(),
                        source: e.into_error(),
                    });
                }
            }
        }

        if !files.is_empty() {
            log::debug!(
                "Base {} matched {} file(s) for '{}'",
                base.display(),
                files.len(),
                pattern
            );
            return Ok(Some(MatchSet {
                base: base.clone(),
                files,
            }));
        }
    }

    Ok(None)
}
