use globset::{GlobBuilder, GlobMatcher};

use crate::error::{ExpandError, Result};

/// Compiled ignore patterns, matched against base-relative paths.
///
/// Built once per invocation from configuration; a malformed pattern fails
/// the whole invocation before any text is touched.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    matchers: Vec<GlobMatcher>,
}

impl IgnoreSet {
    /// Compiles the configured patterns.
    ///
    /// `literal_separator` keeps `*` from crossing `/`, eg `*.less` will not
    /// match `some/dir/test.less`; use `**` for that.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut matchers = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|e| ExpandError::InvalidIgnorePattern {
                    pattern: pattern.clone(),
                    source: e,
                })?;
            matchers.push(glob.compile_matcher());
        }
        Ok(Self { matchers })
    }

    /// Whether the base-relative target matches any ignore pattern.
    pub fn is_ignored(&self, relative: &str) -> bool {
        self.matchers.iter().any(|m| m.is_match(relative))
    }
}
