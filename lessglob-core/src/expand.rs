use std::path::{Path, PathBuf};

use crate::directive::find_directive;
use crate::emit::render;
use crate::error::Result;
use crate::filter::surviving_targets;
use crate::ignore::IgnoreSet;
use crate::options::{search_bases, Options};
use crate::resolve::resolve;

/// A stylesheet flowing through the host pipeline: identity plus mutable
/// text content. The pipeline hands one of these per file and takes it
/// back once the transform completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Absolute path of the file being processed.
    pub path: PathBuf,
    /// UTF-8 text content, replaced by the rewritten text on success.
    pub contents: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }

    /// Expands this file's wildcard imports in place.
    pub fn expand(&mut self, options: &Options) -> Result<()> {
        self.contents = expand(&self.path, &self.contents, options)?;
        Ok(())
    }
}

/// Rewrites every wildcard `@import` in `contents` into explicit imports.
///
/// The buffer is re-scanned from the top after each substitution until no
/// matchable directive remains, bounded by the original line count so a
/// replacement that somehow re-introduces a wildcard cannot loop forever.
/// Text without matchable directives passes through byte-identical.
pub fn expand(path: &Path, contents: &str, options: &Options) -> Result<String> {
    let ignore = IgnoreSet::new(&options.ignore_paths)?;
    let bases = search_bases(path, &options.include_paths);

    let mut contents = contents.to_string();
    let max_passes = contents.split('\n').count();

    for _ in 0..max_passes {
        let Some(directive) = find_directive(&contents) else {
            break;
        };
        log::debug!(
            "Expanding '{}' in {}",
            directive.pattern,
            path.display()
        );

        let targets = match resolve(&directive.pattern, &bases)? {
            Some(matches) => surviving_targets(&matches, path, &ignore)?,
            None => Vec::new(),
        };
        if targets.is_empty() {
            log::info!(
                "Pattern '{}' matched no importable files in {}",
                directive.pattern,
                path.display()
            );
        }

        let replacement = render(&directive, &targets);
        contents = contents.replacen(&directive.span, &replacement, 1);
    }

    Ok(contents)
}
