//! lessglob core library
//!
//! Pure Rust implementation of glob `@import` expansion for LESS sources.
//! This crate provides the per-file transform without any host bindings.
//!
//! # Architecture
//!
//! - `directive`: locating wildcard imports in file text
//! - `resolve`: glob resolution against prioritized search directories
//! - `filter`: self-reference, directory, extension, and ignore filtering
//! - `emit`: serializing surviving matches back into import statements
//! - `expand`: the bounded scan/resolve/filter/emit loop

pub mod directive;
pub mod emit;
pub mod error;
pub mod expand;
pub mod filter;
pub mod ignore;
pub mod options;
pub mod resolve;

// Re-export commonly used types at crate root
pub use directive::{find_directive, ImportDirective, STYLESHEET_EXT};
pub use error::{ExpandError, Result};
pub use expand::{expand, SourceFile};
pub use ignore::IgnoreSet;
pub use options::Options;
pub use resolve::{resolve, MatchSet};

#[cfg(test)]
pub mod testutil {
    use std::path::{Path, PathBuf};

    use fs_err as fs;
    use tempfile::TempDir;

    /// Creates a temporary directory to build stylesheet trees in.
    /// Returns the TempDir (owns the directory) and its canonicalized root,
    /// so paths compare equal with what the glob engine reports.
    ///
    /// IMPORTANT: Keep the TempDir alive for the duration of the test,
    /// otherwise the directory gets deleted.
    pub fn create_temp_tree() -> (TempDir, PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let root = fs::canonicalize(tmp.path()).unwrap();
        (tmp, root)
    }

    /// Creates a file with the given content at the specified path.
    /// Creates parent directories if needed.
    /// Returns the full path to the created file.
    pub fn create_file(dir: &Path, relative_path: &str, content: &[u8]) -> PathBuf {
        let path = dir.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok();
        }
        fs::write(&path, content).unwrap();
        path
    }
}
