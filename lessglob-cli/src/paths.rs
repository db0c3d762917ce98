//! Path resolution for the CLI.
//!
//! Turns user-supplied file and directory arguments into the concrete
//! stylesheet files to process, and absolutizes include paths before they
//! reach the core.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Result};
use walkdir::WalkDir;

use lessglob_core::STYLESHEET_EXT;

/// A stylesheet scheduled for processing: where it lives, and where its
/// output lands relative to a `--out-dir` destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub file: PathBuf,
    pub relative: PathBuf,
}

/// Resolve a path, making it absolute against the current directory.
pub fn resolve_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let cwd = std::env::current_dir()
            .map_err(|e| anyhow!("Failed to get current directory: {}", e))?;
        Ok(cwd.join(path))
    }
}

/// Expands the user's arguments into stylesheet files.
///
/// Explicit files are taken as-is; directories are walked for `.less`
/// files in a stable order. A path that is neither is an error.
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<Input>> {
    let mut inputs = Vec::new();

    for path in paths {
        let resolved = resolve_path(path)?;

        if resolved.is_file() {
            let relative = resolved
                .file_name()
                .map(PathBuf::from)
                .ok_or_else(|| anyhow!("Path has no file name: {}", resolved.display()))?;
            inputs.push(Input {
                file: resolved,
                relative,
            });
        } else if resolved.is_dir() {
            for entry in WalkDir::new(&resolved)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
            {
                let is_stylesheet = entry
                    .path()
                    .extension()
                    .map(|ext| ext.eq_ignore_ascii_case(STYLESHEET_EXT))
                    .unwrap_or(false);
                if !is_stylesheet {
                    continue;
                }

                let relative = entry
                    .path()
                    .strip_prefix(&resolved)
                    .map_err(|_| anyhow!("Walked outside {}", resolved.display()))?
                    .to_path_buf();
                inputs.push(Input {
                    file: entry.path().to_path_buf(),
                    relative,
                });
            }
        } else {
            bail!("Path not found: {}", path.display());
        }
    }

    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fs_err as fs;

    fn create_file(dir: &Path, relative: &str) -> PathBuf {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok();
        }
        fs::write(&path, b"").unwrap();
        path
    }

    #[test]
    fn resolve_path_keeps_absolute_paths() {
        let path = PathBuf::from("/absolute/path");
        assert_eq!(resolve_path(&path).unwrap(), path);
    }

    #[test]
    fn explicit_file_is_taken_as_is() {
        let tmp = tempfile::tempdir().unwrap();
        let file = create_file(tmp.path(), "main.less");

        let inputs = collect_inputs(&[file.clone()]).unwrap();
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].file, file);
        assert_eq!(inputs[0].relative, PathBuf::from("main.less"));
    }

    #[test]
    fn directory_is_walked_for_stylesheets() {
        let tmp = tempfile::tempdir().unwrap();
        create_file(tmp.path(), "a.less");
        create_file(tmp.path(), "sub/b.less");
        create_file(tmp.path(), "sub/notes.txt");

        let inputs = collect_inputs(&[tmp.path().to_path_buf()]).unwrap();
        let relatives: Vec<_> = inputs.iter().map(|i| i.relative.clone()).collect();
        assert_eq!(
            relatives,
            vec![PathBuf::from("a.less"), PathBuf::from("sub/b.less")]
        );
    }

    #[test]
    fn missing_path_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let result = collect_inputs(&[tmp.path().join("nope.less")]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Path not found"));
    }
}
