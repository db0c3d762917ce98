use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs_err as fs;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "lessglob.toml";

/// Project-level defaults picked up from a `lessglob.toml` in the current
/// directory or any ancestor. Command-line flags append to these.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directories searched after each file's own directory.
    /// Relative entries are resolved against the config file's directory.
    pub include_paths: Vec<PathBuf>,
    /// Glob patterns for matches that must never be emitted.
    pub ignore_paths: Vec<String>,
}

impl Config {
    /// Walks up from `current_directory` looking for a config file.
    /// Returns `None` when no config file exists anywhere up the tree.
    pub fn find(current_directory: impl AsRef<Path>) -> Option<Result<Self>> {
        let config_path = find_config_file(current_directory.as_ref())?;
        log::debug!("Loading config from {}", config_path.display());
        Some(Self::load(&config_path))
    }

    /// Loads and parses a config file, anchoring relative include paths to
    /// the file's own directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        if let Some(dir) = path.parent() {
            for include in &mut config.include_paths {
                if include.is_relative() {
                    *include = dir.join(&*include);
                }
            }
        }

        Ok(config)
    }

    pub fn save(&self, directory: impl AsRef<Path>) -> Result<()> {
        let config_path = directory.as_ref().join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(&self)?;
        fs::write(&config_path, content)?;
        log::info!("Configuration saved to {}", config_path.display());
        Ok(())
    }
}

fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut dir = start_dir;
    loop {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_save_and_find_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();

        let original = Config {
            include_paths: vec![PathBuf::from("/abs/vendor")],
            ignore_paths: vec!["**/_internal.less".to_string()],
        };
        original.save(root).unwrap();

        let loaded = Config::find(root).unwrap().unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn find_returns_none_without_config_file() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(Config::find(tmp.path()).is_none());
    }

    #[test]
    fn find_walks_up_to_ancestor_config() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        fs::write(root.join(CONFIG_FILE_NAME), "ignore_paths = ['import/**']\n").unwrap();
        let subdir = root.join("styles/components");
        fs::create_dir_all(&subdir).unwrap();

        let loaded = Config::find(&subdir).unwrap().unwrap();
        assert_eq!(loaded.ignore_paths, vec!["import/**".to_string()]);
    }

    #[test]
    fn relative_include_paths_anchor_to_config_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        fs::write(root.join(CONFIG_FILE_NAME), "include_paths = ['vendor']\n").unwrap();

        let loaded = Config::find(root).unwrap().unwrap();
        assert_eq!(loaded.include_paths, vec![root.join("vendor")]);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        fs::write(root.join(CONFIG_FILE_NAME), "ignorePaths = ['x']\n").unwrap();

        let result = Config::find(root).unwrap();
        assert!(result.is_err());
    }
}
