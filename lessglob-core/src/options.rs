use std::path::{Component, Path, PathBuf};

/// Options a build pipeline hands to the preprocessor for one invocation.
///
/// Everything here is scoped to a single file transform; nothing is shared
/// or mutated across files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Directories searched after the file's own directory, in order.
    pub include_paths: Vec<PathBuf>,
    /// Base-relative glob patterns excluding matches from the output.
    pub ignore_paths: Vec<String>,
}

/// Builds the ordered list of directories a directive is resolved against.
///
/// The file's own directory always comes first, so it wins over any include
/// path that also matches. Never empty.
pub(crate) fn search_bases(file_path: &Path, include_paths: &[PathBuf]) -> Vec<PathBuf> {
    let own_dir = file_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut bases = Vec::with_capacity(include_paths.len() + 1);
    bases.push(normalize_dir(own_dir));
    bases.extend(include_paths.iter().map(|p| normalize_dir(p)));
    bases
}

/// Lexically resolves `.` and `..` components without touching the
/// filesystem, so missing include directories stay usable as search bases.
fn normalize_dir(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::ParentDir => {
                components.pop();
            }
            Component::CurDir => {}
            c => components.push(c),
        }
    }

    if components.is_empty() {
        PathBuf::from(".")
    } else {
        components.iter().collect()
    }
}
