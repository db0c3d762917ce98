use std::io::ErrorKind;
use std::path::Path;

use fs_err as fs;

use crate::directive::STYLESHEET_EXT;
use crate::error::Result;
use crate::ignore::IgnoreSet;
use crate::resolve::MatchSet;

/// Reduces a match set to the import targets that survive filtering.
///
/// Targets come back relative to the resolving base, forward-slash
/// separated, in the match set's original order. A match is dropped when it
/// is the scanned file itself, a directory, not a stylesheet, or its
/// base-relative path hits an ignore pattern. A match that vanished between
/// globbing and stat is dropped too; any other stat failure propagates.
pub fn surviving_targets(
    matches: &MatchSet,
    own_path: &Path,
    ignore: &IgnoreSet,
) -> Result<Vec<String>> {
    let mut targets = Vec::new();

    for path in &matches.files {
        if path == own_path {
            log::debug!("Skipping self-import of {}", path.display());
            continue;
        }

        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => continue,
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => return Err(e.into()),
        }

        if !has_stylesheet_extension(path) {
            continue;
        }

        let relative = path.strip_prefix(&matches.base).unwrap_or(path);
        let target = to_forward_slashes(relative);
        if ignore.is_ignored(&target) {
            log::debug!("Dropping {} per ignore patterns", target);
            continue;
        }

        targets.push(target);
    }

    Ok(targets)
}

fn has_stylesheet_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(STYLESHEET_EXT))
}

/// Emitted import targets are portable strings, so the separator is `/`
/// regardless of host platform.
fn to_forward_slashes(path: &Path) -> String {
    let parts: Vec<_> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    parts.join("/")
}
