//! Path to canonical module name.

use std::path::{Component, Path, PathBuf};

use modscan_core::constants::{NAMESPACE_SEPARATOR, PACKAGE_INIT_FILE, SOURCE_EXTENSION};

/// Dotted module name for a source file path relative to the root's parent.
///
/// `my/photos/main.py` is `my.photos.main`; `my/photos/__init__.py` is
/// `my.photos`. Pure: the filesystem is never consulted.
pub fn canonical_name(relative: &Path) -> Option<String> {
    let mut parts: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    let file_name = parts.pop()?;
    if file_name != PACKAGE_INIT_FILE {
        let suffix = format!(".{SOURCE_EXTENSION}");
        let stem = file_name.strip_suffix(&suffix).unwrap_or(&file_name);
        parts.push(stem.to_string());
    }

    if parts.is_empty() {
        return None;
    }
    Some(parts.join(NAMESPACE_SEPARATOR.to_string().as_str()))
}

/// The two files a canonical name can come from: a plain module file and a
/// package init file.
pub fn candidate_paths(name: &str) -> [PathBuf; 2] {
    let base: PathBuf = name.split(NAMESPACE_SEPARATOR).collect();
    [
        base.with_extension(SOURCE_EXTENSION),
        base.join(PACKAGE_INIT_FILE),
    ]
}
