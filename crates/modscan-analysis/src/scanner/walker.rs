//! Sorted source-file walker built on `walkdir`.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use modscan_core::constants::SOURCE_EXTENSION;
use modscan_core::errors::ScanError;
use walkdir::WalkDir;

/// Enumerates `.py` files below a root directory.
///
/// Symbolic links are never followed and symlinked files are never returned,
/// so a tree cannot produce cycles or the same file twice.
#[derive(Debug, Clone)]
pub struct SourceWalker {
    root: PathBuf,
}

impl SourceWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Collect all source files, sorted component-wise by full path.
    pub fn collect(&self) -> Result<Vec<PathBuf>, ScanError> {
        if !self.root.is_dir() {
            return Err(ScanError::RootNotFound {
                path: self.root.clone(),
            });
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(false) {
            let entry = entry.map_err(|e| ScanError::Io {
                path: e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.root.clone()),
                source: e.into(),
            })?;

            if entry.path_is_symlink() || !entry.file_type().is_file() {
                continue;
            }
            if entry.path().extension() != Some(OsStr::new(SOURCE_EXTENSION)) {
                continue;
            }
            files.push(entry.into_path());
        }

        files.sort();
        tracing::trace!(root = %self.root.display(), files = files.len(), "walk complete");
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn collects_only_python_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("my");
        touch(&root, "zeta.py");
        touch(&root, "alpha/__init__.py");
        touch(&root, "alpha/beta.py");
        touch(&root, "alpha.py");
        touch(&root, "notes.txt");
        touch(&root, "__pycache__/alpha.cpython-312.pyc");

        let files = SourceWalker::new(&root).collect().unwrap();
        let relative: Vec<_> = files
            .iter()
            .map(|f| f.strip_prefix(&root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(
            relative,
            vec!["alpha/__init__.py", "alpha/beta.py", "alpha.py", "zeta.py"]
        );
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SourceWalker::new(dir.path().join("absent"))
            .collect()
            .unwrap_err();
        assert!(matches!(err, ScanError::RootNotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("my");
        touch(&root, "real.py");
        touch(&root, "pkg/inner.py");
        std::os::unix::fs::symlink(root.join("real.py"), root.join("alias.py")).unwrap();
        std::os::unix::fs::symlink(root.join("pkg"), root.join("linked_pkg")).unwrap();

        let files = SourceWalker::new(&root).collect().unwrap();
        assert_eq!(files, vec![root.join("pkg/inner.py"), root.join("real.py")]);
    }
}
