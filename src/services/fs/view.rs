use std::env;
use std::path::{Component, Path, PathBuf};

use crate::core::errors::{Error, Result};
use crate::models::file_entry::{FileEntry, SortKey};
use crate::services::fs::listing::{is_directory, list_files, list_subdirectories};
use crate::services::fs::sort::sort_entries;

/// A single directory and a snapshot of the regular files in it.
///
/// `entries` is rebuilt wholesale whenever the path changes and is only
/// reordered by [`DirectoryView::sorted_entries`]. Failed navigation leaves
/// both the path and the snapshot untouched.
#[derive(Debug, Clone)]
pub struct DirectoryView {
    start_path: PathBuf,
    current_path: PathBuf,
    entries: Vec<FileEntry>,
}

impl DirectoryView {
    /// Opens the process working directory.
    pub fn new() -> Result<Self> {
        let cwd = env::current_dir()?;
        Self::open(cwd)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !is_directory(path) {
            tracing::warn!("cannot open {}: not a directory", path.display());
            return Err(Error::InvalidDirectory(path.to_path_buf()));
        }
        let current_path = absolutize(path)?;
        let entries = list_files(&current_path)?;
        tracing::debug!(
            "opened {} with {} files",
            current_path.display(),
            entries.len()
        );

        Ok(Self {
            start_path: current_path.clone(),
            current_path,
            entries,
        })
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    pub fn start_path(&self) -> &Path {
        &self.start_path
    }

    /// The cached snapshot in its current order.
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn file_names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    /// Re-scans the current directory for sub-directory names.
    pub fn list_subdirectory_names(&self) -> Result<Vec<String>> {
        list_subdirectories(&self.current_path)
    }

    pub fn set_directory(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if !is_directory(path) {
            tracing::warn!("{} is not a directory", path.display());
            return Err(Error::InvalidDirectory(path.to_path_buf()));
        }

        let target = absolutize(path)?;
        let entries = list_files(&target)?;
        tracing::info!("changed directory to {}", target.display());
        self.current_path = target;
        self.entries = entries;
        Ok(())
    }

    pub fn enter_subdirectory(&mut self, name: &str) -> Result<()> {
        let available = self.list_subdirectory_names()?;
        if !available.iter().any(|d| d == name) {
            tracing::warn!(
                "no subdirectory {:?} in {}; choose from {:?}",
                name,
                self.current_path.display(),
                available
            );
            return Err(Error::NoSuchSubdirectory {
                name: name.to_string(),
                available,
            });
        }
        let target = self.current_path.join(name);
        self.set_directory(target)
    }

    pub fn go_to_parent(&mut self) -> Result<()> {
        let parent = match self.current_path.parent() {
            Some(p) if is_directory(p) => p.to_path_buf(),
            _ => {
                tracing::warn!(
                    "cannot move above {}",
                    self.current_path.display()
                );
                return Err(Error::UnreachableParent(self.current_path.clone()));
            }
        };
        self.set_directory(parent)
    }

    pub fn go_to_start(&mut self) -> Result<()> {
        let start = self.start_path.clone();
        self.set_directory(start)
    }

    /// Rebuilds the snapshot for the unchanged current path.
    pub fn refresh(&mut self) -> Result<()> {
        self.entries = list_files(&self.current_path)?;
        Ok(())
    }

    /// Reorders the cached snapshot and returns it. The new order persists
    /// for later reads; the filesystem is not re-scanned.
    pub fn sorted_entries(&mut self, key: SortKey, descending: bool) -> &[FileEntry] {
        sort_entries(&mut self.entries, key, descending);
        &self.entries
    }
}

/// Makes `path` absolute against the working directory and folds `.` and
/// `..` lexically. Symlinks are left unresolved.
fn absolutize(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn absolutize_folds_dot_components() {
        let base = if cfg!(windows) { "C:\\base" } else { "/base" };
        let input = Path::new(base).join("a").join(".").join("b").join("..").join("c");
        assert_eq!(absolutize(&input).unwrap(), Path::new(base).join("a").join("c"));
    }

    #[test]
    fn absolutize_keeps_root() {
        let root = if cfg!(windows) { "C:\\" } else { "/" };
        let input = Path::new(root).join("..");
        assert_eq!(absolutize(&input).unwrap(), Path::new(root));
    }

    #[test]
    fn refresh_picks_up_new_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut view = DirectoryView::open(dir.path()).unwrap();
        assert!(view.entries().is_empty());

        fs::write(dir.path().join("late.txt"), b"x").unwrap();
        assert!(view.entries().is_empty());
        view.refresh().unwrap();
        assert_eq!(view.file_names(), vec!["late.txt".to_string()]);
    }

    #[test]
    fn open_rejects_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, b"x").unwrap();
        let err = DirectoryView::open(&file).unwrap_err();
        assert!(matches!(err, Error::InvalidDirectory(ref p) if p == &file));
    }
}
