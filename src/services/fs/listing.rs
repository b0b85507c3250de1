use crate::core::errors::Result;
use crate::models::file_entry::FileEntry;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

pub fn is_directory(path: &Path) -> bool {
    fs::metadata(path).map(|md| md.is_dir()).unwrap_or(false)
}

/// Regular files directly under `dir`, in enumeration order.
///
/// Metadata is read through symlinks, so a link to a file is listed with the
/// target's size and a dangling link is skipped.
pub fn list_files(dir: &Path) -> Result<Vec<FileEntry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        match fs::metadata(&path) {
            Ok(md) if md.is_file() => {
                entries.push(FileEntry::new(os_str_to_string(entry.file_name()), md.len()));
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!("skipping {}: {}", path.display(), e);
            }
        }
    }

    Ok(entries)
}

/// Names of the immediate sub-directories of `dir`, in enumeration order.
pub fn list_subdirectories(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if is_directory(&entry.path()) {
            names.push(os_str_to_string(entry.file_name()));
        }
    }

    Ok(names)
}

fn os_str_to_string(s: impl AsRef<OsStr>) -> String {
    s.as_ref().to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_and_directories_are_kept_apart() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), b"12345").unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();

        let files = list_files(dir.path()).unwrap();
        assert_eq!(files, vec![FileEntry::new("notes.txt", 5)]);

        let dirs = list_subdirectories(dir.path()).unwrap();
        assert_eq!(dirs, vec!["docs".to_string()]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("gone");
        assert!(list_files(&gone).is_err());
        assert!(list_subdirectories(&gone).is_err());
        assert!(!is_directory(&gone));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(dir.path().join("nowhere"), dir.path().join("link")).unwrap();
        assert!(list_files(dir.path()).unwrap().is_empty());
        assert!(list_subdirectories(dir.path()).unwrap().is_empty());
    }
}
