use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::errors::{Error, Result};
use crate::models::file_entry::SortKey;

/// Settings read from an optional JSON file. Missing fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub start_dir: Option<PathBuf>,
    pub sort_key: SortKey,
    pub descending: bool,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_dir: None,
            sort_key: SortKey::Name,
            descending: false,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let config = Config::from_json(r#"{"sort_key": "size", "descending": true}"#).unwrap();
        assert_eq!(config.sort_key, SortKey::Size);
        assert!(config.descending);
        assert_eq!(config.log_filter, "info");
        assert!(config.start_dir.is_none());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = Config::from_json(r#"{"colour": "blue"}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn malformed_file_error_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dirsort.json");
        fs::write(&path, r#"{"sort_key": "colour"}"#).unwrap();

        match Config::load(&path) {
            Err(Error::Config(msg)) => {
                assert!(msg.starts_with(&path.display().to_string()));
                assert!(msg.contains("colour"));
            }
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn load_reads_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dirsort.json");
        fs::write(&path, r#"{"descending": true, "log_filter": "debug"}"#).unwrap();

        let config = Config::load_optional(Some(path.as_path())).unwrap();
        assert!(config.descending);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
