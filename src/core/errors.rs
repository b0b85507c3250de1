use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("not a directory: {}", .0.display())]
    InvalidDirectory(PathBuf),
    #[error("no such subdirectory: {name} (available: {})", .available.join(", "))]
    NoSuchSubdirectory { name: String, available: Vec<String> },
    #[error("cannot move to the parent of {}", .0.display())]
    UnreachableParent(PathBuf),
    #[error("invalid sort key: {0} (expected one of: name, size)")]
    InvalidSortKey(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
