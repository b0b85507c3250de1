pub mod format;
pub mod shell;

pub use shell::Shell;
