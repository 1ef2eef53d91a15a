use std::env as stdenv;
use std::path::{Path, PathBuf};

/// Mutable per-session state shared by the handlers.
///
/// The environment contains:
/// - `current_dir`: the directory relative file paths are resolved against.
/// - `should_exit`: set by the `exit` command; the read loop stops once it is true.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Base directory for relative paths given on the command line.
    pub current_dir: PathBuf,
    /// When set to true, indicates that an interactive loop should exit.
    pub should_exit: bool,
}

impl Environment {
    /// Capture the process working directory into a new `Environment`.
    pub fn new() -> Self {
        let current_dir = stdenv::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::with_dir(current_dir)
    }

    /// Environment rooted at an explicit directory.
    pub fn with_dir(current_dir: impl Into<PathBuf>) -> Self {
        Self {
            current_dir: current_dir.into(),
            should_exit: false,
        }
    }

    /// Resolve a path from a command argument.
    ///
    /// Absolute paths are returned as-is; relative ones are joined onto `current_dir`.
    pub fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.current_dir.join(path)
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
