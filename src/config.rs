//! Command-line options of the `file_commands` binary.

use crate::env::Environment;
use argh::FromArgs;
use std::path::PathBuf;

/// Default prompt shown before every input line.
pub const DEFAULT_PROMPT: &str = "Enter command (or type 'exit' to quit): ";

#[derive(FromArgs, Debug)]
/// Interactive shell for copying, creating, deleting and updating .txt files.
pub struct Options {
    #[argh(option, short = 'C')]
    /// directory that relative file paths are resolved against. Defaults to the current directory.
    pub dir: Option<PathBuf>,

    #[argh(option, default = "DEFAULT_PROMPT.to_string()")]
    /// prompt printed before each command.
    pub prompt: String,

    #[argh(option)]
    /// file to load command history from on start and save it to on exit.
    pub history: Option<PathBuf>,

    #[argh(option, default = "String::from(\"warn\")")]
    /// log filter (error, warn, info, debug, trace); RUST_LOG takes precedence.
    pub log_level: String,
}

impl Options {
    /// Session environment rooted at `--dir`, or at the process working directory.
    pub fn environment(&self) -> Environment {
        match &self.dir {
            Some(dir) => Environment::with_dir(dir.clone()),
            None => Environment::new(),
        }
    }
}
