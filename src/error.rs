use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by command handlers.
///
/// The dispatcher is the only place these are caught; it prints the message and
/// carries on with the next line.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Argument string did not match the command's grammar. No file was touched.
    #[error("Invalid {command} command format. Use: {usage}")]
    Usage {
        command: &'static str,
        usage: &'static str,
    },

    #[error("Invalid line number for insertion: {line}. Please provide a valid line number.")]
    InsertOutOfRange { line: String },

    #[error("Invalid line number for deletion: {line}. Please provide a valid line number.")]
    DeleteOutOfRange { line: String },

    #[error("File does not exist: {}. Please check the file path and try again.", .path.display())]
    MissingFile { path: PathBuf },

    #[error("Source file does not exist: {}. Please provide a valid source file.", .path.display())]
    MissingSource { path: PathBuf },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl CommandError {
    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        CommandError::Io {
            context: context.into(),
            source,
        }
    }
}

/// Attach a human-readable context to an `io::Result`, mirroring `anyhow::Context`.
pub(crate) trait IoContext<T> {
    fn io_context<C, F>(self, f: F) -> Result<T, CommandError>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T> IoContext<T> for io::Result<T> {
    fn io_context<C, F>(self, f: F) -> Result<T, CommandError>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|e| CommandError::io(f(), e))
    }
}
