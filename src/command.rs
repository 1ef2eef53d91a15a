use crate::env::Environment;
use crate::error::CommandError;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Closed set of commands known to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    Copy,
    Create,
    Delete,
    Update,
    Exit,
}

impl CommandName {
    /// Every recognized command, in registration order.
    pub const ALL: [CommandName; 5] = [
        CommandName::Copy,
        CommandName::Create,
        CommandName::Delete,
        CommandName::Update,
        CommandName::Exit,
    ];

    /// Canonical upper-case spelling of the command.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandName::Copy => "COPY",
            CommandName::Create => "CREATE",
            CommandName::Delete => "DELETE",
            CommandName::Update => "UPDATE",
            CommandName::Exit => "EXIT",
        }
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a token does not name any known command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommandName(pub String);

impl FromStr for CommandName {
    type Err = UnknownCommandName;

    /// Case-insensitive lookup: `copy`, `Copy` and `COPY` are the same command.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let upper = token.to_uppercase();
        CommandName::ALL
            .into_iter()
            .find(|name| name.as_str() == upper)
            .ok_or_else(|| UnknownCommandName(token.to_string()))
    }
}

/// Object-safe capability implemented by every command handler.
///
/// `args` is the raw remainder of the input line after the command name. Handlers
/// that take arguments validate it against their grammar before doing any I/O.
/// Informational messages go to `out`; failures are returned to the dispatcher.
pub trait CommandHandler {
    fn execute(
        &self,
        args: &str,
        out: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<(), CommandError>;
}
