use crate::command::{CommandHandler, CommandName};
use crate::handler::{CopyFile, CreateFile, DeleteFile, Exit, UnknownCommand, UpdateFile};
use std::collections::HashMap;

/// Immutable lookup table from command name to handler.
///
/// Built once at startup and only read afterwards. Names that are not in the
/// table resolve to a handler that reports an invalid command.
pub struct Registry {
    handlers: HashMap<CommandName, Box<dyn CommandHandler>>,
    unknown: Box<dyn CommandHandler>,
}

impl Registry {
    /// Registry with no commands; every name resolves to the unknown handler.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
            unknown: Box::new(UnknownCommand),
        }
    }

    /// Bind `handler` to `name`, replacing any previous binding.
    pub fn register<H: CommandHandler + 'static>(mut self, name: CommandName, handler: H) -> Self {
        self.handlers.insert(name, Box::new(handler));
        self
    }

    /// Find the handler for a command-name token, ignoring case.
    pub fn resolve(&self, token: &str) -> &dyn CommandHandler {
        let handler = token
            .parse::<CommandName>()
            .ok()
            .and_then(|name| self.handlers.get(&name))
            .unwrap_or(&self.unknown);
        &**handler
    }

    /// Whether `token` names a registered command.
    pub fn contains(&self, token: &str) -> bool {
        token
            .parse::<CommandName>()
            .is_ok_and(|name| self.handlers.contains_key(&name))
    }
}

impl Default for Registry {
    /// The five file commands: `copy`, `create`, `delete`, `update`, `exit`.
    fn default() -> Self {
        Self::empty()
            .register(CommandName::Copy, CopyFile)
            .register(CommandName::Create, CreateFile)
            .register(CommandName::Delete, DeleteFile)
            .register(CommandName::Update, UpdateFile)
            .register(CommandName::Exit, Exit)
    }
}
