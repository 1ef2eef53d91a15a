use crate::env::Environment;
use crate::registry::Registry;
use anyhow::Context;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use rustyline::history::History;
use std::io::Write;
use std::path::PathBuf;

/// Line dispatcher and interactive loop for the file commands.
///
/// The interpreter owns an immutable [`Registry`] and the session [`Environment`].
/// Each line is split into a command name and a raw argument string; the
/// resolved handler's failures are written to the output and never propagate.
///
/// Example
/// ```
/// use file_commands::Interpreter;
/// let mut sh = Interpreter::default();
/// let mut out = Vec::new();
/// sh.dispatch("frobnicate now", &mut out);
/// assert_eq!(String::from_utf8(out).unwrap(), "Invalid command. Please try again.\n");
/// ```
pub struct Interpreter {
    env: Environment,
    registry: Registry,
    prompt: String,
    history: Option<PathBuf>,
}

impl Interpreter {
    /// Create an interpreter over a custom registry and environment.
    pub fn new(registry: Registry, env: Environment) -> Self {
        Self {
            env,
            registry,
            prompt: crate::config::DEFAULT_PROMPT.to_string(),
            history: None,
        }
    }

    /// Prompt printed by [`Interpreter::repl`] before each line.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// History file used by [`Interpreter::repl`].
    pub fn with_history(mut self, path: Option<PathBuf>) -> Self {
        self.history = path;
        self
    }

    /// True once an `exit` command has been dispatched.
    pub fn should_exit(&self) -> bool {
        self.env.should_exit
    }

    /// Execute one input line.
    ///
    /// The line is split on its first space: the part before is the command name,
    /// everything after is passed to the handler verbatim. Handler failures are
    /// logged and written to `out`.
    pub fn dispatch(&mut self, line: &str, out: &mut dyn Write) {
        let (name, args) = line.split_once(' ').unwrap_or((line, ""));
        let handler = self.registry.resolve(name);
        if let Err(e) = handler.execute(args, out, &mut self.env) {
            log::error!("{name}: {e}");
            if let Err(write_err) = writeln!(out, "{e}") {
                log::debug!("can't write to session output: {write_err}");
            }
        }
    }

    /// Read lines from the terminal and dispatch them until `exit`, Ctrl-C or Ctrl-D.
    pub fn repl(&mut self) -> anyhow::Result<()> {
        let mut rl = DefaultEditor::new().context("failed to initialize line editor")?;
        if let Some(path) = &self.history {
            if let Err(e) = rl.load_history(path) {
                log::warn!("can't load history from {}: {e}", path.display());
            }
        }

        let mut stdout = std::io::stdout();
        while !self.env.should_exit {
            match rl.readline(&self.prompt) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    if let Err(e) = rl.add_history_entry(line.as_str()) {
                        log::warn!("can't record history entry: {e}");
                    }
                    self.dispatch(&line, &mut stdout);
                    if let Err(e) = stdout.flush() {
                        log::warn!("can't flush stdout: {e}");
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err).context("failed to read line"),
            }
        }

        self.save_history(rl.history_mut());
        Ok(())
    }

    /// Write `history` to the configured history file, if any.
    ///
    /// A failure is logged and otherwise ignored: once the loop is over the session
    /// ends with success whatever happens to the history file.
    fn save_history(&self, history: &mut impl History) {
        if let Some(path) = &self.history {
            if let Err(e) = history.save(path) {
                log::warn!("can't save history to {}: {e}", path.display());
            }
        }
    }
}

impl Default for Interpreter {
    /// Interpreter with the default [`Registry`] rooted at the process working directory.
    fn default() -> Self {
        Self::new(Registry::default(), Environment::new())
    }
}
