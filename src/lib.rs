//! A small interactive shell for editing `.txt` files.
//!
//! The shell understands five commands: `copy`, `create`, `delete`, `update` and
//! `exit`. Each input line is split into a command name and a raw argument string;
//! the name is resolved through a [`Registry`], and the chosen handler checks the
//! arguments against its own grammar before touching the file system.
//!
//! The main entry point is [`Interpreter`], which dispatches single lines and can
//! drive an interactive read loop. Handler failures are reported to the session
//! output and never abort the loop.

mod args;
pub mod command;
pub mod config;
pub mod env;
mod error;
mod grammar;
mod handler;
mod interpreter;
mod lines;
mod registry;

pub use args::{CopyArgs, CreateArgs, DeleteArgs, LineEdit, UpdateArgs};
pub use error::CommandError;
pub use interpreter::Interpreter;
pub use registry::Registry;
