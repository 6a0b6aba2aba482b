//! A small interactive shell: a fixed set of file-system verbs, a bounded
//! command history, and fork/exec for everything else.

pub mod builtins;
pub mod command;
pub mod completion;
pub mod config;
pub mod error;
pub mod history;
pub mod output;
pub mod repl;
pub mod shell;
pub mod spawn;

pub use error::ShellError;
pub use output::{OutputLine, OutputSink};
pub use shell::Shell;
