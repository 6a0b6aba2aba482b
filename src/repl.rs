// repl.rs

use crate::completion::VerbCompleter;
use crate::config::Config;
use crate::output::Terminal;
use crate::shell::Shell;
use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config as EditorConfig, Editor};
use std::io::{self, IsTerminal};

pub fn prompt() -> String {
    match std::env::current_dir() {
        Ok(cwd) => format!("{}$ ", cwd.display()),
        Err(_) => "Unknown$ ".to_string(),
    }
}

pub fn start_repl(config: Config) -> Result<()> {
    let editor_config = EditorConfig::builder()
        .completion_type(CompletionType::List)
        .max_history_size(config.history_capacity)
        .context("invalid history size")?
        .build();
    let mut rl: Editor<VerbCompleter, DefaultHistory> =
        Editor::with_config(editor_config).context("failed to create line editor")?;
    rl.set_helper(Some(VerbCompleter::new()));

    let color = config.color && io::stdout().is_terminal();
    let mut terminal = Terminal::new(io::stdout(), color);
    let mut shell = Shell::new(config);

    loop {
        match rl.readline(&prompt()) {
            Ok(line) => {
                if !line.is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                shell.submit(&line, &mut terminal);
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("failed to read input"),
        }
    }
    Ok(())
}
