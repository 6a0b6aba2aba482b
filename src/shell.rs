// shell.rs

use crate::builtins;
use crate::command::{self, Command};
use crate::config::Config;
use crate::error::ShellError;
use crate::history::History;
use crate::output::{OutputLine, OutputSink};
use crate::spawn::Spawn;
use log::{debug, warn};

/// Everything a dispatch can read or change, besides the process-wide
/// working directory.
#[derive(Debug, Clone)]
pub struct Shell {
    history: History,
    config: Config,
}

impl Shell {
    pub fn new(config: Config) -> Self {
        Self {
            history: History::with_capacity(config.history_capacity),
            config,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Records, echoes and runs one input line. Empty lines are dropped;
    /// every other line lands in the history before it is looked at, so
    /// failing and unknown commands are remembered too.
    pub fn submit(&mut self, line: &str, out: &mut dyn OutputSink) {
        if line.is_empty() {
            return;
        }
        self.history.record(line);
        out.emit(OutputLine::Echo(line.to_string()));

        let command = command::parse(line);
        debug!("dispatching {command:?}");
        if let Err(e) = self.dispatch(command, out) {
            warn!("{line:?} failed: {e:?}");
            out.say(e.to_string());
        }
    }

    fn dispatch(&self, command: Command<'_>, out: &mut dyn OutputSink) -> Result<(), ShellError> {
        match command {
            Command::ListMyDir => builtins::list_my_dir(out),
            Command::GetInto(path) => builtins::get_into(path, out),
            Command::CreateFile(name) => builtins::create_file(name, out),
            Command::RemoveFile(name) => builtins::remove_file(name, out),
            Command::DisplayPwd => builtins::display_pwd(out),
            Command::MakeDir(name) => builtins::make_dir(name, out),
            Command::RemoveDir(name) => builtins::remove_dir(name, out),
            Command::CountFiles(path) => builtins::count_files(path, out),
            Command::DisplayTime => {
                builtins::display_time(out);
                Ok(())
            }
            Command::History => {
                builtins::display_history(&self.history, out);
                Ok(())
            }
            Command::GetOut(dir_name) => builtins::get_out(dir_name, out),
            Command::InstallFile(path) => run(Spawn::install(&self.config, path)?, out),
            Command::External(program) => run(Spawn::command(program)?, out),
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

fn run(spawn: Spawn, out: &mut dyn OutputSink) -> Result<(), ShellError> {
    let report = spawn.run()?;
    for line in report.lines() {
        out.say(line);
    }
    Ok(())
}
