// builtins.rs

use crate::error::ShellError;
use crate::history::History;
use crate::output::OutputSink;
use chrono::Local;
use log::warn;
use nix::sys::stat::Mode;
use std::env;
use std::fs::{self, File};

pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// `read_dir` never yields `.` or `..`, so nothing to filter here.
pub fn list_my_dir(out: &mut dyn OutputSink) -> Result<(), ShellError> {
    for entry in fs::read_dir(".").map_err(ShellError::OpenDir)? {
        match entry {
            Ok(entry) => out.say(entry.file_name().to_string_lossy().into_owned()),
            Err(e) => warn!("skipping unreadable directory entry: {e}"),
        }
    }
    Ok(())
}

pub fn get_into(path: &str, out: &mut dyn OutputSink) -> Result<(), ShellError> {
    env::set_current_dir(path).map_err(ShellError::ChangeDir)?;
    display_pwd(out)
}

/// Moves to `..` whatever directory name it was handed.
pub fn get_out(_dir_name: &str, out: &mut dyn OutputSink) -> Result<(), ShellError> {
    env::set_current_dir("..").map_err(ShellError::GoBack)?;
    display_pwd(out)
}

pub fn create_file(name: &str, out: &mut dyn OutputSink) -> Result<(), ShellError> {
    File::create(name).map_err(ShellError::CreateFile)?;
    out.say(format!("File '{name}' created successfully"));
    Ok(())
}

pub fn remove_file(name: &str, out: &mut dyn OutputSink) -> Result<(), ShellError> {
    fs::remove_file(name).map_err(ShellError::RemoveFile)?;
    out.say(format!("File '{name}' removed successfully"));
    Ok(())
}

pub fn display_pwd(out: &mut dyn OutputSink) -> Result<(), ShellError> {
    let cwd = env::current_dir().map_err(ShellError::CurrentDir)?;
    out.say(format!("Current working directory: {}", cwd.display()));
    Ok(())
}

pub fn make_dir(name: &str, out: &mut dyn OutputSink) -> Result<(), ShellError> {
    nix::unistd::mkdir(name, Mode::from_bits_truncate(0o777))
        .map_err(|errno| ShellError::MakeDir(errno.into()))?;
    out.say(format!("Directory '{name}' created successfully"));
    Ok(())
}

pub fn remove_dir(name: &str, out: &mut dyn OutputSink) -> Result<(), ShellError> {
    fs::remove_dir(name).map_err(ShellError::RemoveDir)?;
    out.say(format!("Directory '{name}' removed successfully"));
    Ok(())
}

pub fn count_files(path: &str, out: &mut dyn OutputSink) -> Result<(), ShellError> {
    let count = fs::read_dir(path)
        .map_err(ShellError::OpenDir)?
        .filter(|entry| entry.is_ok())
        .count();
    out.say(format!("Total files in '{path}': {count}"));
    Ok(())
}

pub fn display_time(out: &mut dyn OutputSink) {
    out.say(format!("Current time: {}", Local::now().format(TIME_FORMAT)));
}

pub fn display_history(history: &History, out: &mut dyn OutputSink) {
    if history.is_empty() {
        out.say("No commands in history.".to_string());
        return;
    }
    out.say("Command History:".to_string());
    for (n, line) in history.list() {
        out.say(format!("{n}: {line}"));
    }
}
