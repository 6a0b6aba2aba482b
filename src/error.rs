// error.rs

use nix::errno::Errno;
use std::io;
use thiserror::Error;

/// Failures of a single dispatched command. None of them is fatal to the
/// shell: the dispatcher turns each one into a line of output.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Error opening directory: {}", describe(.0))]
    OpenDir(#[source] io::Error),
    #[error("Error changing directory: {}", describe(.0))]
    ChangeDir(#[source] io::Error),
    #[error("Error going back: {}", describe(.0))]
    GoBack(#[source] io::Error),
    #[error("Error creating file: {}", describe(.0))]
    CreateFile(#[source] io::Error),
    #[error("Error removing file: {}", describe(.0))]
    RemoveFile(#[source] io::Error),
    #[error("Error getting current directory: {}", describe(.0))]
    CurrentDir(#[source] io::Error),
    #[error("Error creating directory: {}", describe(.0))]
    MakeDir(#[source] io::Error),
    #[error("Error removing directory: {}", describe(.0))]
    RemoveDir(#[source] io::Error),
    #[error("Fork failed")]
    Fork(#[source] Errno),
    #[error("Could not set up command execution: {}", .0.desc())]
    Pipe(#[source] Errno),
    #[error("Waiting for child process failed: {}", .0.desc())]
    Wait(#[source] Errno),
    #[error("Invalid command: {0:?} contains a NUL byte")]
    NulByte(String),
}

/// Renders an OS error the way `strerror` does, without the
/// `(os error N)` suffix std adds.
pub fn describe(err: &io::Error) -> String {
    match err.raw_os_error() {
        Some(code) => Errno::from_i32(code).desc().to_string(),
        None => err.to_string(),
    }
}
