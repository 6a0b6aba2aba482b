// spawn.rs

use crate::config::Config;
use crate::error::ShellError;
use log::{debug, warn};
use nix::errno::Errno;
use nix::fcntl::OFlag;
use nix::sys::wait::{waitpid, WaitStatus};
use nix::unistd::{fork, pipe2, write, ForkResult, Pid};
use std::ffi::CString;
use std::fs::File;
use std::io::{self, Read};
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd};
use std::os::raw::c_char;
use std::ptr;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Lookup {
    /// Resolve the program through `PATH`, like `execvp`.
    Path,
    /// Use the program path as given.
    Literal,
}

/// Which wording the result lines use.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SpawnKind {
    Command,
    Install,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ChildStatus {
    Exited(i32),
    Abnormal,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SpawnReport {
    pub kind: SpawnKind,
    pub pid: Pid,
    /// Set when the child could not exec its target.
    pub exec_error: Option<Errno>,
    pub status: ChildStatus,
}

impl SpawnReport {
    pub fn lines(&self) -> Vec<String> {
        let (failed, finished) = match self.kind {
            SpawnKind::Command => ("Command execution failed", "Command"),
            SpawnKind::Install => ("Install command execution failed", "Installation command"),
        };
        let mut lines = Vec::with_capacity(2);
        if let Some(errno) = self.exec_error {
            lines.push(format!("{failed}: {}", errno.desc()));
        }
        lines.push(match self.status {
            ChildStatus::Exited(code) => format!("{finished} finished with exit code {code}"),
            ChildStatus::Abnormal => format!("{finished} terminated abnormally"),
        });
        lines
    }
}

/// A child process to fork, exec and wait for.
#[derive(Debug)]
pub struct Spawn {
    kind: SpawnKind,
    program: CString,
    argv: Vec<CString>,
    lookup: Lookup,
}

impl Spawn {
    /// The whole line is the program name; it gets no other arguments.
    pub fn command(line: &str) -> Result<Self, ShellError> {
        let program = to_cstring(line)?;
        Ok(Self {
            kind: SpawnKind::Command,
            argv: vec![program.clone()],
            program,
            lookup: Lookup::Path,
        })
    }

    /// `sudo install <file> <dir>`, all paths taken literally.
    pub fn install(config: &Config, file: &str) -> Result<Self, ShellError> {
        let argv = [
            config.sudo_path.as_str(),
            config.install_path.as_str(),
            file,
            config.install_dir.as_str(),
        ];
        let mut spawn = Self::literal(&config.sudo_path, &argv)?;
        spawn.kind = SpawnKind::Install;
        Ok(spawn)
    }

    pub fn literal<S: AsRef<str>>(program: &str, argv: &[S]) -> Result<Self, ShellError> {
        Ok(Self {
            kind: SpawnKind::Command,
            program: to_cstring(program)?,
            argv: argv
                .iter()
                .map(|arg| to_cstring(arg.as_ref()))
                .collect::<Result<_, _>>()?,
            lookup: Lookup::Literal,
        })
    }

    /// Forks, execs the target in the child and blocks until it terminates.
    ///
    /// An exec failure travels back over a close-on-exec pipe as a raw
    /// errno; end-of-file on that pipe means the exec went through.
    pub fn run(&self) -> Result<SpawnReport, ShellError> {
        // Everything the child touches is allocated before the fork.
        let mut argv: Vec<*const c_char> = self.argv.iter().map(|arg| arg.as_ptr()).collect();
        argv.push(ptr::null());

        let (read_fd, write_fd) = pipe2(OFlag::O_CLOEXEC).map_err(ShellError::Pipe)?;
        // SAFETY: both descriptors come straight from pipe2 and have no other owner.
        let (read_end, write_end) =
            unsafe { (OwnedFd::from_raw_fd(read_fd), OwnedFd::from_raw_fd(write_fd)) };

        // SAFETY: the child only calls exec, write and _exit before it goes away.
        match unsafe { fork() }.map_err(ShellError::Fork)? {
            ForkResult::Child => {
                unsafe {
                    match self.lookup {
                        Lookup::Path => libc::execvp(self.program.as_ptr(), argv.as_ptr()),
                        Lookup::Literal => libc::execv(self.program.as_ptr(), argv.as_ptr()),
                    };
                }
                let errno = io::Error::last_os_error().raw_os_error().unwrap_or(libc::ENOEXEC);
                let _ = write(write_end.as_raw_fd(), &errno.to_ne_bytes());
                unsafe { libc::_exit(1) }
            }
            ForkResult::Parent { child } => {
                drop(write_end);
                debug!("spawned {:?} as pid {child}", self.program);
                let exec_error = read_exec_error(read_end);
                let status = wait_for(child)?;
                debug!("pid {child} finished: {status:?}");
                Ok(SpawnReport {
                    kind: self.kind,
                    pid: child,
                    exec_error,
                    status,
                })
            }
        }
    }
}

fn to_cstring(s: &str) -> Result<CString, ShellError> {
    CString::new(s).map_err(|_| ShellError::NulByte(s.to_string()))
}

fn read_exec_error(read_end: OwnedFd) -> Option<Errno> {
    let mut buf = Vec::with_capacity(4);
    if let Err(e) = File::from(read_end).read_to_end(&mut buf) {
        warn!("could not read exec status from child: {e}");
        return None;
    }
    let raw: [u8; 4] = buf.as_slice().try_into().ok()?;
    Some(Errno::from_i32(i32::from_ne_bytes(raw)))
}

fn wait_for(child: Pid) -> Result<ChildStatus, ShellError> {
    loop {
        match waitpid(child, None) {
            Ok(WaitStatus::Exited(_, code)) => return Ok(ChildStatus::Exited(code)),
            Ok(_) => return Ok(ChildStatus::Abnormal),
            Err(Errno::EINTR) => continue,
            Err(e) => return Err(ShellError::Wait(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_reported() {
        let report = Spawn::command("true").unwrap().run().unwrap();
        assert_eq!(report.exec_error, None);
        assert_eq!(report.status, ChildStatus::Exited(0));

        let report = Spawn::command("false").unwrap().run().unwrap();
        assert_eq!(report.status, ChildStatus::Exited(1));
        assert_eq!(report.lines(), vec!["Command finished with exit code 1"]);
    }

    #[test]
    fn literal_spawn_passes_arguments() {
        let report = Spawn::literal("/bin/sh", &["/bin/sh", "-c", "exit 3"])
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(report.status, ChildStatus::Exited(3));
    }

    #[test]
    fn missing_program_reports_exec_failure() {
        let report = Spawn::command("no-such-program-for-custom-shell")
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(report.exec_error, Some(Errno::ENOENT));
        assert_eq!(report.status, ChildStatus::Exited(1));
        assert_eq!(
            report.lines(),
            vec![
                "Command execution failed: No such file or directory",
                "Command finished with exit code 1",
            ]
        );
    }

    #[test]
    fn literal_lookup_does_not_search_path() {
        let report = Spawn::literal("true", &["true"]).unwrap().run().unwrap();
        assert_eq!(report.exec_error, Some(Errno::ENOENT));
    }

    #[test]
    fn killed_child_is_abnormal() {
        let report = Spawn::literal("/bin/sh", &["/bin/sh", "-c", "kill -9 $$"])
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(report.status, ChildStatus::Abnormal);
        assert_eq!(report.lines(), vec!["Command terminated abnormally"]);
    }

    #[test]
    fn install_builds_the_elevated_argv() {
        let spawn = Spawn::install(&Config::default(), "./tool").unwrap();
        assert_eq!(spawn.kind, SpawnKind::Install);
        assert_eq!(spawn.lookup, Lookup::Literal);
        assert_eq!(spawn.program.to_str().unwrap(), "/usr/bin/sudo");
        let argv: Vec<&str> = spawn.argv.iter().map(|a| a.to_str().unwrap()).collect();
        assert_eq!(
            argv,
            vec!["/usr/bin/sudo", "/usr/bin/install", "./tool", "/usr/local/bin/"]
        );
    }

    #[test]
    fn install_wording() {
        let report = SpawnReport {
            kind: SpawnKind::Install,
            pid: Pid::from_raw(1),
            exec_error: Some(Errno::EACCES),
            status: ChildStatus::Exited(1),
        };
        assert_eq!(
            report.lines(),
            vec![
                "Install command execution failed: Permission denied",
                "Installation command finished with exit code 1",
            ]
        );
    }

    #[test]
    fn nul_bytes_are_rejected_before_forking() {
        assert!(matches!(
            Spawn::command("ls\0-la"),
            Err(ShellError::NulByte(_))
        ));
    }
}
