// output.rs

use std::io::{self, Write};

pub const ECHO_PREFIX: &str = "customShell>";

const ECHO_COLOR: &str = "\x1b[92m";
const RESET: &str = "\x1b[0m";

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum OutputLine {
    /// The accepted input line, shown back to the user.
    Echo(String),
    /// A result or error produced by a command.
    Text(String),
}

impl OutputLine {
    pub fn text(&self) -> String {
        match self {
            OutputLine::Echo(line) => format!("{ECHO_PREFIX} {line}"),
            OutputLine::Text(line) => line.clone(),
        }
    }
}

/// Where dispatch results go.
pub trait OutputSink {
    fn emit(&mut self, line: OutputLine);

    fn say(&mut self, text: String) {
        self.emit(OutputLine::Text(text));
    }
}

impl OutputSink for Vec<OutputLine> {
    fn emit(&mut self, line: OutputLine) {
        self.push(line);
    }
}

/// Writes lines to any `Write`, echo lines optionally coloured.
pub struct Terminal<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }
}

impl<W: Write> OutputSink for Terminal<W> {
    fn emit(&mut self, line: OutputLine) {
        let text = match (&line, self.color) {
            (OutputLine::Echo(_), true) => format!("{ECHO_COLOR}{}{RESET}", line.text()),
            _ => line.text(),
        };
        if let Err(e) = writeln_ignore_broken_pipe(&mut self.out, text) {
            log::warn!("failed to write output: {e}");
        }
        // Spawned children share the stream, so ours has to land first.
        let _ = self.out.flush();
    }
}

pub fn writeln_ignore_broken_pipe<W: Write, S: AsRef<str>>(mut w: W, s: S) -> io::Result<()> {
    match writeln!(w, "{}", s.as_ref()) {
        Err(ref e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
