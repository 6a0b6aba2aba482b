// completion.rs

use crate::command::Verb;
use itertools::Itertools;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};

/// Completes verb keywords in the first word of the line.
#[derive(Default)]
pub struct VerbCompleter;

impl VerbCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn candidates(prefix: &str) -> Vec<&'static str> {
        Verb::ALL
            .iter()
            .map(|verb| verb.keyword())
            .filter(|keyword| keyword.starts_with(prefix))
            .sorted()
            .collect()
    }
}

impl Completer for VerbCompleter {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let prefix = &line[..pos];
        // Past the first word there is nothing we know how to complete.
        if prefix.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        let completions = Self::candidates(prefix)
            .into_iter()
            .map(|keyword| Pair {
                display: keyword.to_string(),
                replacement: format!("{keyword} "),
            })
            .collect();
        Ok((0, completions))
    }
}

impl Hinter for VerbCompleter {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for VerbCompleter {}

impl Validator for VerbCompleter {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult, ReadlineError> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Helper for VerbCompleter {}
