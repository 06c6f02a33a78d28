use std::fmt::Display;

use cursor::Line;
use derive_more::Deref;
use itertools::Itertools;

/// Where on its line a diagnostic points to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Nowhere,
    End,
    Lexeme(String),
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Nowhere => Ok(()),
            Location::End => write!(f, " at end"),
            Location::Lexeme(lexeme) => write!(f, " at '{lexeme}'"),
        }
    }
}

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[error("[line {line}] Error{location}: {message}")]
pub struct Diagnostic {
    pub line: Line,
    pub location: Location,
    pub message: String,
}

impl Diagnostic {
    pub fn new(line: Line, location: Location, message: impl ToString) -> Self {
        Self { line, location, message: message.to_string() }
    }
}

/// Every diagnostic reported during one run of the pipeline.
///
/// Each run gets its own accumulator, so errors from one REPL line can never
/// leak into the next one.
#[derive(thiserror::Error, Debug, Default, PartialEq, Deref)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, line: Line, location: Location, message: impl ToString) {
        self.push(Diagnostic::new(line, location, message));
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        log::debug!("Reported: {diagnostic}");
        self.0.push(diagnostic);
    }

    pub fn had_error(&self) -> bool {
        !self.0.is_empty()
    }

    /// Hands out `value` only if nothing has been reported.
    pub fn into_result<T>(self, value: T) -> Result<T, Diagnostics> {
        if self.had_error() {
            Err(self)
        } else {
            Ok(value)
        }
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(d: Diagnostic) -> Self {
        Self(vec![d])
    }
}

impl Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join("\n"))
    }
}
