use thiserror::Error;

/// A point in the source: byte offset, 1-based line and 0-based column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LexicalErrorKind {
    #[error("Unexpected character: {0}")]
    Unexpected(char),
    #[error("Invalid number literal: {0}")]
    InvalidNumber(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("{kind} ({location})")]
pub struct LexicalError {
    pub kind: LexicalErrorKind,
    pub location: Location,
}

impl LexicalError {
    pub fn code(&self) -> &'static str {
        match self.kind {
            LexicalErrorKind::Unexpected(_) => "LX001",
            LexicalErrorKind::InvalidNumber(_) => "LX002",
        }
    }
}
