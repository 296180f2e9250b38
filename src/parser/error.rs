use crate::lexer::{LexicalError, LexicalErrorKind, Location, TokenKind};
use compact_str::CompactString;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParserErrorKind {
    #[error("Expecting {kind}: \"{value}\"")]
    Expecting {
        kind: TokenKind,
        value: CompactString,
    },
    #[error("Expecting variable name")]
    NonVariable,
    /// Carries the offending token rendered as JSON, or `null` at end of input.
    #[error("Unexpected token: {0}")]
    UnexpectedToken(String),
    #[error(transparent)]
    Lexical(#[from] LexicalErrorKind),
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("{kind} ({location})")]
pub struct ParserError {
    pub kind: ParserErrorKind,
    pub location: Location,
}

impl ParserError {
    pub fn code(&self) -> &'static str {
        match self.kind {
            ParserErrorKind::Expecting { .. } => "PR001",
            ParserErrorKind::NonVariable => "PR002",
            ParserErrorKind::UnexpectedToken(_) => "PR003",
            ParserErrorKind::Lexical(LexicalErrorKind::Unexpected(_)) => "LX001",
            ParserErrorKind::Lexical(LexicalErrorKind::InvalidNumber(_)) => "LX002",
        }
    }
}

impl From<LexicalError> for ParserError {
    fn from(value: LexicalError) -> Self {
        Self {
            kind: value.kind.into(),
            location: value.location,
        }
    }
}
