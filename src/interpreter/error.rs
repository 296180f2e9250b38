use crate::{parser::ParserError, value::error::EvaluationError};
use thiserror::Error;

/// Failure of the source-to-value pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InterpreterError {
    #[error(transparent)]
    Parser(#[from] ParserError),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}
