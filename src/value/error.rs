use super::Value;
use compact_str::CompactString;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvaluationError {
    #[error("Undefined variable '{0}'")]
    UndefinedVariable(CompactString),
    #[error("Divide by zero")]
    DivideByZero,
    #[error("Can't assign to {0}")]
    InvalidAssignment(String),
    #[error("Expected two numbers but got {0} and {1}")]
    NonNumerics(Value, Value),
    #[error("Expected two numbers or two strings but got {0} and {1}")]
    NonAddable(Value, Value),
    #[error("Can't compare {0} with {1}")]
    NonComparable(Value, Value),
    #[error("{0} is not a function")]
    InvalidCallee(Value),
}

impl EvaluationError {
    pub fn code(&self) -> &'static str {
        match self {
            EvaluationError::UndefinedVariable(_) => "RT001",
            EvaluationError::DivideByZero => "RT002",
            EvaluationError::InvalidAssignment(_) => "RT003",
            EvaluationError::NonNumerics(_, _) => "RT004",
            EvaluationError::NonAddable(_, _) => "RT005",
            EvaluationError::NonComparable(_, _) => "RT006",
            EvaluationError::InvalidCallee(_) => "RT007",
        }
    }
}
