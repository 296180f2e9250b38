pub mod error;
pub mod formatter;

use crate::{environment::Scope, parser::expression::Lambda};
use compact_str::CompactString;
use error::EvaluationError;
use std::{cmp::Ordering, rc::Rc};

/// A lambda paired with the scope it was defined in.
pub struct Closure {
    pub lambda: Rc<Lambda>,
    pub scope: Scope,
}

// The captured scope usually holds the closure itself, so it is left out.
impl std::fmt::Debug for Closure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Closure")
            .field("parameters", &self.lambda.parameters)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub enum Value {
    Number(f64),
    String(CompactString),
    Boolean(bool),
    Function(Rc<Closure>),
    Undefined,
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v}"),
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Function(closure) => {
                write!(f, "<lambda({})>", closure.lambda.parameters.join(", "))
            }
            Self::Undefined => write!(f, "undefined"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

// Logical operators
impl Value {
    /// Only `false` itself is falsy.
    pub fn is_false(&self) -> bool {
        matches!(self, Value::Boolean(false))
    }

    pub fn logical_and(self, other: Value) -> Value {
        if self.is_false() {
            Value::Boolean(false)
        } else {
            other
        }
    }

    pub fn logical_or(self, other: Value) -> Value {
        if self.is_false() {
            other
        } else {
            self
        }
    }
}

impl Value {
    fn numbers(&self, other: &Value) -> Result<(f64, f64), EvaluationError> {
        match (self, other) {
            (Value::Number(lhs), Value::Number(rhs)) => Ok((*lhs, *rhs)),
            (lhs, rhs) => Err(EvaluationError::NonNumerics(lhs.clone(), rhs.clone())),
        }
    }

    // Arithmetic + string concatenation
    pub fn add(&self, other: &Value) -> Result<Value, EvaluationError> {
        match (self, other) {
            (Value::Number(lhs), Value::Number(rhs)) => Ok(Value::Number(lhs + rhs)),
            (Value::String(lhs), Value::String(rhs)) => {
                let mut joined = lhs.clone();
                joined.push_str(rhs);
                Ok(Value::String(joined))
            }
            (lhs, rhs) => Err(EvaluationError::NonAddable(lhs.clone(), rhs.clone())),
        }
    }

    pub fn subtract(&self, other: &Value) -> Result<Value, EvaluationError> {
        let (lhs, rhs) = self.numbers(other)?;
        Ok(Value::Number(lhs - rhs))
    }

    pub fn multiply(&self, other: &Value) -> Result<Value, EvaluationError> {
        let (lhs, rhs) = self.numbers(other)?;
        Ok(Value::Number(lhs * rhs))
    }

    pub fn divide(&self, other: &Value) -> Result<Value, EvaluationError> {
        let (lhs, rhs) = self.numbers(other)?;
        if rhs == 0.0 {
            return Err(EvaluationError::DivideByZero);
        }
        Ok(Value::Number(lhs / rhs))
    }

    pub fn modulo(&self, other: &Value) -> Result<Value, EvaluationError> {
        let (lhs, rhs) = self.numbers(other)?;
        if rhs == 0.0 {
            return Err(EvaluationError::DivideByZero);
        }
        Ok(Value::Number(lhs % rhs))
    }

    // Comparison
    fn compare(&self, other: &Value) -> Result<Option<Ordering>, EvaluationError> {
        match (self, other) {
            (Value::Number(lhs), Value::Number(rhs)) => Ok(lhs.partial_cmp(rhs)),
            (Value::String(lhs), Value::String(rhs)) => Ok(Some(lhs.cmp(rhs))),
            (Value::Boolean(lhs), Value::Boolean(rhs)) => Ok(Some(lhs.cmp(rhs))),
            (lhs, rhs) => Err(EvaluationError::NonComparable(lhs.clone(), rhs.clone())),
        }
    }

    pub fn less_than(&self, other: &Value) -> Result<Value, EvaluationError> {
        let ordering = self.compare(other)?;
        Ok(Value::Boolean(ordering == Some(Ordering::Less)))
    }

    pub fn less_than_or_equal(&self, other: &Value) -> Result<Value, EvaluationError> {
        let ordering = self.compare(other)?;
        Ok(Value::Boolean(matches!(
            ordering,
            Some(Ordering::Less | Ordering::Equal)
        )))
    }

    pub fn greater_than(&self, other: &Value) -> Result<Value, EvaluationError> {
        let ordering = self.compare(other)?;
        Ok(Value::Boolean(ordering == Some(Ordering::Greater)))
    }

    pub fn greater_than_or_equal(&self, other: &Value) -> Result<Value, EvaluationError> {
        let ordering = self.compare(other)?;
        Ok(Value::Boolean(matches!(
            ordering,
            Some(Ordering::Greater | Ordering::Equal)
        )))
    }

    // Equality
    pub fn is_equal(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(lhs), Value::Number(rhs)) => lhs == rhs,
            (Value::String(lhs), Value::String(rhs)) => lhs == rhs,
            (Value::Boolean(lhs), Value::Boolean(rhs)) => lhs == rhs,
            (Value::Function(lhs), Value::Function(rhs)) => Rc::ptr_eq(lhs, rhs),
            (Value::Undefined, Value::Undefined) => true,
            _ => false,
        }
    }

    pub fn is_not_equal(&self, other: &Value) -> bool {
        !self.is_equal(other)
    }
}
