use super::InterpreterError;
use crate::{
    environment::Scope,
    parser::{
        expression::{BinaryOperator, Expression},
        Parser,
    },
    value::{error::EvaluationError, Closure, Value},
};
use std::rc::Rc;
use tracing::{debug, trace};

/// Runs whole programs against a root scope that persists between runs.
#[derive(Debug, Default)]
pub struct TreeWalkInterpreter {
    scope: Scope,
}

impl TreeWalkInterpreter {
    pub fn new() -> Self {
        Self::with_scope(Scope::new())
    }

    pub fn with_scope(scope: Scope) -> Self {
        Self { scope }
    }

    pub fn get_scope(&self) -> &Scope {
        &self.scope
    }

    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn run(&self, source: &str) -> Result<Value, InterpreterError> {
        let program = Parser::new(source).parse_program()?;
        let value = evaluate(&program, &self.scope)?;
        debug!(%value, "program finished");
        Ok(value)
    }
}

pub fn evaluate(expression: &Expression, scope: &Scope) -> Result<Value, EvaluationError> {
    let result = match expression {
        Expression::Number(v) => Value::Number(*v),
        Expression::String(v) => Value::String(v.clone()),
        Expression::Boolean(v) => Value::Boolean(*v),
        Expression::Variable(name) => scope.get(name)?,
        Expression::Assignment { lhs, rhs } => evaluate_assignment(lhs, rhs, scope)?,
        Expression::Binary { operator, lhs, rhs } => {
            let lhs = evaluate(lhs, scope)?;
            let rhs = evaluate(rhs, scope)?;
            evaluate_binary(*operator, lhs, rhs)?
        }
        Expression::Condition {
            condition,
            then,
            otherwise,
        } => {
            let condition = evaluate(condition, scope)?;
            if !condition.is_false() {
                evaluate(then, scope)?
            } else if let Some(otherwise) = otherwise {
                evaluate(otherwise, scope)?
            } else {
                Value::Boolean(false)
            }
        }
        Expression::Lambda(lambda) => Value::Function(Rc::new(Closure {
            lambda: lambda.clone(),
            scope: scope.clone(),
        })),
        Expression::Call {
            function,
            arguments,
        } => {
            let callee = evaluate(function, scope)?;
            let arguments = arguments
                .iter()
                .map(|argument| evaluate(argument, scope))
                .collect::<Result<Vec<_>, _>>()?;
            match callee {
                Value::Function(closure) => invoke(&closure, arguments)?,
                callee => return Err(EvaluationError::InvalidCallee(callee)),
            }
        }
        Expression::Program(program) => {
            let mut last = Value::Undefined;
            for expression in program.iter() {
                last = evaluate(expression, scope)?;
            }
            last
        }
    };
    Ok(result)
}

/// Calls a closure. Parameters are bound in a fresh child of the captured
/// scope and the body is evaluated there. Missing arguments are `undefined`
/// and surplus arguments are dropped.
pub fn invoke(closure: &Closure, arguments: Vec<Value>) -> Result<Value, EvaluationError> {
    let lambda = &closure.lambda;
    trace!(
        parameters = lambda.parameters.len(),
        arguments = arguments.len(),
        "invoking closure"
    );

    let scope = closure.scope.nested();
    let mut arguments = arguments.into_iter();
    for parameter in lambda.parameters.iter() {
        scope.define(parameter, arguments.next().unwrap_or(Value::Undefined));
    }
    evaluate(&lambda.body, &scope)
}

fn evaluate_assignment(
    lhs: &Expression,
    rhs: &Expression,
    scope: &Scope,
) -> Result<Value, EvaluationError> {
    let Some(name) = lhs.get_l_value() else {
        return Err(EvaluationError::InvalidAssignment(lhs.to_string()));
    };
    let value = evaluate(rhs, scope)?;
    scope.assign(name, value.clone())?;
    Ok(value)
}

fn evaluate_binary(
    operator: BinaryOperator,
    lhs: Value,
    rhs: Value,
) -> Result<Value, EvaluationError> {
    type Operator = BinaryOperator;
    match operator {
        Operator::Add => lhs.add(&rhs),
        Operator::Subtract => lhs.subtract(&rhs),
        Operator::Multiply => lhs.multiply(&rhs),
        Operator::Divide => lhs.divide(&rhs),
        Operator::Modulo => lhs.modulo(&rhs),
        Operator::And => Ok(lhs.logical_and(rhs)),
        Operator::Or => Ok(lhs.logical_or(rhs)),
        Operator::LessThan => lhs.less_than(&rhs),
        Operator::LessThanEqual => lhs.less_than_or_equal(&rhs),
        Operator::GreaterThan => lhs.greater_than(&rhs),
        Operator::GreaterThanEqual => lhs.greater_than_or_equal(&rhs),
        Operator::EqualEqual => Ok(Value::Boolean(lhs.is_equal(&rhs))),
        Operator::BangEqual => Ok(Value::Boolean(lhs.is_not_equal(&rhs))),
    }
}
