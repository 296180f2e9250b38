use super::BinaryOperator;
use compact_str::CompactString;
use std::rc::Rc;

/// A lambda definition. Shared between the tree and every closure created from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Lambda {
    pub parameters: Vec<CompactString>,
    pub body: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    String(CompactString),
    Boolean(bool),
    Variable(CompactString),
    Lambda(Rc<Lambda>),
    Call {
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },
    Condition {
        condition: Box<Expression>,
        then: Box<Expression>,
        otherwise: Option<Box<Expression>>,
    },
    Assignment {
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },
    Binary {
        operator: BinaryOperator,
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },
    Program(Vec<Expression>),
}

impl Expression {
    pub fn variable(name: &str) -> Self {
        Self::Variable(name.into())
    }

    pub fn binary(operator: BinaryOperator, lhs: Expression, rhs: Expression) -> Self {
        Self::Binary {
            operator,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn assignment(lhs: Expression, rhs: Expression) -> Self {
        Self::Assignment {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn get_l_value(&self) -> Option<&CompactString> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }
}
