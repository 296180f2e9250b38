mod operator;
mod tree;

pub use operator::{BinaryOperator, InfixOperator};
pub use tree::{Expression, Lambda};
