mod error;
mod tree;

pub use error::InterpreterError;
pub use tree::{evaluate, invoke, TreeWalkInterpreter};
