use thiserror::Error;

use crate::token::Operator;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum RuntimeError {
    /// An operator found fewer values on the stack than it consumes.
    #[error("Missing operand for '{operator}'.")]
    MissingOperand {
        /// The operator that could not be applied.
        operator: Operator,
    },
    /// Attempted division by an exact zero.
    #[error("Division by zero.")]
    DivideByZero,
    /// The sequence did not reduce to exactly one value.
    #[error("Malformed expression: evaluation left {depth} values instead of one.")]
    MalformedExpression {
        /// Number of values on the stack when evaluation stopped.
        depth: usize,
    },
}
