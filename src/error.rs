/// Tokenizing and reordering errors.
///
/// Defines the errors raised before any arithmetic happens: characters that
/// are not part of the expression alphabet and parentheses that do not
/// balance.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors raised while reducing a postfix sequence: operators
/// without enough operands, division by zero and sequences that do not reduce
/// to a single value.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Any failure of [`crate::evaluate_expression`].
///
/// Each pipeline stage fails with its own error type; this enum lets the
/// stages compose with `?` while keeping every distinction intact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Raised by the tokenizer or the postfix converter.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Raised by the postfix evaluator.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Flat classification of [`EngineError`], without payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`ParseError::InvalidCharacter`].
    InvalidCharacter,
    /// See [`ParseError::MismatchedParentheses`].
    MismatchedParentheses,
    /// See [`RuntimeError::MissingOperand`].
    MissingOperand,
    /// See [`RuntimeError::DivideByZero`].
    DivideByZero,
    /// See [`RuntimeError::MalformedExpression`].
    MalformedExpression,
}

impl EngineError {
    /// Returns the kind of failure, dropping any position or operator detail.
    ///
    /// # Example
    /// ```
    /// use reckon::{error::ErrorKind, evaluate_expression};
    ///
    /// let err = evaluate_expression("5/0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivideByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(ParseError::InvalidCharacter { .. }) => ErrorKind::InvalidCharacter,
            Self::Parse(ParseError::MismatchedParentheses) => ErrorKind::MismatchedParentheses,
            Self::Runtime(RuntimeError::MissingOperand { .. }) => ErrorKind::MissingOperand,
            Self::Runtime(RuntimeError::DivideByZero) => ErrorKind::DivideByZero,
            Self::Runtime(RuntimeError::MalformedExpression { .. }) => {
                ErrorKind::MalformedExpression
            },
        }
    }
}
