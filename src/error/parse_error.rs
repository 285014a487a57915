use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during tokenizing or postfix
/// conversion.
pub enum ParseError {
    /// Found a character that is not a digit, `.`, an operator, whitespace or
    /// a parenthesis. A lone `.` is reported here as well.
    #[error("Invalid character '{character}' at position {position}.")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Character offset in the input once whitespace is removed.
        position:  usize,
    },
    /// A `)` without a matching `(`, or a `(` that is never closed.
    #[error("Mismatched parentheses.")]
    MismatchedParentheses,
}
