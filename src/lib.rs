//! # reckon
//!
//! reckon is the arithmetic engine of a pocket calculator. It turns the text
//! typed on the keypad, such as `200+10%` or `4*-3`, into a number, and the
//! number back into display text.
//!
//! The engine is a straight pipeline: [`tokenize`] scans the input,
//! [`to_postfix`] reorders the tokens with the shunting-yard algorithm and
//! [`evaluate`] reduces the postfix sequence on a value stack.
//! [`evaluate_expression`] runs all three. The [`keypad`] module holds the
//! editing state that sits in front of the engine.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

pub use crate::{
    error::EngineError,
    interpreter::{evaluator::evaluate, lexer::tokenize, parser::to_postfix},
    util::format::format_result,
};

/// Provides unified error types for tokenizing, conversion and evaluation.
///
/// This module defines every failure the engine can report. Each stage has
/// its own error enum; [`EngineError`] wraps them for the end-to-end entry
/// point.
///
/// # Responsibilities
/// - Defines one variant per failure kind, with position or operator detail.
/// - Implements `Display` and `std::error::Error` for all of them.
pub mod error;
/// Runs the expression pipeline.
///
/// This module ties together the lexer, the postfix converter and the
/// evaluator. Each stage consumes the previous one's output and owns nothing
/// beyond a single call.
///
/// # Responsibilities
/// - Converts text into tokens, tokens into postfix order, and postfix order
///   into a value.
/// - Fails fast with the first error of any stage.
pub mod interpreter;
/// Editing state of the calculator display.
///
/// This module models the keypad in front of the engine: appending digits,
/// guarding decimal points, replacing trailing operators, toggling signs and
/// evaluating the buffer.
pub mod keypad;
/// Defines the token vocabulary shared by all stages.
///
/// This module declares the `Token` enum and the operator table: precedence,
/// associativity and arity of every operator.
pub mod token;
/// General utilities.
///
/// Currently holds the formatter that renders evaluation results.
pub mod util;

/// Evaluates an arithmetic expression.
///
/// The expression may contain decimal numbers, `+ - * /`, prefix signs,
/// postfix `%` and parentheses. Whitespace is ignored.
///
/// # Errors
/// Returns the first error raised by the tokenizer, the postfix converter or
/// the evaluator. Empty input is a [`error::RuntimeError::MalformedExpression`].
///
/// # Examples
/// ```
/// use reckon::evaluate_expression;
///
/// assert_eq!(evaluate_expression("2+3*4").unwrap(), 14.0);
/// assert_eq!(evaluate_expression("(2+3)*4").unwrap(), 20.0);
/// assert_eq!(evaluate_expression("--5").unwrap(), 5.0);
///
/// // `%` applies to the operand right before it.
/// assert_eq!(evaluate_expression("200+10%").unwrap(), 200.1);
///
/// assert!(evaluate_expression("5/0").is_err());
/// ```
pub fn evaluate_expression(source: &str) -> Result<f64, EngineError> {
    let tokens = tokenize(source)?;
    debug!(?tokens, "tokenized");

    let postfix = to_postfix(&tokens)?;
    debug!(?postfix, "converted to postfix");

    let value = evaluate(&postfix)?;
    debug!(value, "evaluated");

    Ok(value)
}
