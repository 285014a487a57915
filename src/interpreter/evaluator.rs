use tracing::trace;

use crate::{
    error::RuntimeError,
    token::{Operator, Token},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Reduces a postfix sequence to a single value.
///
/// Numbers are pushed onto a value stack. `%` and the prefix signs replace
/// the top value; binary operators pop the right operand, then the left one,
/// and push the result.
///
/// # Errors
/// - [`RuntimeError::MissingOperand`] if an operator finds too few values.
/// - [`RuntimeError::DivideByZero`] if a divisor is exactly zero.
/// - [`RuntimeError::MalformedExpression`] if the stack does not end with
///   exactly one value, or if the sequence contains a parenthesis.
///
/// # Example
/// ```
/// use reckon::{
///     interpreter::evaluator::evaluate,
///     token::{Operator, Token},
/// };
///
/// let postfix = [Token::Number(2.0),
///                Token::Number(3.0),
///                Token::Number(4.0),
///                Token::Operator(Operator::Mul),
///                Token::Operator(Operator::Add)];
/// assert_eq!(evaluate(&postfix).unwrap(), 14.0);
/// ```
pub fn evaluate(postfix: &[Token]) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match *token {
            Token::Number(value) => stack.push(value),
            Token::Operator(op) if op.arity() == 1 => {
                let operand = stack.pop()
                                   .ok_or(RuntimeError::MissingOperand { operator: op })?;
                stack.push(eval_unary(op, operand));
            },
            Token::Operator(op) => {
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    return Err(RuntimeError::MissingOperand { operator: op });
                };
                stack.push(eval_binary(op, left, right)?);
            },
            Token::LeftParen | Token::RightParen => {
                return Err(RuntimeError::MalformedExpression { depth: stack.len() });
            },
        }
        trace!(%token, ?stack, "applied");
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(RuntimeError::MalformedExpression { depth: stack.len() }),
    }
}

/// Applies `%` or a prefix sign to a single operand.
fn eval_unary(op: Operator, operand: f64) -> f64 {
    match op {
        Operator::Percent => operand / 100.0,
        Operator::UnaryMinus => -operand,
        _ => operand,
    }
}

/// Applies a binary operator. The divisor check is an exact comparison
/// against zero, so `-0.0` is rejected too.
#[allow(clippy::float_cmp)]
fn eval_binary(op: Operator, left: f64, right: f64) -> EvalResult<f64> {
    Ok(match op {
        Operator::Add => left + right,
        Operator::Sub => left - right,
        Operator::Mul => left * right,
        Operator::Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivideByZero);
            }
            left / right
        },
        Operator::UnaryPlus | Operator::UnaryMinus | Operator::Percent => unreachable!(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Operator::{Add, Div, Mul, Percent, Sub, UnaryMinus, UnaryPlus};

    fn n(value: f64) -> Token {
        Token::Number(value)
    }

    #[test]
    fn binary_operand_order() {
        assert_eq!(evaluate(&[n(7.0), n(2.0), Sub.into()]), Ok(5.0));
        assert_eq!(evaluate(&[n(8.0), n(2.0), Div.into()]), Ok(4.0));
        assert_eq!(evaluate(&[n(1.5), n(2.0), Mul.into()]), Ok(3.0));
        assert_eq!(evaluate(&[n(1.5), n(2.0), Add.into()]), Ok(3.5));
    }

    #[test]
    fn unary_operators() {
        assert_eq!(evaluate(&[n(50.0), Percent.into()]), Ok(0.5));
        assert_eq!(evaluate(&[n(5.0), UnaryMinus.into()]), Ok(-5.0));
        assert_eq!(evaluate(&[n(5.0), UnaryPlus.into()]), Ok(5.0));
        assert_eq!(evaluate(&[n(5.0), UnaryMinus.into(), UnaryMinus.into()]), Ok(5.0));
    }

    #[test]
    fn division_by_exact_zero() {
        assert_eq!(evaluate(&[n(5.0), n(0.0), Div.into()]), Err(RuntimeError::DivideByZero));
        assert_eq!(evaluate(&[n(5.0), n(-0.0), Div.into()]), Err(RuntimeError::DivideByZero));
        assert_eq!(evaluate(&[n(0.0), n(5.0), Div.into()]), Ok(0.0));
        assert_eq!(evaluate(&[n(1.0), n(1e-300), Div.into()]), Ok(1e300));
    }

    #[test]
    fn missing_operands() {
        assert_eq!(evaluate(&[Percent.into()]),
                   Err(RuntimeError::MissingOperand { operator: Percent }));
        assert_eq!(evaluate(&[UnaryMinus.into()]),
                   Err(RuntimeError::MissingOperand { operator: UnaryMinus }));
        assert_eq!(evaluate(&[n(1.0), Add.into()]),
                   Err(RuntimeError::MissingOperand { operator: Add }));
    }

    #[test]
    fn final_stack_must_hold_one_value() {
        assert_eq!(evaluate(&[]), Err(RuntimeError::MalformedExpression { depth: 0 }));
        assert_eq!(evaluate(&[n(1.0), n(2.0)]),
                   Err(RuntimeError::MalformedExpression { depth: 2 }));
    }

    #[test]
    fn parentheses_are_rejected() {
        assert_eq!(evaluate(&[n(1.0), Token::LeftParen]),
                   Err(RuntimeError::MalformedExpression { depth: 1 }));
    }
}
