use tracing::trace;

use crate::{error::ParseError, token::Token};

/// Result type used by the tokenizer and the postfix converter.
pub type ParseResult<T> = Result<T, ParseError>;

/// Reorders an infix token sequence into postfix (RPN) order.
///
/// This is the shunting-yard algorithm with a single operator stack. Numbers
/// go straight to the output. An incoming operator first emits every stacked
/// operator it yields to (see [`crate::token::Operator::yields_to`]) and is
/// then pushed. `(` is pushed as a barrier; `)` emits operators down to the
/// matching `(` and drops both parentheses.
///
/// The output never contains parentheses.
///
/// # Errors
/// Returns [`ParseError::MismatchedParentheses`] when a `)` has no matching
/// `(` or a `(` is still open at the end of the input.
///
/// # Example
/// ```
/// use reckon::{
///     interpreter::{lexer::tokenize, parser::to_postfix},
///     token::{Operator, Token},
/// };
///
/// let postfix = to_postfix(&tokenize("200+10%").unwrap()).unwrap();
/// assert_eq!(postfix,
///            vec![Token::Number(200.0),
///                 Token::Number(10.0),
///                 Token::Operator(Operator::Percent),
///                 Token::Operator(Operator::Add)]);
/// ```
pub fn to_postfix(tokens: &[Token]) -> ParseResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for &token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::Operator(incoming) => {
                while let Some(&Token::Operator(top)) = stack.last()
                      && incoming.yields_to(top)
                {
                    trace!(%top, %incoming, "emitting stacked operator");
                    stack.pop();
                    output.push(Token::Operator(top));
                }
                stack.push(token);
            },
            Token::LeftParen => stack.push(token),
            Token::RightParen => loop {
                match stack.pop() {
                    Some(Token::LeftParen) => break,
                    Some(stacked) => output.push(stacked),
                    None => return Err(ParseError::MismatchedParentheses),
                }
            },
        }
    }

    while let Some(stacked) = stack.pop() {
        if stacked.is_paren() {
            return Err(ParseError::MismatchedParentheses);
        }
        output.push(stacked);
    }

    Ok(output)
}
