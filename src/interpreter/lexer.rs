use logos::Logos;
use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::parser::ParseResult,
    token::{Operator, Token},
};

/// Represents a lexical unit before sign disambiguation.
///
/// The scanner has no notion of context, so `+` and `-` are kept as plain
/// symbols here. [`tokenize`] decides whether each of them is a binary
/// operator or a prefix sign.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum RawToken {
    /// Numeric literal tokens, such as `12`, `12.`, `12.3` or `.5`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &logos::Lexer<RawToken>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Converts an expression string into a sequence of tokens.
///
/// All whitespace is removed before scanning, so `1 2` reads as `12`. A `+`
/// or `-` becomes a prefix sign when it starts the expression or follows an
/// operator or `(`; everywhere else it is a binary operator.
///
/// # Errors
/// Returns [`ParseError::InvalidCharacter`] for the first character that no
/// token starts with.
///
/// # Example
/// ```
/// use reckon::{
///     interpreter::lexer::tokenize,
///     token::{Operator, Token},
/// };
///
/// let tokens = tokenize("4*-3").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(4.0),
///                 Token::Operator(Operator::Mul),
///                 Token::Operator(Operator::UnaryMinus),
///                 Token::Number(3.0)]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    let stripped: String = source.chars().filter(|c| !c.is_whitespace()).collect();
    let mut tokens = Vec::with_capacity(stripped.len());
    let mut lexer = RawToken::lexer(&stripped);

    while let Some(raw) = lexer.next() {
        let Ok(raw) = raw else {
            let character = lexer.slice().chars().next().unwrap_or_default();
            let position = stripped[..lexer.span().start].chars().count();
            return Err(ParseError::InvalidCharacter { character, position });
        };

        let sign_position = allows_sign(tokens.last());
        let token = match raw {
            RawToken::Number(value) => Token::Number(value),
            RawToken::Plus if sign_position => Token::Operator(Operator::UnaryPlus),
            RawToken::Plus => Token::Operator(Operator::Add),
            RawToken::Minus if sign_position => Token::Operator(Operator::UnaryMinus),
            RawToken::Minus => Token::Operator(Operator::Sub),
            RawToken::Star => Token::Operator(Operator::Mul),
            RawToken::Slash => Token::Operator(Operator::Div),
            RawToken::Percent => Token::Operator(Operator::Percent),
            RawToken::LParen => Token::LeftParen,
            RawToken::RParen => Token::RightParen,
        };

        trace!(%token, "scanned");
        tokens.push(token);
    }

    Ok(tokens)
}

/// A sign may appear at the start, after any operator (including `%`) and
/// after `(`.
const fn allows_sign(previous: Option<&Token>) -> bool {
    matches!(previous, None | Some(Token::Operator(_) | Token::LeftParen))
}
