/// The evaluator module reduces postfix sequences to a value.
///
/// The evaluator walks a postfix token sequence with a value stack, applying
/// each operator to the values below it. It is the last stage of the
/// pipeline.
///
/// # Responsibilities
/// - Applies binary operators, prefix signs and postfix percent.
/// - Reports division by zero, missing operands and leftover values.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw input and produces a flat sequence of numbers,
/// operators and parentheses. This is the first stage of the pipeline.
///
/// # Responsibilities
/// - Removes whitespace and scans numeric literals greedily.
/// - Decides from context whether `+` and `-` are signs or binary operators.
/// - Reports characters that belong to no token.
pub mod lexer;
/// The parser module reorders tokens into postfix form.
///
/// The parser runs the shunting-yard algorithm over the token sequence, so
/// that the evaluator never has to look at precedence or parentheses.
///
/// # Responsibilities
/// - Orders operators by precedence and associativity.
/// - Removes parentheses and checks that they balance.
pub mod parser;
