/// Represents a single token of an arithmetic expression.
///
/// Tokens are produced left to right by the tokenizer and consumed by the
/// postfix converter. A postfix sequence only ever contains `Number` and
/// `Operator` tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal such as `12`, `12.`, `12.3` or `.5`.
    Number(f64),
    /// A binary, unary or postfix operator.
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl Token {
    /// Returns `true` for `(` and `)`.
    #[must_use]
    pub const fn is_paren(&self) -> bool {
        matches!(self, Self::LeftParen | Self::RightParen)
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

/// Represents an operator kind.
///
/// `+` and `-` appear twice: once as binary operators and once as prefix
/// signs. Which one a character becomes is decided by the tokenizer from the
/// token that precedes it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`a + b`)
    Add,
    /// Subtraction (`a - b`)
    Sub,
    /// Multiplication (`a * b`)
    Mul,
    /// Division (`a / b`)
    Div,
    /// Prefix plus (`+a`)
    UnaryPlus,
    /// Prefix minus (`-a`)
    UnaryMinus,
    /// Postfix percent (`a%`), dividing its operand by 100.
    Percent,
}

/// Direction in which operators of equal precedence group.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `- - a` groups as `-(-a)`.
    Right,
}

impl Operator {
    /// Binding strength of the operator. Higher binds tighter.
    ///
    /// | operator            | precedence |
    /// |---------------------|------------|
    /// | `%`                 | 4          |
    /// | unary `+`, `-`      | 3          |
    /// | `*`, `/`            | 2          |
    /// | binary `+`, `-`     | 1          |
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Percent => 4,
            Self::UnaryPlus | Self::UnaryMinus => 3,
            Self::Mul | Self::Div => 2,
            Self::Add | Self::Sub => 1,
        }
    }

    /// Only the prefix signs are right-associative.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::UnaryPlus | Self::UnaryMinus => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Number of operands taken from the evaluation stack.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::UnaryPlus | Self::UnaryMinus | Self::Percent => 1,
            Self::Add | Self::Sub | Self::Mul | Self::Div => 2,
        }
    }

    /// Returns `true` if `top`, sitting on the operator stack, has to be
    /// emitted before `self` is pushed.
    ///
    /// # Example
    /// ```
    /// use reckon::token::Operator;
    ///
    /// // `2 * 3 + 4`: the pending `*` is emitted before `+` is pushed.
    /// assert!(Operator::Add.yields_to(Operator::Mul));
    /// // `--5`: the second sign stacks on top of the first.
    /// assert!(!Operator::UnaryMinus.yields_to(Operator::UnaryMinus));
    /// ```
    #[must_use]
    pub const fn yields_to(self, top: Self) -> bool {
        match self.associativity() {
            Associativity::Left => self.precedence() <= top.precedence(),
            Associativity::Right => self.precedence() < top.precedence(),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add | Self::UnaryPlus => "+",
            Self::Sub | Self::UnaryMinus => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Percent => "%",
        };
        write!(f, "{symbol}")
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
        }
    }
}
