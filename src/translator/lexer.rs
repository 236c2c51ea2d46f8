use logos::Logos;

/// Represents a single term of an arithmetic expression.
/// A term is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized terms.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Term {
    /// Number literal terms such as `42` or `2.5`. The raw text is kept
    /// as-is; the validator diagnoses malformed literals like `1.2.3` or
    /// `.5`, so the lexer accepts any run of digits and dots.
    #[regex(r"[0-9.]+", |lex| lex.slice().to_string())]
    Number(String),
    /// Operator terms: `+`, `-`, `*`, `/` and `^`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("^", |_| Operator::Pow)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(literal) => write!(f, "{literal}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Represents a binary operator.
///
/// Every operator is left-associative, exponentiation included, so
/// `2 ^ 3 ^ 2` evaluates as `(2 ^ 3) ^ 2`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl Operator {
    /// Returns the precedence rank used by the shunting-yard conversion.
    /// Higher ranks bind tighter.
    ///
    /// # Examples
    /// ```
    /// use postfixer::translator::lexer::Operator;
    ///
    /// assert!(Operator::Pow.precedence() > Operator::Mul.precedence());
    /// assert_eq!(Operator::Add.precedence(), Operator::Sub.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    /// Returns the single-character symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Maps a postfix token back to its operator.
    ///
    /// Used when re-reading a postfix stream, where operators travel as plain
    /// text between the converter and the evaluator.
    ///
    /// # Parameters
    /// - `token`: A whitespace-delimited postfix token.
    ///
    /// # Returns
    /// - `Some(Operator)` if the token is exactly one operator symbol.
    /// - `None` otherwise; such tokens are treated as operands.
    #[must_use]
    pub fn from_symbol(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "^" => Some(Self::Pow),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
