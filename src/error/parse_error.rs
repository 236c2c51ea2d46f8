#[derive(Debug)]
/// Represents all errors that can occur during tokenization or validation.
pub enum ParseError {
    /// Found a character that is not part of the expression grammar.
    UnexpectedCharacter {
        /// The offending character (or run of characters).
        found: String,
    },
    /// The expression contains no terms at all.
    EmptyExpression,
    /// An opening parenthesis appeared directly after an operand or a closing
    /// parenthesis.
    MisplacedOpenParen,
    /// A closing parenthesis appeared directly after an operator.
    MisplacedCloseParen,
    /// Parentheses do not pair up over the whole expression.
    UnbalancedParens,
    /// An operator appeared where no operator is allowed: after another
    /// operator, at the start or end of the expression, or directly before a
    /// closing parenthesis.
    MisplacedOperator {
        /// The offending operator symbol.
        operator: char,
    },
    /// A number literal is malformed, e.g. `1.2.3`, `.5` or `2.`.
    InvalidNumberLiteral {
        /// The offending literal text.
        literal: String,
    },
    /// The expression contains operators or parentheses but no operand.
    NoOperand,
    /// The final term of the expression is an operator.
    TrailingOperator {
        /// The offending operator symbol.
        operator: char,
    },
    /// A closing parenthesis had no matching opening parenthesis left on the
    /// conversion stack.
    BracketMismatch,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found } => {
                write!(f, "Unexpected character: {found}.")
            },

            Self::EmptyExpression => write!(f, "Expression is empty."),

            Self::MisplacedOpenParen => write!(f,
                                               "Opening parenthesis must follow an operator or another opening parenthesis."),

            Self::MisplacedCloseParen => {
                write!(f, "Closing parenthesis cannot follow an operator.")
            },

            Self::UnbalancedParens => write!(f, "Parentheses are unbalanced."),

            Self::MisplacedOperator { operator } => {
                write!(f, "Operator '{operator}' is misplaced.")
            },

            Self::InvalidNumberLiteral { literal } => {
                write!(f, "Invalid number: {literal}.")
            },

            Self::NoOperand => write!(f, "Expression contains no operands."),

            Self::TrailingOperator { operator } => {
                write!(f, "Expression cannot end with operator '{operator}'.")
            },

            Self::BracketMismatch => write!(f,
                                            "Closing parenthesis without a matching opening parenthesis."),
        }
    }
}

impl std::error::Error for ParseError {}
