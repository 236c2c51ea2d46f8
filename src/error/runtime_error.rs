#[derive(Debug)]
/// Represents all errors that can occur while evaluating a postfix expression.
pub enum RuntimeError {
    /// An operator was applied with fewer than two values on the stack.
    InsufficientOperands {
        /// The operator that could not be applied.
        operator: char,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// A postfix token is neither an operator nor a readable number.
    MalformedOperand {
        /// The offending token.
        token: String,
    },
    /// Evaluation finished with more than one value left on the stack.
    UnconsumedOperands {
        /// How many values were left over.
        count: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientOperands { operator } => write!(f,
                                                              "Operator '{operator}' is missing operands."),

            Self::DivisionByZero => write!(f, "Division by zero."),

            Self::MalformedOperand { token } => write!(f, "Malformed operand: {token}."),

            Self::UnconsumedOperands { count } => write!(f,
                                                         "Evaluation left {count} values on the stack instead of one."),
        }
    }
}

impl std::error::Error for RuntimeError {}
