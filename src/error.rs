/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing an expression or
/// checking the term sequence for syntactic well-formedness. Parse errors
/// include unrecognized characters, misplaced operators and parentheses, and
/// malformed number literals — everything detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating the postfix
/// form of an expression, such as division by zero or a stack that is left
/// with too few or too many operands.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
