/// The converter module rewrites validated infix terms into postfix order.
///
/// The converter implements the shunting-yard algorithm: it walks the term
/// sequence once from left to right, moving operators through an auxiliary
/// stack so that the output no longer needs parentheses or precedence rules.
///
/// # Responsibilities
/// - Produces the space-separated postfix form of a term sequence.
/// - Orders operators by precedence, treating every operator as
///   left-associative.
/// - Reports bracket mismatches that surface while unwinding the stack.
pub mod converter;
/// The core module ties the pipeline stages together.
///
/// It defines the `Translator` type that owns a tokenized expression, runs
/// validation, conversion and evaluation on demand, and caches the postfix
/// form and numeric result of a successful run.
///
/// # Responsibilities
/// - Tokenizes raw text into the term sequence at construction.
/// - Drives the validate → convert → evaluate pipeline.
/// - Caches results so repeated calculations are free.
pub mod core;
/// The evaluator module computes the value of a postfix expression.
///
/// The evaluator walks the postfix token stream with a value stack: operands
/// are pushed, operators pop two values and push the result. It is the only
/// stage that turns literal text into numbers.
///
/// # Responsibilities
/// - Evaluates postfix token streams to a double-precision result.
/// - Applies the arithmetic operators, checking for division by zero.
/// - Reports stack underflow, leftover operands and unreadable tokens.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads raw text and produces terms: number literals, operators
/// and parentheses. Number literals keep their raw text so that later stages
/// can diagnose malformed literals themselves. This is the first stage of the
/// pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into `Term` values.
/// - Skips whitespace between terms.
/// - Surfaces unrecognized characters to the caller.
pub mod lexer;
/// The validator module checks a term sequence for well-formedness.
///
/// The validator inspects the full term sequence before any transformation is
/// attempted and fails fast with a specific diagnosis: misplaced operators or
/// parentheses, malformed number literals, unbalanced brackets, or an
/// expression with nothing to evaluate.
///
/// # Responsibilities
/// - Verifies operator and parenthesis placement rules.
/// - Verifies number literals (single decimal point, no leading/trailing dot).
/// - Guarantees that a passing sequence is safe to convert and evaluate.
pub mod validator;
