//! # postfixer
//!
//! postfixer is an infix arithmetic expression evaluator written in Rust. It
//! tokenizes an expression, checks the result for syntactic well-formedness,
//! rewrites it into postfix (Reverse Polish) form with the shunting-yard
//! algorithm, and evaluates that form with a value stack.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::translator::core::Translator;

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// validating or evaluating an expression. It standardizes error reporting
/// and carries the offending character or token where one exists.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, validator, converter,
///   evaluator).
/// - Formats every failure as a human-readable sentence.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the expression evaluation pipeline.
///
/// This module ties together lexing, validation, postfix conversion and
/// evaluation to turn a line of infix arithmetic into a double-precision
/// result. It exposes the `Translator` type and the individual pipeline
/// stages.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, validator, converter and
///   evaluator.
/// - Provides entry points for evaluating expressions and retrieving their
///   postfix form.
/// - Manages the flow of data and errors between stages.
pub mod translator;

/// Evaluates an infix arithmetic expression in one call.
///
/// This is the short path through the pipeline: the expression is tokenized,
/// validated, converted to postfix form and evaluated, and the value is
/// returned. Use [`Translator`] directly to also retrieve the postfix form or
/// to reuse the computed result.
///
/// # Errors
/// Returns an error if the expression contains an unrecognized character, is
/// not syntactically well-formed, or fails during evaluation (for example by
/// dividing by zero).
///
/// # Examples
/// ```
/// use postfixer::evaluate;
///
/// let result = evaluate("(2 + 3) * 4 - 1");
/// assert_eq!(result.unwrap(), 19.0);
///
/// // Dividing by zero is an error, not a value.
/// let result = evaluate("5 / 0");
/// assert!(result.is_err());
/// ```
pub fn evaluate(source: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let mut translator = Translator::new(source)?;
    translator.calculate()
}
