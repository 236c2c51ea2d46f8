use crate::{error::RuntimeError, translator::lexer::Operator};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a postfix expression string to a double-precision result.
///
/// The string is split on whitespace and processed left to right with a value
/// stack: operand tokens are parsed and pushed, operator tokens pop their
/// right operand first and their left operand second, then push the result of
/// the operation. A well-formed stream leaves exactly one value on the stack.
///
/// # Parameters
/// - `postfix`: Space-separated tokens in postfix order, as produced by the
///   converter.
///
/// # Returns
/// The final value of the expression.
///
/// # Errors
/// Returns a `RuntimeError` if:
/// - an operator finds fewer than two values on the stack,
/// - a division has a zero right operand,
/// - an operand token cannot be read as a number,
/// - more than one value remains after the last token.
///
/// # Examples
/// ```
/// use postfixer::translator::evaluator::evaluate_postfix;
///
/// let result = evaluate_postfix("2 3 + 4 *").unwrap();
/// assert_eq!(result, 20.0);
/// ```
pub fn evaluate_postfix(postfix: &str) -> EvalResult<f64> {
    let mut operands: Vec<f64> = Vec::new();

    for token in postfix.split_whitespace() {
        if let Some(op) = Operator::from_symbol(token) {
            let right = operands.pop()
                                .ok_or(RuntimeError::InsufficientOperands { operator:
                                                                                op.symbol() })?;
            let left = operands.pop()
                               .ok_or(RuntimeError::InsufficientOperands { operator:
                                                                               op.symbol() })?;
            operands.push(apply(op, left, right)?);
        } else {
            let value =
                token.parse::<f64>()
                     .map_err(|_| RuntimeError::MalformedOperand { token: token.to_string() })?;
            operands.push(value);
        }
    }

    match operands.as_slice() {
        [result] => Ok(*result),
        _ => Err(RuntimeError::UnconsumedOperands { count: operands.len() }),
    }
}

/// Applies a binary operator to two operands.
///
/// Division checks its right operand for zero explicitly; exponentiation uses
/// floating-point `powf`, so fractional and negative exponents follow the
/// usual power semantics.
///
/// # Parameters
/// - `op`: The operator to apply.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// An `EvalResult<f64>` containing the computed value.
///
/// # Example
/// ```
/// use postfixer::translator::{evaluator::apply, lexer::Operator};
///
/// let result = apply(Operator::Pow, 10.0, 2.0).unwrap();
/// assert_eq!(result, 100.0);
/// ```
pub fn apply(op: Operator, left: f64, right: f64) -> EvalResult<f64> {
    use Operator::{Add, Div, Mul, Pow, Sub};

    match op {
        Add => Ok(left + right),
        Sub => Ok(left - right),
        Mul => Ok(left * right),
        Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(left / right)
        },
        Pow => Ok(left.powf(right)),
    }
}
