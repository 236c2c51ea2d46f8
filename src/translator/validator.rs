use crate::{error::ParseError, translator::lexer::Term};

pub type ParseResult<T> = Result<T, ParseError>;

/// Checks a term sequence for syntactic well-formedness.
///
/// The sequence is scanned once from left to right and the first violation
/// found wins, so multiply-invalid input always reports the earliest
/// diagnosis. A sequence that passes is safe to hand to the converter.
///
/// The scan tracks a running open-parenthesis count and whether the previous
/// operand-or-operator term was an operator. Parentheses do not reset that
/// flag, so an operator reaching across a bracket (as in `2 + (* 3)`) is
/// still rejected.
///
/// # Parameters
/// - `terms`: The tokenized expression, in reading order.
///
/// # Returns
/// `Ok(())` if the sequence is well-formed.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the sequence is empty, or contains no operand at all,
/// - a parenthesis or operator appears in a forbidden position,
/// - parentheses do not balance,
/// - a number literal is malformed.
pub fn validate(terms: &[Term]) -> ParseResult<()> {
    if terms.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut open_parens = 0_i32;
    let mut last_was_operator = false;
    let mut has_operand = false;

    for (i, term) in terms.iter().enumerate() {
        match term {
            Term::LParen => {
                open_parens += 1;
                if i > 0 && !matches!(terms[i - 1], Term::Operator(_) | Term::LParen) {
                    return Err(ParseError::MisplacedOpenParen);
                }
            },

            Term::RParen => {
                open_parens -= 1;
                if open_parens < 0 {
                    return Err(ParseError::UnbalancedParens);
                }
                if i > 0 && matches!(terms[i - 1], Term::Operator(_)) {
                    return Err(ParseError::MisplacedCloseParen);
                }
            },

            Term::Operator(op) => {
                if last_was_operator
                   || i == 0
                   || i == terms.len() - 1
                   || matches!(terms.get(i + 1), Some(Term::RParen))
                {
                    return Err(ParseError::MisplacedOperator { operator: op.symbol() });
                }
                last_was_operator = true;
            },

            Term::Number(literal) => {
                has_operand = true;
                check_literal(literal)?;
                last_was_operator = false;
            },
        }
    }

    if open_parens != 0 {
        return Err(ParseError::UnbalancedParens);
    }

    if !has_operand {
        return Err(ParseError::NoOperand);
    }

    // Shadowed by the per-term operator rule; kept as a final invariant.
    if let Some(Term::Operator(op)) = terms.last() {
        return Err(ParseError::TrailingOperator { operator: op.symbol() });
    }

    Ok(())
}

/// Checks a number literal for well-formedness: digits and at most one
/// decimal point, which must sit between digits.
fn check_literal(literal: &str) -> ParseResult<()> {
    let mut dots = 0;

    for c in literal.chars() {
        if c == '.' {
            dots += 1;
        } else if !c.is_ascii_digit() {
            return Err(ParseError::InvalidNumberLiteral { literal: literal.to_string() });
        }
    }

    if dots > 1 || literal.starts_with('.') || literal.ends_with('.') {
        return Err(ParseError::InvalidNumberLiteral { literal: literal.to_string() });
    }

    Ok(())
}
