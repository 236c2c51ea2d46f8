use crate::{
    error::ParseError,
    translator::{lexer::Term, validator::ParseResult},
};

/// Rewrites a validated infix term sequence into postfix order.
///
/// This is the shunting-yard algorithm: number literals go straight to the
/// output, operators wait on a stack until an operator of lower precedence
/// arrives, and parentheses delimit stack regions. The pop rule uses `<=`
/// uniformly, so every operator is left-associative — `^` included, which
/// makes `2 ^ 3 ^ 2` convert as `(2 ^ 3) ^ 2`.
///
/// # Parameters
/// - `terms`: A term sequence that has passed validation.
///
/// # Returns
/// The postfix form as a space-separated string, without parentheses and
/// without leading or trailing separators.
///
/// # Errors
/// Returns `ParseError::BracketMismatch` if a closing parenthesis finds no
/// matching opening parenthesis on the stack, or an opening parenthesis is
/// left over at the end of input. Validated input never triggers either.
///
/// # Examples
/// ```
/// use logos::Logos;
/// use postfixer::translator::{converter::to_postfix, lexer::Term};
///
/// let terms: Vec<Term> = Term::lexer("(2 + 3) * 4").map(Result::unwrap).collect();
/// assert_eq!(to_postfix(&terms).unwrap(), "2 3 + 4 *");
/// ```
pub fn to_postfix(terms: &[Term]) -> ParseResult<String> {
    let mut output: Vec<String> = Vec::new();
    let mut stack: Vec<Term> = Vec::new();

    for term in terms {
        match term {
            Term::Number(literal) => output.push(literal.clone()),

            Term::LParen => stack.push(Term::LParen),

            Term::RParen => loop {
                match stack.pop() {
                    Some(Term::LParen) => break,
                    Some(top) => output.push(top.to_string()),
                    None => return Err(ParseError::BracketMismatch),
                }
            },

            Term::Operator(op) => {
                while let Some(Term::Operator(top)) = stack.last() {
                    if op.precedence() > top.precedence() {
                        break;
                    }
                    output.push(top.to_string());
                    stack.pop();
                }
                stack.push(Term::Operator(*op));
            },
        }
    }

    while let Some(top) = stack.pop() {
        if top == Term::LParen {
            return Err(ParseError::BracketMismatch);
        }
        output.push(top.to_string());
    }

    Ok(output.join(" "))
}
