use logos::Logos;

use crate::{
    error::ParseError,
    translator::{
        converter, evaluator,
        lexer::Term,
        validator::{self, ParseResult},
    },
};

/// Evaluates one infix arithmetic expression.
///
/// A `Translator` owns the term sequence produced from its source text and
/// lazily computes the postfix form and numeric result the first time a
/// calculation is requested.
///
/// ## Usage
///
/// A `Translator` is created once per expression. The term sequence is built
/// at construction and never mutated afterwards; `calculate()` fills the
/// postfix and result caches on its first successful run, and later calls
/// return the cached result without recomputation. A failed run commits
/// nothing, so it can simply be retried.
#[derive(Debug)]
pub struct Translator {
    /// The tokenized expression, in reading order.
    terms:   Vec<Term>,
    /// Space-separated postfix form, cached by a successful `calculate()`.
    postfix: Option<String>,
    /// Final value, cached by a successful `calculate()`.
    result:  Option<f64>,
}

impl Translator {
    /// Tokenizes an expression and wraps it in a new `Translator`.
    ///
    /// Whitespace separates terms but is otherwise ignored; digits and
    /// decimal points accumulate into number literals. No validation beyond
    /// character recognition happens here.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedCharacter` if the text contains a
    /// character that is not a digit, decimal point, operator, parenthesis or
    /// whitespace.
    ///
    /// # Examples
    /// ```
    /// use postfixer::translator::core::Translator;
    ///
    /// assert!(Translator::new("2 + 3").is_ok());
    /// assert!(Translator::new("2 $ 3").is_err());
    /// ```
    pub fn new(source: &str) -> ParseResult<Self> {
        let mut terms = Vec::new();
        let mut lexer = Term::lexer(source);

        while let Some(term) = lexer.next() {
            match term {
                Ok(term) => terms.push(term),
                Err(()) => {
                    return Err(ParseError::UnexpectedCharacter { found:
                                                                     lexer.slice().to_string() });
                },
            }
        }

        Ok(Self { terms,
                  postfix: None,
                  result: None })
    }

    /// Runs the full pipeline and returns the value of the expression.
    ///
    /// The term sequence is validated, converted to postfix form and
    /// evaluated, in that order, failing fast with the first violation found.
    /// Both caches are committed only when the whole pipeline succeeds, so a
    /// failed call leaves the instance exactly as it was.
    ///
    /// # Errors
    /// Propagates the `ParseError` or `RuntimeError` of the first stage that
    /// fails.
    ///
    /// # Examples
    /// ```
    /// use postfixer::translator::core::Translator;
    ///
    /// let mut translator = Translator::new("(2 + 3) * 4 - 1").unwrap();
    /// assert_eq!(translator.calculate().unwrap(), 19.0);
    /// assert_eq!(translator.postfix_expression(), Some("2 3 + 4 * 1 -"));
    /// ```
    pub fn calculate(&mut self) -> Result<f64, Box<dyn std::error::Error>> {
        if let Some(result) = self.result {
            return Ok(result);
        }

        validator::validate(&self.terms)?;
        let postfix = converter::to_postfix(&self.terms)?;
        let result = evaluator::evaluate_postfix(&postfix)?;

        self.postfix = Some(postfix);
        self.result = Some(result);

        Ok(result)
    }

    /// Returns the cached postfix form, or `None` if `calculate()` has not
    /// succeeded yet.
    #[must_use]
    pub fn postfix_expression(&self) -> Option<&str> {
        self.postfix.as_deref()
    }

    /// Returns the term sequence in reading order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Calculates the expression and reports the outcome on the console:
    /// `Result: <value>` on standard output, or `Error: <message>` on
    /// standard error. The error is discarded after reporting.
    pub fn print_result(&mut self) {
        match self.calculate() {
            Ok(result) => println!("Result: {result}"),
            Err(e) => eprintln!("Error: {e}"),
        }
    }
}
