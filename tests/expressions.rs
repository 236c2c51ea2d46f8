use postfixer::{
    error::{ParseError, RuntimeError},
    evaluate,
    translator::{core::Translator, evaluator::evaluate_postfix},
};

fn assert_result(source: &str, expected: f64) {
    match evaluate(source) {
        Ok(result) => {
            assert!((result - expected).abs() < 1e-9,
                    "Expression '{source}' evaluated to {result}, expected {expected}");
        },
        Err(e) => panic!("Expression '{source}' failed: {e}"),
    }
}

fn assert_failure(source: &str) {
    if evaluate(source).is_ok() {
        panic!("Expression '{source}' succeeded but was expected to fail")
    }
}

fn assert_postfix(source: &str, expected: &str) {
    let mut translator =
        Translator::new(source).unwrap_or_else(|e| panic!("Expression '{source}' failed: {e}"));
    translator.calculate()
              .unwrap_or_else(|e| panic!("Expression '{source}' failed: {e}"));
    assert_eq!(translator.postfix_expression(), Some(expected));
}

fn assert_parse_error(source: &str, check: impl Fn(&ParseError) -> bool) {
    match evaluate(source) {
        Ok(result) => {
            panic!("Expression '{source}' evaluated to {result} but was expected to fail")
        },
        Err(e) => match e.downcast_ref::<ParseError>() {
            Some(parse_error) => {
                assert!(check(parse_error),
                        "Expression '{source}' reported the wrong diagnosis: {parse_error:?}");
            },
            None => panic!("Expression '{source}' failed outside of parsing: {e}"),
        },
    }
}

fn assert_runtime_error(source: &str, check: impl Fn(&RuntimeError) -> bool) {
    match evaluate(source) {
        Ok(result) => {
            panic!("Expression '{source}' evaluated to {result} but was expected to fail")
        },
        Err(e) => match e.downcast_ref::<RuntimeError>() {
            Some(runtime_error) => {
                assert!(check(runtime_error),
                        "Expression '{source}' reported the wrong diagnosis: {runtime_error:?}");
            },
            None => panic!("Expression '{source}' failed outside of evaluation: {e}"),
        },
    }
}

#[test]
fn basic_arithmetic() {
    assert_result("2 + 3", 5.0);
    assert_result("2 - 3", -1.0);
    assert_result("2 * 3", 6.0);
    assert_result("10 / 2", 5.0);
    assert_result("10 ^ 2", 100.0);
}

#[test]
fn operator_precedence() {
    assert_result("2 + 3 * 4", 14.0);
    assert_result("2 * 3 + 4", 10.0);
    assert_result("2 + 3 * 4 ^ 2", 50.0);
}

#[test]
fn parentheses_group_subexpressions() {
    assert_result("(2 + 3) * 4 - 1", 19.0);
    assert_result("(2 + 3) * (4 - 1)", 15.0);
    assert_result("((2 + 3))", 5.0);
}

#[test]
fn exponentiation_is_left_associative() {
    // The pop rule treats `^` like every other operator, so a chain of
    // exponents folds from the left: (2 ^ 3) ^ 2, not 2 ^ (3 ^ 2).
    assert_result("2 ^ 3 ^ 2", 64.0);
    assert_postfix("2 ^ 3 ^ 2", "2 3 ^ 2 ^");
}

#[test]
fn fractional_and_negative_results() {
    assert_result("4 ^ 0.5", 2.0);
    assert_result("1 - 2 - 3", -4.0);
    assert_result("7 / 2", 3.5);
}

#[test]
fn decimal_numbers() {
    assert_result("2.5 + 3.5 * 2", 9.5);
    assert_postfix("2.5 + 3.5 * 2", "2.5 3.5 2 * +");
}

#[test]
fn irregular_spacing_is_ignored() {
    assert_result(" 2  +  3 *  4 ", 14.0);
    assert_result("2+3*4", 14.0);
    assert_postfix("2  +  3 *  4", "2 3 4 * +");
}

#[test]
fn bare_number_is_a_valid_expression() {
    assert_result("5", 5.0);
    assert_result("2.5", 2.5);
    assert_postfix("5", "5");
}

#[test]
fn postfix_form_matches_reference() {
    assert_postfix("(2 + 3) * 4 - 1", "2 3 + 4 * 1 -");
}

#[test]
fn postfix_is_unset_until_calculated() {
    let translator = Translator::new("2 + 3").unwrap();
    assert_eq!(translator.postfix_expression(), None);
}

#[test]
fn calculate_is_idempotent() {
    let mut translator = Translator::new("(2 + 3) * 4 - 1").unwrap();
    let first = translator.calculate().unwrap();
    let second = translator.calculate().unwrap();
    assert_eq!(first, second);
    assert_eq!(first, 19.0);
}

#[test]
fn postfix_round_trip_reproduces_result() {
    let mut translator = Translator::new("2.5 + 3.5 * (2 - 1) ^ 2").unwrap();
    let result = translator.calculate().unwrap();
    let postfix = translator.postfix_expression().unwrap();
    assert_eq!(evaluate_postfix(postfix).unwrap(), result);
    assert!(!postfix.contains('('));
    assert!(!postfix.contains(')'));
}

#[test]
fn term_sequence_is_kept() {
    let translator = Translator::new("(2 + 3) * 4").unwrap();
    assert_eq!(translator.terms().len(), 7);
}

#[test]
fn rejects_malformed_expressions() {
    assert_failure("5 / 0");
    assert_failure("2 +* 3");
    assert_failure("(2 + 3");
    assert_failure("2 + 3)");
    assert_failure("(2 + 3 * (4 - 1");
    assert_failure("+");
    assert_failure("2 +");
    assert_failure("2 + 1.2.3");
    assert_failure("");
    assert_failure("* 2 3");
    assert_failure("2 3 + *");
    assert_failure("2 ++ 3");
    assert_failure(".2 + 3");
    assert_failure("2. + 3");
}

#[test]
fn lexer_reports_unexpected_characters() {
    assert_parse_error("2 $ 3",
                       |e| matches!(e, ParseError::UnexpectedCharacter { found } if found == "$"));
    assert_parse_error("2 + x", |e| matches!(e, ParseError::UnexpectedCharacter { .. }));
}

#[test]
fn validator_reports_specific_diagnoses() {
    assert_parse_error("", |e| matches!(e, ParseError::EmptyExpression));
    assert_parse_error("   ", |e| matches!(e, ParseError::EmptyExpression));
    assert_parse_error("()", |e| matches!(e, ParseError::NoOperand));
    assert_parse_error("2 (3 + 4)", |e| matches!(e, ParseError::MisplacedOpenParen));
    assert_parse_error("(2 + 3", |e| matches!(e, ParseError::UnbalancedParens));
    assert_parse_error("2 + 3)", |e| matches!(e, ParseError::UnbalancedParens));
    assert_parse_error("2 +* 3",
                       |e| matches!(e, ParseError::MisplacedOperator { operator: '*' }));
    assert_parse_error("* 2 3",
                       |e| matches!(e, ParseError::MisplacedOperator { operator: '*' }));
    assert_parse_error("2 +", |e| matches!(e, ParseError::MisplacedOperator { operator: '+' }));
    assert_parse_error("2 + 1.2.3",
                       |e| matches!(e, ParseError::InvalidNumberLiteral { literal } if literal == "1.2.3"));
    assert_parse_error(".2 + 3", |e| matches!(e, ParseError::InvalidNumberLiteral { .. }));
    assert_parse_error("2. + 3", |e| matches!(e, ParseError::InvalidNumberLiteral { .. }));
}

#[test]
fn division_by_zero_is_a_runtime_error() {
    assert_runtime_error("5 / 0", |e| matches!(e, RuntimeError::DivisionByZero));
    assert_runtime_error("1 / (2 - 2)", |e| matches!(e, RuntimeError::DivisionByZero));
}

#[test]
fn leading_operator_inside_parens_fails_on_the_stack() {
    // `(+ 2)` slips past the placement rules (the flag that tracks operators
    // is not reset by parentheses) and must fail during evaluation instead.
    assert_runtime_error("(+ 2)",
                         |e| matches!(e, RuntimeError::InsufficientOperands { operator: '+' }));
}

#[test]
fn evaluator_reports_stack_misuse() {
    assert!(matches!(evaluate_postfix("2 3"),
                     Err(RuntimeError::UnconsumedOperands { count: 2 })));
    assert!(matches!(evaluate_postfix("+"),
                     Err(RuntimeError::InsufficientOperands { operator: '+' })));
    assert!(matches!(evaluate_postfix("2 abc +"),
                     Err(RuntimeError::MalformedOperand { token }) if token == "abc"));
}
