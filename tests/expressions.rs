use infixcalc::{
    error::{Error, EvalError, ParseError},
    evaluate,
    interpreter::{evaluator::Operator, lexer::Token},
};
use logos::Logos;

fn assert_evaluates(expression: &str, expected: f64) {
    match evaluate(expression) {
        Ok(result) => assert_eq!(result, expected, "wrong result for {expression:?}"),
        Err(e) => panic!("Expression {expression:?} failed: {e}"),
    }
}

fn assert_fails(expression: &str) {
    if let Ok(result) = evaluate(expression) {
        panic!("Expression {expression:?} evaluated to {result} but was expected to fail");
    }
}

#[test]
fn known_expressions() {
    assert_evaluates("(1+2)-3", 0.0);
    assert_evaluates("(1+2)*3", 9.0);
    assert_evaluates("1/3", 1.0 / 3.0);
    assert_evaluates("1 + 2 * (3 + 4 / 2 - (1 + 2)) * 2 + 1", 10.0);
    assert_evaluates("5+(1*(2 + 3)+ 7) *3", 41.0);
}

#[test]
fn single_values() {
    assert_evaluates("5", 5.0);
    assert_evaluates("(5)", 5.0);
    assert_evaluates("((5))", 5.0);
    assert_evaluates("0.0", 0.0);
}

#[test]
fn operator_precedence() {
    assert_evaluates("1+2*3", 7.0);
    assert_evaluates("2*3+1", 7.0);
    assert_evaluates("10-4/2", 8.0);
    assert_evaluates("1+6/2-3", 1.0);
}

#[test]
fn equal_precedence_applies_left_to_right() {
    assert_evaluates("1-2-3", -4.0);
    assert_evaluates("8/4/2", 1.0);
    assert_evaluates("10-2+3", 11.0);
    assert_evaluates("2*6/4", 3.0);
}

#[test]
fn parentheses_group_subexpressions() {
    assert_evaluates("2*(3+4)", 14.0);
    assert_evaluates("3*(1)", 3.0);
    assert_evaluates("((1+2))*2", 6.0);
    assert_evaluates("(2+3)*(4-2)", 10.0);
}

#[test]
fn whitespace_is_insignificant() {
    assert_evaluates("  1 +  2  ", 3.0);
    assert_evaluates("1\t+\n2", 3.0);
    // Stripping happens before tokenization, so separated digit runs join
    // into a single literal.
    assert_evaluates("1 2", 12.0);
}

#[test]
fn number_literal_boundaries() {
    assert_evaluates("12.34", 12.34);
    assert_evaluates("1.", 1.0);
    assert_fails("1.2.3");
    assert_fails(".5");
}

#[test]
fn number_tokenization_consumes_maximal_literals() {
    let cases = [("123.123", 123.123, 7), ("15.15", 15.15, 5), ("0.0", 0.0, 3)];

    for (input, expected, length) in cases {
        let mut lexer = Token::lexer(input);
        assert_eq!(lexer.next(),
                   Some(Ok(Token::Number(expected))),
                   "wrong token for {input:?}");
        assert_eq!(lexer.span().end, length, "wrong consumed length for {input:?}");
    }
}

#[test]
fn operator_application() {
    let cases = [(35.35, -10.0, Operator::Add, 25.35),
                 (35.35, -10.0, Operator::Sub, 45.35),
                 (35.35, -10.0, Operator::Mul, -353.5),
                 (1.0, 3.0, Operator::Div, 1.0 / 3.0)];

    for (left, right, operator, expected) in cases {
        assert_eq!(operator.apply(left, right).unwrap(),
                   expected,
                   "wrong result for {left} {operator} {right}");
    }

    assert!(Operator::LParen.apply(1.0, 2.0).is_err());
    assert!(Operator::RParen.apply(1.0, 2.0).is_err());
}

#[test]
fn division_by_zero_follows_ieee754() {
    assert_evaluates("1/0", f64::INFINITY);
    assert_evaluates("1/(3-3)", f64::INFINITY);
    assert!(evaluate("0/0").unwrap().is_nan());
}

#[test]
fn malformed_expressions_fail() {
    assert_fails("");
    assert_fails("   ");
    assert_fails("(1+2");
    assert_fails("1+");
    assert_fails("+1");
    assert_fails("1+a");
    assert_fails("1)");
    assert_fails("()");
    assert_fails("1++2");
    assert_fails("(1)(2)");
}

#[test]
fn unary_minus_is_not_supported() {
    assert_fails("-5+3");
    assert_fails("5*-3");
}

#[test]
fn error_kinds_are_distinguishable() {
    assert!(matches!(evaluate("1+a"),
                     Err(Error::Parse(ParseError::InvalidSymbol { .. }))));
    assert!(matches!(evaluate("+1"),
                     Err(Error::Parse(ParseError::ExpectedNumber { .. }))));
    assert!(matches!(evaluate("(1)2"),
                     Err(Error::Parse(ParseError::InvalidOperator { .. }))));
    assert!(matches!(evaluate("1+"),
                     Err(Error::Eval(EvalError::MissingOperand { operator: '+' }))));
    assert!(matches!(evaluate("(1+2"),
                     Err(Error::Eval(EvalError::UnmatchedParenthesis { parenthesis: '(' }))));
    assert!(matches!(evaluate("1)"),
                     Err(Error::Eval(EvalError::UnmatchedParenthesis { parenthesis: ')' }))));
    assert!(matches!(evaluate(""), Err(Error::Eval(EvalError::EmptyExpression))));
}

#[test]
fn error_positions_are_absolute() {
    // Positions point into the whitespace-stripped input, counted from its
    // start rather than from the remaining suffix.
    match evaluate("1 + a") {
        Err(Error::Parse(ParseError::InvalidSymbol { symbol, position })) => {
            assert_eq!(symbol, "a");
            assert_eq!(position, 2);
        },
        other => panic!("Expected an invalid symbol error, got {other:?}"),
    }

    match evaluate("12.5 x") {
        Err(Error::Parse(ParseError::InvalidSymbol { symbol, position })) => {
            assert_eq!(symbol, "x");
            assert_eq!(position, 4);
        },
        other => panic!("Expected an invalid symbol error, got {other:?}"),
    }
}
