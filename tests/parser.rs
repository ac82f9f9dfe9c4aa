use tally::{interpreter::environment::Environment, Parser, SyntaxError};

fn parse_to_string(input: &str) -> String {
    let env = Environment::new();
    let parser = Parser::new();
    parser.parse(&env, input)
          .unwrap_or_else(|e| panic!("unexpected error for `{input}`: {e}"))
          .stringify(0)
}

fn parse_error(input: &str) -> SyntaxError {
    let env = Environment::new();
    let parser = Parser::new();
    parser.parse(&env, input)
          .expect_err(&format!("`{input}` parsed but was expected to fail"))
}

#[test]
fn parses_units() {
    let tests = [
        ("number", "1", "(num 1)"),
        ("long number", "78934430289340", "(num 78934430289340)"),
        ("fractional number", "2.50", "(num 2.5)"),
        ("identifier", "a", "(id a)"),
        ("long identifier", "jfkdlsa$%%@$@#", "(id jfkdlsa$%%@$@#)"),
        ("empty group", "()", "(group empty)"),
        ("nested empty group", "((()))", "(group\n  (group\n    (group empty)))"),
        ("array literal", "1 2 3", "(array\n  (num 1)\n  (num 2)\n  (num 3))"),
    ];

    for (label, input, output) in tests {
        assert_eq!(parse_to_string(input), output, "invalid ast for {label}");
    }
}

#[test]
fn parses_applications_and_operators() {
    let tests = [
        ("prefix expression for number", "abs 1", "(app abs\n  (num 1))"),
        ("prefix expression for identifier", "abs abc", "(app abs\n  (id abc))"),
        ("infix expression", "1 + 2", "(op +\n  (num 1)\n  (num 2))"),
        ("infix with an identifier and a number", "a + 1", "(op +\n  (id a)\n  (num 1))"),
        ("infix with a number and an identifier", "1 + a", "(op +\n  (num 1)\n  (id a))"),
        ("infix with two identifiers", "a + b", "(op +\n  (id a)\n  (id b))"),
        ("assignment", "x := 3", "(op :=\n  (id x)\n  (num 3))"),
        ("grouped infix", "(1 + 2)", "(group\n  (op +\n    (num 1)\n    (num 2)))"),
        ("application argument consumes the operator",
         "abs 1 + 2",
         "(app abs\n  (op +\n    (num 1)\n    (num 2)))"),
    ];

    for (label, input, output) in tests {
        assert_eq!(parse_to_string(input), output, "invalid ast for {label}");
    }
}

#[test]
fn operators_are_right_associative() {
    assert_eq!(parse_to_string("1 + 2 + 3 + 4 + 5"),
               "(op +\n  (num 1)\n  (op +\n    (num 2)\n    (op +\n      (num 3)\n      (op +\n        (num 4)\n        (num 5)))))");
}

#[test]
fn empty_input_is_an_error() {
    assert_eq!(parse_error(""), SyntaxError::UnexpectedEndOfInput);
    assert_eq!(parse_error("1 +"), SyntaxError::UnexpectedEndOfInput);
}

#[test]
fn unbalanced_parens_are_errors() {
    assert_eq!(parse_error("(1"),
               SyntaxError::UnexpectedToken { expected: "a closing paren".to_string(),
                                              found:    "end of input".to_string(), });
    assert!(matches!(parse_error(")"), SyntaxError::UnexpectedToken { .. }));
}

#[test]
fn malformed_literals_are_reported_with_their_text() {
    // Without spaces the lexer folds the whole run into one numeric token.
    match parse_error("1+2") {
        SyntaxError::MalformedNumber { literal, .. } => assert_eq!(literal, "1+2"),
        other => panic!("expected a malformed number error, got {other:?}"),
    }
}
