use smtcalc::{
    error::{ParseError, RuntimeError, SolveError},
    interpreter::{
        evaluator::core::{Context, OverflowMode},
        lexer::{TokenKind, tokenize},
        output::{Numeral, format_result},
        parser::{MAX_DEPTH, parse},
    },
    solve_line, solve_source,
};

fn solve(src: &str) -> Result<Option<i64>, SolveError> {
    solve_line(src, &Context::new())
}

fn assert_value(src: &str, expected: i64) {
    match solve(src) {
        Ok(Some(value)) => assert_eq!(value, expected, "wrong value for {src:?}"),
        Ok(None) => panic!("Formula {src:?} produced no value"),
        Err(e) => panic!("Formula {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> SolveError {
    match solve(src) {
        Err(e) => e,
        Ok(v) => panic!("Formula {src:?} succeeded with {v:?} but was expected to fail"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("(+ 2 3)", 5);
    assert_value("(* 4 5)", 20);
    assert_value("(- 5 3)", 2);
    assert_value("(- (* 2 3) 10)", -4);
    assert_value("(simplify (+ 1 (* 2 3)))", 7);
}

#[test]
fn subtraction_takes_left_operand_first() {
    assert_value("(- 3 10)", -7);
    assert_value("(- (- 10 4) 3)", 3);
    assert_value("(- 10 (- 4 3))", 9);
}

#[test]
fn simplify_is_a_pass_through() {
    for formula in ["(+ 2 3)", "(- 1 9)", "(* (- 2 5) (+ 1 1))", "42"] {
        let wrapped = format!("(simplify {formula})");
        assert_eq!(solve(&wrapped).unwrap(), solve(formula).unwrap(), "{formula}");
    }
    assert_value("(simplify (simplify (simplify 3)))", 3);
}

#[test]
fn minus_after_open_paren_is_an_operator() {
    assert_value("(- 5 3)", 2);
    assert!(matches!(assert_failure("-"), SolveError::Parse(_)));
}

#[test]
fn minus_elsewhere_starts_a_literal() {
    assert_value("(simplify -5)", -5);
    assert_value("(+ -2 -3)", -5);
    assert_value("(- -2 -3)", 1);

    let tokens = tokenize("(simplify -5)");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].text, "-5");
}

#[test]
fn minus_separated_from_paren_by_space_is_not_an_operator() {
    let tokens = tokenize("( - 3 4)");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].text, "-");

    let err = assert_failure("( - 3 4)");
    assert_eq!(err,
               SolveError::Runtime(RuntimeError::InvalidLiteral { literal: "-".to_string(),
                                                                  offset:  2, }));
}

#[test]
fn minus_at_start_of_line_is_an_operator() {
    let tokens = tokenize("- 7 2");
    assert_eq!(tokens[0].kind, TokenKind::Operator);
    assert_value("- 7 2", 5);
}

#[test]
fn lone_number_is_a_formula() {
    assert_value("5", 5);
    assert_value("(((12)))", 12);
}

#[test]
fn redundant_parentheses_are_transparent() {
    assert_value("((+ 1 2))", 3);
    assert_value("(+ ((1)) (((2))))", 3);
    assert_value("(simplify ((((* 2 (((3))))))))", 6);
}

#[test]
fn unbalanced_parentheses_are_accepted() {
    assert_value("(+ 1 2", 3);
    assert_value(")+ 1 2(", 3);
    assert_value("(simplify (+ 1 2)))))", 3);
    assert_value("+ 1 2", 3);
}

#[test]
fn trailing_tokens_are_ignored() {
    assert_value("(+ 1 2) 7", 3);
    assert_value("(simplify 4) (simplify 5)", 4);
}

#[test]
fn unknown_characters_are_dropped() {
    assert_value("(+ 1 2 # $)", 3);
    assert_value("(+ 1\u{e9} 2)", 3);
    assert_value("(* 2;3)", 6);
    assert_eq!(solve("#$%&").unwrap(), None);
}

#[test]
fn digit_runs_are_greedy() {
    let tokens = tokenize("(+ 123 4567)");
    let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
    assert_eq!(texts, ["(", "+", "123", "4567", ")"]);
    assert_value("(+ 123 4567)", 4690);
}

#[test]
fn letter_runs_are_keywords() {
    let tokens = tokenize("(simplify abc1)");
    let kinds: Vec<_> = tokens.iter().map(|t| (t.kind, t.text)).collect();
    assert_eq!(kinds,
               [(TokenKind::Paren, "("),
                (TokenKind::Keyword, "simplify"),
                (TokenKind::Keyword, "abc"),
                (TokenKind::Number, "1"),
                (TokenKind::Paren, ")")]);
}

#[test]
fn token_offsets_point_into_the_line() {
    let line = "(+  12 -3)";
    for token in tokenize(line) {
        assert_eq!(&line[token.offset..token.offset + token.text.len()], token.text);
    }
}

#[test]
fn blank_lines_produce_nothing() {
    assert_eq!(solve("").unwrap(), None);
    assert_eq!(solve("   \t ").unwrap(), None);
    assert!(tokenize(" \t\n").is_empty());
}

#[test]
fn missing_operand_is_a_parse_error() {
    let line = "(simplify (+ 1))";
    assert_eq!(assert_failure(line),
               SolveError::Parse(ParseError::UnexpectedEndOfInput { offset: line.len() }));
    assert!(matches!(assert_failure("(simplify)"),
                     SolveError::Parse(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(assert_failure("()"),
                     SolveError::Parse(ParseError::UnexpectedEndOfInput { .. })));
}

#[test]
fn unknown_keyword_is_unsupported() {
    let err = assert_failure("(simplify (assert 1))");
    assert_eq!(err,
               SolveError::Runtime(RuntimeError::UnsupportedOperator { operator: "assert".to_string(),
                                                                       offset:   11, }));
    assert_eq!(err.offset(), 11);
    assert!(matches!(assert_failure("(Simplify 1)"),
                     SolveError::Runtime(RuntimeError::UnsupportedOperator { .. })));
}

#[test]
fn literal_out_of_range_is_a_format_error() {
    assert_value("9223372036854775807", i64::MAX);
    assert_value("(simplify -9223372036854775808)", i64::MIN);
    assert!(matches!(assert_failure("(+ 1 9223372036854775808)"),
                     SolveError::Runtime(RuntimeError::InvalidLiteral { .. })));
}

#[test]
fn overflow_wraps_by_default() {
    assert_value("(+ 9223372036854775807 1)", i64::MIN);
    assert_value("(* 4611686018427387904 2)", i64::MIN);
    assert_value("(- -9223372036854775808 1)", i64::MAX);
}

#[test]
fn overflow_is_reported_in_checked_mode() {
    let context = Context::with_overflow(OverflowMode::Checked);
    let line = "(simplify (+ 9223372036854775807 1))";
    assert_eq!(solve_line(line, &context),
               Err(SolveError::Runtime(RuntimeError::Overflow { offset: 11 })));
    assert_eq!(solve_line("(simplify (+ 9223372036854775806 1))", &context),
               Ok(Some(i64::MAX)));
}

#[test]
fn evaluation_is_deterministic() {
    let line = "(simplify (* (- 3 8) (+ 2 -9)))";
    let first = solve(line).unwrap();
    for _ in 0..10 {
        assert_eq!(solve(line).unwrap(), first);
    }
    assert_eq!(first, Some(35));
}

#[test]
fn results_use_solver_notation() {
    assert_eq!(format_result(7), "7");
    assert_eq!(format_result(0), "0");
    assert_eq!(format_result(-7), "(- 7)");
    assert_eq!(Numeral(i64::MIN).to_string(), "(- 9223372036854775808)");
}

#[test]
fn tree_has_expected_shape() {
    let line = "(simplify (+ 1 (* 2 3)))";
    let tokens = tokenize(line);
    let tree = parse(&tokens, line.len()).unwrap();

    assert_eq!(tree.token().text, "simplify");
    assert!(tree.right().is_none());
    let sum = tree.left().unwrap();
    assert_eq!(sum.token().text, "+");
    assert_eq!(sum.left().unwrap().token().text, "1");
    assert_eq!(sum.right().unwrap().token().text, "*");
    assert_eq!(tree.size(), 6);
    assert_eq!(tree.depth(), 4);
    assert_eq!(tree.to_string(), line);
}

#[test]
fn failing_lines_do_not_affect_others() {
    let source = "(simplify (+ 2 3))\n(simplify (+ 1))\n\n(simplify (bogus 1))\r\n(simplify -5)\n";
    let outcomes = solve_source(source, &Context::new());

    let lines: Vec<_> = outcomes.iter().map(|o| o.line).collect();
    assert_eq!(lines, [1, 2, 4, 5]);
    assert_eq!(outcomes[0].result, Ok(5));
    assert!(outcomes[1].result.is_err());
    assert!(outcomes[2].result.is_err());
    assert_eq!(outcomes[3].result, Ok(-5));
}

fn nested_sums(levels: usize) -> String {
    format!("{}1{}", "(+ 1 ".repeat(levels), ")".repeat(levels))
}

#[test]
fn nesting_up_to_the_limit_evaluates() {
    let formula = nested_sums(MAX_DEPTH);
    assert_value(&formula, i64::try_from(MAX_DEPTH).unwrap() + 1);
}

#[test]
fn nesting_past_the_limit_is_a_parse_error() {
    let formula = nested_sums(MAX_DEPTH + 1);
    let offset = MAX_DEPTH * "(+ 1 ".len() + 1;
    assert_eq!(assert_failure(&formula),
               SolveError::Parse(ParseError::NestingTooDeep { limit: MAX_DEPTH,
                                                              offset }));
}

#[test]
fn overly_deep_line_does_not_affect_the_next() {
    let source = format!("{}\n(simplify (+ 2 3))\n", nested_sums(200_000));
    let outcomes = solve_source(&source, &Context::new());

    assert_eq!(outcomes.len(), 2);
    assert!(matches!(outcomes[0].result,
                     Err(SolveError::Parse(ParseError::NestingTooDeep { .. }))));
    assert_eq!(outcomes[1].line, 2);
    assert_eq!(outcomes[1].result, Ok(5));
}
