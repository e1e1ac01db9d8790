use reckon::{
    ast::AstNode,
    error::{BuildError, Error, LexError, ValidationError, ValidationErrorKind},
    evaluate, evaluate_line,
    expr::Operator,
    input::{
        buffer::InputBuffer,
        symbol::{Symbol, symbols_from_str},
    },
    interpreter::{builder::build, lexer::lex, validator::validate},
};

fn assert_result(line: &str, expected: f64) {
    match evaluate_line(line) {
        Ok(value) => {
            assert!((value - expected).abs() < 1e-9,
                    "`{line}` evaluated to {value}, expected {expected}");
        },
        Err(e) => panic!("`{line}` failed: {e}"),
    }
}

fn report_for(line: &str) -> ValidationError {
    match evaluate_line(line) {
        Ok(value) => panic!("`{line}` evaluated to {value} but was expected to fail"),
        Err(Error::Validation(report)) => report,
        Err(e) => panic!("`{line}` failed outside validation: {e}"),
    }
}

fn symbols(line: &str) -> Vec<Symbol> {
    symbols_from_str(line).unwrap_or_else(|e| panic!("`{line}` did not spell symbols: {e}"))
}

#[test]
fn multiplication_binds_before_addition() {
    assert_result("2+3*4", 14.0);
    assert_result("2+3*4^2", 50.0);
    assert_result("2*3^2", 18.0);
    assert_result("2^3*4", 32.0);
    assert_result("10-2*3", 4.0);
}

#[test]
fn equal_ranks_chain_left_to_right() {
    assert_result("100/10/2", 5.0);
    assert_result("2^3^2", 64.0);
    assert_result("7/2", 3.5);
}

#[test]
fn subtraction_always_roots_the_tree() {
    assert_result("8-3-2", 3.0);
    assert_result("10-2-3-1", 4.0);
    assert_result("2+3*4-1", 13.0);
}

#[test]
fn sum_after_subtraction_binds_into_the_difference() {
    // kept on purpose: a sum behind a subtraction joins its right side
    assert_result("8-3+2", 3.0);
    assert_result("8+3-2", 9.0);
}

#[test]
fn groups_reduce_before_their_surroundings() {
    assert_result("(2+3)*4", 20.0);
    assert_result("(2+3)*(4+5)", 45.0);
    assert_result("2*(3*(4+1))", 30.0);
}

#[test]
fn groups_pin_their_subtrees() {
    assert_result("2*(3+4)^2", 98.0);
    assert_result("(8-3)-2", 3.0);
}

#[test]
fn percent_reads_the_left_side_as_a_percentage() {
    assert_result("200%50", 100.0);
    assert_result("50%200", 100.0);
    assert_result("200%50*2", 200.0);
}

#[test]
fn modulo_is_floored_and_binds_tightest() {
    assert_result("7 mod 3", 1.0);
    assert_result("7 mod 4*2", 6.0);
    assert_result("3*4 mod 5", 12.0);

    let negative = vec![Symbol::Number("-7".to_string()),
                        Symbol::Mod,
                        Symbol::Number("3".to_string())];
    assert_eq!(evaluate(&negative).unwrap(), 2.0);

    let negative_modulus = vec![Symbol::Number("7".to_string()),
                                Symbol::Mod,
                                Symbol::Number("-3".to_string())];
    assert_eq!(evaluate(&negative_modulus).unwrap(), -2.0);
}

#[test]
fn even_degree_roots_are_real_roots() {
    assert_result("16√2", 4.0);
    assert_result("81√4", 3.0);
}

#[test]
fn root_degree_collapse_is_preserved() {
    // odd and fractional degrees collapse to a signed unit; this is the
    // keypad's observable behavior, pinned here rather than corrected
    assert_result("8√3", 1.0);
    assert_result("(0-8)√3", 1.0);

    let infinite_degree = vec![Symbol::Number("16".to_string()),
                               Symbol::Root,
                               Symbol::Number("inf".to_string())];
    assert_eq!(evaluate(&infinite_degree).unwrap(), 0.0);
}

#[test]
fn pi_is_a_number_key() {
    assert_result("pi*2", 2.0 * std::f64::consts::PI);
    assert_result("pi", std::f64::consts::PI);
    assert_result("π", std::f64::consts::PI);
}

#[test]
fn alternate_key_labels_spell_the_same_symbols() {
    assert_result("3×4", 12.0);
    assert_result("6÷2", 3.0);
    assert_result("16root2", 4.0);
}

#[test]
fn separators_accumulate_into_decimals() {
    assert_result("2,5+1,5", 4.0);
    assert_result(",5*4", 2.0);
    assert_result("2.5*2", 5.0);
}

#[test]
fn computed_zero_divides_to_infinity() {
    let value = evaluate_line("5/(2-2)").unwrap();
    assert!(value.is_infinite() && value.is_sign_positive());
}

#[test]
fn single_values_reduce_to_themselves() {
    assert_result("5", 5.0);
    assert_result("(((5)))", 5.0);
}

#[test]
fn stray_close_marks_are_skipped() {
    assert_result("2)*3", 6.0);
    assert_result(")5", 5.0);
}

#[test]
fn empty_entries_do_not_build() {
    let err = evaluate(&[]).unwrap_err();
    assert!(matches!(err, Error::Build(BuildError::EmptyExpression)));

    let err = evaluate_line("  ").unwrap_err();
    assert!(matches!(err, Error::Build(BuildError::EmptyExpression)));
}

#[test]
fn nesting_is_capped() {
    let line = format!("{}1{}", "(".repeat(70), ")".repeat(70));
    let err = evaluate_line(&line).unwrap_err();
    assert!(matches!(err, Error::Lex(LexError::GroupTooDeep { limit: 64 })));
}

#[test]
fn the_tree_reshapes_around_precedence() {
    let expression = lex(&symbols("2+3*4")).unwrap();
    let tree = build(&expression).unwrap();

    // three numbers and two operators, nothing copied or re-read
    assert_eq!(tree.arena.len(), 5);

    let AstNode::Operator { operator: Operator::Sum, right: Some(right), .. } =
        *tree.arena.node(tree.stem.head)
    else {
        panic!("head of `2+3*4` is not a sum");
    };
    assert!(matches!(tree.arena.node(right),
                     AstNode::Operator { operator: Operator::Multiply, .. }));
}

#[test]
fn well_formed_entries_validate_cleanly() {
    for line in ["2+3*4", "(2+3)*(4+5)", "7 mod 3", "pi*2,5", "16√2"] {
        let expression = lex(&symbols(line)).unwrap();
        assert!(validate(&expression).is_ok(), "`{line}` did not validate");
    }
}

#[test]
fn adjacent_operators_report_at_the_first() {
    let report = report_for("2*+4");
    assert_eq!(report.column, 1);
    assert!(matches!(report.kind,
                     ValidationErrorKind::OperatorAfterOperator { first: "*", second: "+" }));
}

#[test]
fn operators_need_values_on_both_sides() {
    let report = report_for("*2");
    assert_eq!(report.column, 0);
    assert!(matches!(report.kind, ValidationErrorKind::NothingBeforeOperator { operator: "*" }));

    let report = report_for("2+");
    assert_eq!(report.column, 1);
    assert!(matches!(report.kind, ValidationErrorKind::NothingAfterOperator { operator: "+" }));

    let report = report_for("(2+)");
    assert_eq!(report.column, 2);
    assert!(matches!(report.kind,
                     ValidationErrorKind::OperatorBeforeGroupEnd { operator: "+" }));
}

#[test]
fn literal_zero_division_is_rejected() {
    let report = report_for("5/0");
    assert_eq!(report.column, 2);
    assert!(matches!(report.kind, ValidationErrorKind::DivisionByLiteralZero));

    // an accumulated 0.0 is still the literal zero
    let report = report_for("8/0,0");
    assert_eq!(report.column, 2);
    assert!(matches!(report.kind, ValidationErrorKind::DivisionByLiteralZero));
}

#[test]
fn values_need_an_operator_between_them() {
    let report = report_for("2(3)");
    assert_eq!(report.column, 0);
    assert!(matches!(report.kind, ValidationErrorKind::UnexpectedValue { .. }));

    let report = report_for("(2)(3)");
    assert_eq!(report.column, 2);
    assert!(matches!(report.kind, ValidationErrorKind::UnexpectedValue { .. }));

    let report = report_for("2pi");
    assert_eq!(report.column, 0);
}

#[test]
fn empty_blocks_are_rejected() {
    let report = report_for("2*()");
    assert_eq!(report.column, 2);
    assert!(matches!(report.kind, ValidationErrorKind::EmptyGroup));
}

#[test]
fn malformed_literals_are_rejected() {
    let report = report_for("1,2,3");
    assert_eq!(report.column, 0);
    assert!(matches!(report.kind, ValidationErrorKind::InvalidNumber { .. }));
    assert_eq!(report.expression, "1.2.3");
}

#[test]
fn unfinished_blocks_report_their_open_mark() {
    let report = report_for("(2+3");
    assert_eq!(report.column, 0);
    assert!(matches!(report.kind, ValidationErrorKind::UnfinishedGroup));
    assert_eq!(report.expression, "(2+3");

    let report = report_for("2*(4");
    assert_eq!(report.column, 2);

    // a nested unterminated block anchors at the outermost unmatched mark
    let report = report_for("((2+3)");
    assert_eq!(report.column, 0);
}

#[test]
fn reports_render_expression_and_caret() {
    let report = report_for("2*+4");
    assert_eq!(report.to_string(),
               "Error at column 1: There is an unexpected '+' after '*'.\n2*+4\n ^");

    let report = report_for("(2+3");
    assert_eq!(report.to_string(), "Error at column 0: There are still open blocks.\n(2+3\n^");
}

#[test]
fn render_round_trip_is_conventional() {
    let expression = lex(&symbols("2+3*(4,5)")).unwrap();
    assert_eq!(expression.to_string(), "2+3*(4.5)");

    // the buffer echoes the raw entry, separator included
    let buffer = InputBuffer::from_keys("2+3*(4,5)").unwrap();
    assert_eq!(buffer.to_string(), "2+3*(4,5)");
}

#[test]
fn the_buffer_collects_and_deletes_keys() {
    let mut buffer = InputBuffer::from_keys("8+3").unwrap();
    assert_eq!(buffer.to_string(), "8+3");
    assert_eq!(buffer.len(), 3);

    assert_eq!(buffer.delete_last(), Some(Symbol::Number("3".to_string())));
    buffer.press("4").unwrap();
    assert_eq!(buffer.to_string(), "8+4");

    buffer.press("del").unwrap();
    buffer.press("del").unwrap();
    assert_eq!(buffer.to_string(), "8");

    buffer.clear();
    assert!(buffer.is_empty());
}

#[test]
fn committing_replaces_the_entry_with_the_result() {
    let mut buffer = InputBuffer::from_keys("7*3").unwrap();
    assert_eq!(buffer.commit().unwrap(), 21.0);
    assert_eq!(buffer.to_string(), "21");
    assert_eq!(buffer.len(), 1);

    buffer.press("-").unwrap();
    buffer.press("1").unwrap();
    assert_eq!(buffer.commit().unwrap(), 20.0);
}

#[test]
fn failed_commits_leave_the_entry_untouched() {
    let mut buffer = InputBuffer::from_keys("2+").unwrap();
    assert!(buffer.commit().is_err());
    assert_eq!(buffer.to_string(), "2+");

    buffer.press("2").unwrap();
    assert_eq!(buffer.commit().unwrap(), 4.0);
}

#[test]
fn results_reenter_as_single_numerals() {
    let mut buffer = InputBuffer::new();
    buffer.replace_with_result(-7.0);
    assert_eq!(buffer.to_string(), "-7");
    assert_eq!(buffer.len(), 1);

    buffer.press("mod").unwrap();
    buffer.press("3").unwrap();
    assert_eq!(buffer.commit().unwrap(), 2.0);
}

#[test]
fn unknown_keys_are_reported() {
    assert!(matches!(evaluate_line("2x3").unwrap_err(), Error::Input(_)));

    let mut buffer = InputBuffer::new();
    assert!(buffer.press("enter").is_err());
    assert!(buffer.press("2+3").is_err());
    assert!(buffer.is_empty());
}
