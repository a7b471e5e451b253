// Integration tests for the parse → tree → evaluate pipeline

use exprtree::interpreter::engine::Interpreter;
use exprtree::interpreter::errors::RuntimeError;
use exprtree::interpreter::evaluate;
use exprtree::parser::lexer::TokenKind;
use exprtree::{parse, BinOp, Expr, ParseError, MAX_DEPTH};

fn eval(source: &str) -> i64 {
    let expr = parse(source).expect("Parsing failed");
    evaluate(&expr).expect("Evaluation failed")
}

#[test]
fn test_digit_only_inputs_are_single_numbers() {
    for n in [0i64, 1, 9, 10, 42, 1234, 987654321, i64::MAX] {
        let expr = parse(&n.to_string()).expect("Parsing failed");
        assert_eq!(expr, Expr::number(n));
        assert_eq!(expr.node_count(), 1);
    }
}

#[test]
fn test_left_associativity_for_all_small_operands() {
    for a in 0..6 {
        for b in 0..6 {
            for c in 0..6 {
                let expr = parse(&format!("{}+{}-{}", a, b, c)).unwrap();
                assert_eq!(
                    expr,
                    Expr::binary(
                        BinOp::Sub,
                        Expr::binary(BinOp::Add, Expr::number(a), Expr::number(b)),
                        Expr::number(c)
                    )
                );

                let expr = parse(&format!("{}-{}+{}", a, b, c)).unwrap();
                assert_eq!(
                    expr,
                    Expr::binary(
                        BinOp::Add,
                        Expr::binary(BinOp::Sub, Expr::number(a), Expr::number(b)),
                        Expr::number(c)
                    )
                );
                assert_eq!(evaluate(&expr), Ok(a - b + c));
            }
        }
    }
}

#[test]
fn test_precedence() {
    assert_eq!(eval("2+3*4"), 14);
    assert_eq!(eval("(2+3)*4"), 20);
    assert_eq!(eval("2*3+4"), 10);
    assert_eq!(eval("2*(3+4)"), 14);
    assert_eq!(eval("20-6/3"), 18);
}

#[test]
fn test_multiplicative_chain_left_associative() {
    assert_eq!(eval("8/4/2"), 1);
    assert_eq!(eval("100/10*2"), 20);
    assert_eq!(eval("2*3/4"), 1);
}

#[test]
fn test_whitespace_invariance() {
    assert_eq!(parse("1+2").unwrap(), parse(" 1 + 2 ").unwrap());
    assert_eq!(
        parse("(1+2)*3").unwrap(),
        parse("\t( 1 +\t2 )  *   3\n").unwrap()
    );
}

#[test]
fn test_unmatched_paren_fails() {
    assert!(matches!(
        parse("(1+2"),
        Err(ParseError::UnexpectedToken {
            found: TokenKind::EndOfFile,
            ..
        })
    ));
    assert!(matches!(parse("((3)"), Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn test_stray_close_paren_fails() {
    assert!(matches!(
        parse("1+2)"),
        Err(ParseError::UnexpectedToken {
            found: TokenKind::CloseParen,
            ..
        })
    ));
}

#[test]
fn test_empty_input_fails() {
    for source in ["", "   ", "()"] {
        let err = parse(source).unwrap_err();
        assert!(
            matches!(err, ParseError::UnexpectedToken { .. }),
            "expected failure for {:?}, got {:?}",
            source,
            err
        );
    }
}

#[test]
fn test_adjacent_numbers_fail() {
    let err = parse("1 2").unwrap_err();
    assert_eq!(err.location().column, 3);
}

#[test]
fn test_error_reports_position() {
    let source = "12 + (3 * )";
    let err = parse(source).unwrap_err();
    assert_eq!(err.location().column, 11);
    assert_eq!(
        err.render_with_source(source),
        "12 + (3 * )\n          ^ expected an integer or '(', found ')'"
    );
}

#[test]
fn test_tree_rendering() {
    let expr = parse("1 + 2 * 3").unwrap();
    assert_eq!(
        expr.render_tree(),
        "BinaryOp: +\n  Number: 1\n  BinaryOp: *\n    Number: 2\n    Number: 3\n"
    );
}

#[test]
fn test_division_by_zero_is_a_runtime_error() {
    let expr = parse("4/(2-2)").unwrap();
    assert!(matches!(
        evaluate(&expr),
        Err(RuntimeError::DivisionByZero { node: 0, .. })
    ));
}

#[test]
fn test_stepping_interpreter_matches_evaluate() {
    for source in ["7", "1+2*3", "(8-3)*(4+1)/5", "9/3/3"] {
        let expr = parse(source).unwrap();
        let expected = evaluate(&expr).unwrap();
        let mut interpreter = Interpreter::new(expr, 1024 * 1024);
        assert_eq!(interpreter.run(), Ok(expected));

        interpreter.rewind_to_start().unwrap();
        let mut steps = 0;
        while interpreter.step_forward().is_ok() {
            steps += 1;
        }
        assert_eq!(steps, interpreter.expr().node_count());
        let root = interpreter.current_snapshot().and_then(|s| s.value_of(0));
        assert_eq!(root, Some(expected));
    }
}

#[test]
fn test_deep_input_fails_cleanly() {
    let parens = format!("{}1{}", "(".repeat(20_000), ")".repeat(20_000));
    assert!(matches!(parse(&parens), Err(ParseError::TooDeep { .. })));

    let chain = format!("1{}", "+1".repeat(200_000));
    let err = parse(&chain).unwrap_err();
    assert_eq!(err.location().column, 2 * MAX_DEPTH);
}

#[test]
fn test_deepest_accepted_tree_evaluates() {
    let source = format!("{}2{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
    assert_eq!(eval(&source), 2);

    let chain = format!("1{}", "-1".repeat(MAX_DEPTH - 1));
    let expr = parse(&chain).unwrap();
    assert_eq!(expr.depth(), MAX_DEPTH);
    assert_eq!(evaluate(&expr), Ok(2 - MAX_DEPTH as i64));
    assert_eq!(expr.render_tree().lines().count(), 2 * MAX_DEPTH - 1);
}
