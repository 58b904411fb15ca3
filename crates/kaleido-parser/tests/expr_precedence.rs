//! Expression precedence and associativity tests.
//!
//! Verifies the precedence-climbing core: `<` `>` bind loosest, then
//! `+` `-`, then `*` `/`, and every operator is left-associative.

use kaleido_ast::{BinaryOp, Expr, ExprKind};
use kaleido_parser::{lex, parse_expr};

/// Helper to parse an expression from source.
fn parse(source: &str) -> Expr {
    parse_expr(&lex(source), 0).expect("parse failed")
}

/// Helper to destructure a binary node.
fn binary(expr: &Expr) -> (BinaryOp, &Expr, &Expr) {
    match &expr.kind {
        ExprKind::Binary { op, left, right } => (*op, left.as_ref(), right.as_ref()),
        other => panic!("expected binary expression, got {:?}", other),
    }
}

/// Helper to assert a numeric leaf.
fn assert_number(expr: &Expr, expected: f64) {
    assert!(
        matches!(expr.kind, ExprKind::Number(v) if v == expected),
        "expected number {}, got {:?}",
        expected,
        expr.kind
    );
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    // 1 + 2 * 3 parses as 1 + (2 * 3), never (1 + 2) * 3
    let expr = parse("1 + 2 * 3");
    let (op, left, right) = binary(&expr);
    assert_eq!(op, BinaryOp::Add);
    assert_number(left, 1.0);

    let (op, left, right) = binary(right);
    assert_eq!(op, BinaryOp::Mul);
    assert_number(left, 2.0);
    assert_number(right, 3.0);
}

#[test]
fn test_division_binds_tighter_than_subtraction() {
    // a - b / c parses as a - (b / c)
    let expr = parse("a - b / c");
    let (op, left, right) = binary(&expr);
    assert_eq!(op, BinaryOp::Sub);
    assert!(matches!(left.kind, ExprKind::Variable(_)));
    let (op, _, _) = binary(right);
    assert_eq!(op, BinaryOp::Div);
}

#[test]
fn test_addition_binds_tighter_than_comparison() {
    // a < b + c parses as a < (b + c)
    let expr = parse("a < b + c");
    let (op, left, right) = binary(&expr);
    assert_eq!(op, BinaryOp::Lt);
    assert!(matches!(left.kind, ExprKind::Variable(_)));
    let (op, _, _) = binary(right);
    assert_eq!(op, BinaryOp::Add);
}

#[test]
fn test_subtraction_left_associative() {
    // 1 - 2 - 3 parses as (1 - 2) - 3
    let expr = parse("1 - 2 - 3");
    let (op, left, right) = binary(&expr);
    assert_eq!(op, BinaryOp::Sub);
    assert_number(right, 3.0);

    let (op, left, right) = binary(left);
    assert_eq!(op, BinaryOp::Sub);
    assert_number(left, 1.0);
    assert_number(right, 2.0);
}

#[test]
fn test_division_left_associative() {
    // 8 / 4 / 2 parses as (8 / 4) / 2
    let expr = parse("8 / 4 / 2");
    let (op, left, _) = binary(&expr);
    assert_eq!(op, BinaryOp::Div);
    let (op, _, _) = binary(left);
    assert_eq!(op, BinaryOp::Div);
}

#[test]
fn test_comparison_left_associative() {
    // a < b > c parses as (a < b) > c
    let expr = parse("a < b > c");
    let (op, left, _) = binary(&expr);
    assert_eq!(op, BinaryOp::Gt);
    let (op, _, _) = binary(left);
    assert_eq!(op, BinaryOp::Lt);
}

#[test]
fn test_parentheses_are_transparent() {
    // (((1))) is structurally identical to 1
    let wrapped = parse("(((1)))");
    let plain = parse("1");
    assert_eq!(wrapped.kind, plain.kind);
    assert_number(&wrapped, 1.0);
}

#[test]
fn test_parentheses_override_precedence() {
    // (1 + 2) * 3 parses with the addition on the left
    let expr = parse("(1 + 2) * 3");
    let (op, left, right) = binary(&expr);
    assert_eq!(op, BinaryOp::Mul);
    assert_number(right, 3.0);
    let (op, _, _) = binary(left);
    assert_eq!(op, BinaryOp::Add);
}

#[test]
fn test_mixed_precedence_chain() {
    // a + b * c - d parses as (a + (b * c)) - d
    let expr = parse("a + b * c - d");
    let (op, left, right) = binary(&expr);
    assert_eq!(op, BinaryOp::Sub);
    assert!(matches!(right.kind, ExprKind::Variable(_)));

    let (op, _, right) = binary(left);
    assert_eq!(op, BinaryOp::Add);
    let (op, _, _) = binary(right);
    assert_eq!(op, BinaryOp::Mul);
}

#[test]
fn test_single_number_has_no_operator_suffix() {
    let expr = parse("42");
    assert_number(&expr, 42.0);
}

#[test]
fn test_expr_spans_cover_source() {
    let expr = parse("1 + 2 * 3");
    assert_eq!((expr.span.start, expr.span.end), (0, 9));
}
