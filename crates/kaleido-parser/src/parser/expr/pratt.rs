//! Pratt parser core - precedence climbing for binary operators.

use super::super::{ParseError, TokenStream};
use super::atoms;
use kaleido_ast::{BinaryOp, Expr, ExprKind};
use kaleido_lexer::Token;

/// Binary operator metadata: (precedence, operator).
///
/// Higher precedence binds tighter. Returns `None` for anything that is
/// not a binary operator, which makes the climbing loop stop at `)` `,`
/// `;`, stray tokens, and end of input alike.
fn binary_op_info(token: &Token) -> Option<(u8, BinaryOp)> {
    match token {
        Token::Lt => Some((10, BinaryOp::Lt)),
        Token::Gt => Some((10, BinaryOp::Gt)),
        Token::Plus => Some((20, BinaryOp::Add)),
        Token::Minus => Some((20, BinaryOp::Sub)),
        Token::Star => Some((30, BinaryOp::Mul)),
        Token::Slash => Some((30, BinaryOp::Div)),
        _ => None,
    }
}

/// Parse a primary expression and fold in every following binary operator
/// whose precedence is at least `min_prec`.
///
/// Recursing with `prec + 1` for the right operand makes every operator
/// left-associative: an equal-precedence operator after the right operand
/// falls back to this loop and attaches to the combined node, while a
/// strictly tighter one is consumed by the recursive call first.
pub(super) fn parse_pratt(stream: &mut TokenStream, min_prec: u8) -> Result<Expr, ParseError> {
    let start = stream.current_pos();
    let mut left = atoms::parse_atom(stream)?;

    while let Some(token) = stream.peek() {
        let Some((prec, op)) = binary_op_info(token) else {
            break;
        };
        if prec < min_prec {
            break;
        }

        stream.advance();
        let right = parse_pratt(stream, prec + 1)?;

        let span = stream.span_from(start);
        left = Expr::new(
            ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        );
    }

    Ok(left)
}
