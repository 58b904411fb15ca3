//! Primary expressions - literals, identifiers, calls, parenthesized
//! expressions.

use super::super::{ParseError, TokenStream};
use kaleido_ast::{Expr, ExprKind};
use kaleido_lexer::Token;

/// Parse one primary expression, dispatched on the lookahead token.
pub(super) fn parse_atom(stream: &mut TokenStream) -> Result<Expr, ParseError> {
    match stream.peek() {
        Some(Token::Number(_)) => parse_number(stream),
        Some(Token::Ident(_)) => parse_identifier_or_call(stream),
        Some(Token::LParen) => parse_parenthesized(stream),
        other => Err(ParseError::unexpected_token(
            other,
            "while expecting an expression",
            stream.current_span(),
        )),
    }
}

/// Parse a numeric literal.
fn parse_number(stream: &mut TokenStream) -> Result<Expr, ParseError> {
    let start = stream.current_pos();
    let span = stream.current_span();

    let value = match stream.advance() {
        Some(Token::Number(value)) => *value,
        other => return Err(ParseError::unexpected_token(other, "numeric literal", span)),
    };

    Ok(Expr::new(ExprKind::Number(value), stream.span_from(start)))
}

/// Parse an identifier, continuing into a call if `(` follows.
///
/// `foo` is a variable reference; `foo(...)` is a call. `foo()` is a
/// legal zero-argument call: the argument loop is entered only when the
/// token after `(` is not already `)`.
fn parse_identifier_or_call(stream: &mut TokenStream) -> Result<Expr, ParseError> {
    let start = stream.current_pos();
    let span = stream.current_span();

    let name = match stream.advance() {
        Some(Token::Ident(name)) => name.clone(),
        other => return Err(ParseError::unexpected_token(other, "identifier", span)),
    };

    if !matches!(stream.peek(), Some(Token::LParen)) {
        return Ok(Expr::new(ExprKind::Variable(name), stream.span_from(start)));
    }
    stream.advance();

    let mut args = Vec::new();
    if !matches!(stream.peek(), Some(Token::RParen)) {
        loop {
            args.push(super::parse_expr(stream)?);

            match stream.peek() {
                Some(Token::RParen) => break,
                Some(Token::Comma) => {
                    stream.advance();
                }
                other => {
                    return Err(ParseError::incomplete_argument_list(
                        other,
                        stream.current_span(),
                    ));
                }
            }
        }
    }
    stream.expect(Token::RParen)?;

    Ok(Expr::new(
        ExprKind::Call { callee: name, args },
        stream.span_from(start),
    ))
}

/// Parse `( expression )`.
///
/// Parentheses group only; the inner expression is returned unwrapped and
/// contributes no node of its own.
fn parse_parenthesized(stream: &mut TokenStream) -> Result<Expr, ParseError> {
    stream.expect(Token::LParen)?;
    let expr = super::parse_expr(stream)?;
    stream.expect(Token::RParen)?;
    Ok(expr)
}
