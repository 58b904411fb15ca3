//! Top-level unit parsers: definitions, externs, prototypes, and the
//! program loop with error recovery.

use super::{expr, ParseError, TokenStream};
use kaleido_ast::{Function, Item, Prototype};
use kaleido_lexer::Token;

/// Parse every top-level unit in the stream.
///
/// Stray `;` separators are skipped. On a failed unit the error is
/// recorded and the stream synchronizes to the next `;` or leading
/// keyword before continuing, so one bad unit cannot poison the next.
/// Every iteration consumes at least one token, so the loop terminates.
pub(super) fn parse_items(stream: &mut TokenStream) -> Result<Vec<Item>, Vec<ParseError>> {
    let mut items = Vec::new();
    let mut errors = Vec::new();

    while !stream.at_end() {
        if matches!(stream.peek(), Some(Token::Semicolon)) {
            stream.advance();
            continue;
        }

        match parse_item(stream) {
            Ok(item) => items.push(item),
            Err(e) => {
                errors.push(e);
                stream.synchronize();
            }
        }
    }

    if errors.is_empty() {
        Ok(items)
    } else {
        Err(errors)
    }
}

/// Parse one top-level unit, dispatched on the leading token.
///
/// Anything that is not `def` or `extern` is a bare expression and gets
/// the anonymous-function wrapping.
fn parse_item(stream: &mut TokenStream) -> Result<Item, ParseError> {
    match stream.peek() {
        Some(Token::Def) => parse_definition(stream).map(Item::Definition),
        Some(Token::Extern) => parse_extern(stream).map(Item::Extern),
        _ => parse_top_level_expr(stream).map(Item::Definition),
    }
}

/// Parse `'def' prototype expression`.
pub(super) fn parse_definition(stream: &mut TokenStream) -> Result<Function, ParseError> {
    let start = stream.current_pos();
    stream.expect(Token::Def)?;

    let proto = parse_prototype(stream)?;
    let body = expr::parse_expr(stream)?;

    let span = stream.span_from(start);
    Ok(Function::new(proto, body, span))
}

/// Parse `'extern' prototype`.
pub(super) fn parse_extern(stream: &mut TokenStream) -> Result<Prototype, ParseError> {
    stream.expect(Token::Extern)?;
    parse_prototype(stream)
}

/// Parse `identifier '(' identifier* ')'`.
///
/// Parameters are whitespace-separated identifiers, no commas. Duplicate
/// names are accepted here; rejecting them is the consumer's call.
pub(super) fn parse_prototype(stream: &mut TokenStream) -> Result<Prototype, ParseError> {
    let start = stream.current_pos();
    let span = stream.current_span();

    let name = match stream.peek() {
        Some(Token::Ident(name)) => name.clone(),
        other => return Err(ParseError::incomplete_prototype("function name", other, span)),
    };
    stream.advance();

    if !matches!(stream.peek(), Some(Token::LParen)) {
        return Err(ParseError::incomplete_prototype(
            "'('",
            stream.peek(),
            stream.current_span(),
        ));
    }
    stream.advance();

    let mut params = Vec::new();
    while let Some(Token::Ident(param)) = stream.peek() {
        params.push(param.clone());
        stream.advance();
    }

    if !matches!(stream.peek(), Some(Token::RParen)) {
        return Err(ParseError::incomplete_prototype(
            "')'",
            stream.peek(),
            stream.current_span(),
        ));
    }
    stream.advance();

    Ok(Prototype::new(name, params, stream.span_from(start)))
}

/// Parse a bare expression and wrap it in an anonymous zero-parameter
/// definition, so every evaluable unit has the same [`Function`] shape.
pub(super) fn parse_top_level_expr(stream: &mut TokenStream) -> Result<Function, ParseError> {
    let start = stream.current_pos();
    let body = expr::parse_expr(stream)?;

    let span = stream.span_from(start);
    let proto = Prototype::anonymous(span);
    Ok(Function::new(proto, body, span))
}
