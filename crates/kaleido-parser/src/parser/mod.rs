//! Recursive descent parser for the kaleido language.
//!
//! ## Architecture
//!
//! - `stream` — [`TokenStream`] cursor with one-token lookahead
//! - `error` — [`ParseError`] and its categories
//! - `expr` — expression parser (Pratt precedence climbing)
//! - `decl` — top-level units (`def`, `extern`, bare expressions) and the
//!   program loop with error recovery
//!
//! ## Public API
//!
//! Each entry point takes a lexed token slice (token plus byte span, as
//! produced by [`kaleido_lexer::lex`]) and a file id, runs a fresh cursor
//! over it, and returns an owned tree or a [`ParseError`]. The parser
//! keeps no reference to anything it returns.

mod decl;
mod error;
mod expr;
mod stream;

pub use error::{ParseError, ParseErrorKind};
use stream::TokenStream;

use kaleido_ast::{Expr, Function, Item, Prototype};
use kaleido_lexer::Token;
use std::ops::Range;

/// Parse a whole program: a sequence of top-level units.
///
/// Stray `;` separators between units are skipped. Failed units are
/// recovered past (resynchronizing at `;` or a leading keyword) so that
/// all errors in the input are collected; any error fails the call.
pub fn parse_program(
    tokens: &[(Token, Range<usize>)],
    file_id: u16,
) -> Result<Vec<Item>, Vec<ParseError>> {
    let mut stream = TokenStream::new(tokens, file_id);
    decl::parse_items(&mut stream)
}

/// Parse a single expression.
pub fn parse_expr(tokens: &[(Token, Range<usize>)], file_id: u16) -> Result<Expr, ParseError> {
    let mut stream = TokenStream::new(tokens, file_id);
    expr::parse_expr(&mut stream)
}

/// Parse a function prototype: `name(param*)`.
pub fn parse_prototype(
    tokens: &[(Token, Range<usize>)],
    file_id: u16,
) -> Result<Prototype, ParseError> {
    let mut stream = TokenStream::new(tokens, file_id);
    decl::parse_prototype(&mut stream)
}

/// Parse a function definition: `def prototype expression`.
pub fn parse_definition(
    tokens: &[(Token, Range<usize>)],
    file_id: u16,
) -> Result<Function, ParseError> {
    let mut stream = TokenStream::new(tokens, file_id);
    decl::parse_definition(&mut stream)
}

/// Parse an extern declaration: `extern prototype`.
pub fn parse_extern(
    tokens: &[(Token, Range<usize>)],
    file_id: u16,
) -> Result<Prototype, ParseError> {
    let mut stream = TokenStream::new(tokens, file_id);
    decl::parse_extern(&mut stream)
}

/// Parse a bare expression wrapped as an anonymous, zero-parameter
/// function definition.
pub fn parse_top_level_expr(
    tokens: &[(Token, Range<usize>)],
    file_id: u16,
) -> Result<Function, ParseError> {
    let mut stream = TokenStream::new(tokens, file_id);
    decl::parse_top_level_expr(&mut stream)
}
