//! Hand-written recursive descent parser for the kaleido language.
//!
//! Consumes the token stream produced by `kaleido-lexer` and builds
//! `kaleido-ast` trees: expressions, prototypes, function definitions,
//! extern declarations, and whole programs with per-unit error recovery.

pub mod parser;

pub use parser::{
    parse_definition, parse_expr, parse_extern, parse_program, parse_prototype,
    parse_top_level_expr, ParseError, ParseErrorKind,
};

// Re-export the lexer surface so callers need only one crate.
pub use kaleido_lexer::{lex, Token};
