// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! AST types for the kaleido language.
//!
//! This crate contains the AST node definitions the parser produces and
//! the foundation types (spans, source maps, operators) shared with any
//! downstream consumer. It holds data only; parsing lives in
//! `kaleido-parser` and evaluation/code generation is an external
//! concern that matches exhaustively over [`ExprKind`] and [`Item`].

pub mod ast;
pub mod foundation;

pub use ast::{Expr, ExprKind, Function, Item, Prototype};
pub use foundation::{BinaryOp, SourceFile, SourceMap, Span};
