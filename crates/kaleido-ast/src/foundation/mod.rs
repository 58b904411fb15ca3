//! Foundation types shared across the front end.
//!
//! - [`span`] — compact source locations and file/line lookup
//! - [`operators`] — the closed binary operator set

pub mod operators;
pub mod span;

pub use operators::BinaryOp;
pub use span::{SourceFile, SourceMap, Span};
