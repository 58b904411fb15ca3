//! AST node definitions.
//!
//! The parser produces these structures and hands them off by value; it
//! keeps no reference to a returned tree. Every composite node owns its
//! children outright (`Box`/`Vec`, no sharing), so a tree is finite and
//! acyclic and traversal always terminates. Nodes are never mutated after
//! construction.
//!
//! There is no behavior here beyond constructors: evaluation and code
//! generation belong to external consumers, which match exhaustively on
//! [`ExprKind`] and [`Item`].

use crate::foundation::{BinaryOp, Span};
use std::rc::Rc;

/// An expression with its source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    /// What kind of expression this is
    pub kind: ExprKind,
    /// Source location for error messages
    pub span: Span,
}

impl Expr {
    /// Create a new expression node.
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The closed set of expression forms.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Numeric literal, e.g. `1.0`
    Number(f64),
    /// Variable reference, e.g. `x`
    Variable(Rc<str>),
    /// Binary operation, e.g. `a + b`
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Function call, e.g. `foo(1, x)`. Zero arguments is legal.
    Call { callee: Rc<str>, args: Vec<Expr> },
}

/// A function signature: name and parameter names.
///
/// Parameter-name uniqueness is not checked here; that is left to the
/// consumer resolving names.
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    /// Function name; empty for the anonymous top-level wrapper
    pub name: Rc<str>,
    /// Parameter names in source order
    pub params: Vec<Rc<str>>,
    /// Source location
    pub span: Span,
}

impl Prototype {
    /// Create a named prototype.
    pub fn new(name: Rc<str>, params: Vec<Rc<str>>, span: Span) -> Self {
        Self { name, params, span }
    }

    /// The nameless, zero-parameter prototype wrapped around a bare
    /// top-level expression, so every evaluable unit presents the same
    /// [`Function`] shape downstream.
    pub fn anonymous(span: Span) -> Self {
        Self {
            name: Rc::from(""),
            params: Vec::new(),
            span,
        }
    }

    /// Whether this is the anonymous top-level wrapper.
    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }
}

/// A function definition: prototype plus body expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// Signature
    pub proto: Prototype,
    /// Body expression
    pub body: Expr,
    /// Source location covering the whole definition
    pub span: Span,
}

impl Function {
    /// Create a function definition.
    pub fn new(proto: Prototype, body: Expr, span: Span) -> Self {
        Self { proto, body, span }
    }
}

/// One top-level unit of a program.
///
/// A bare expression has already been wrapped into an anonymous
/// [`Function`] by the time it appears here.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// `def` function definition, or an anonymous top-level expression
    Definition(Function),
    /// `extern` declaration
    Extern(Prototype),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_prototype() {
        let proto = Prototype::anonymous(Span::zero(0));
        assert!(proto.is_anonymous());
        assert!(proto.params.is_empty());

        let named = Prototype::new(Rc::from("sin"), vec![Rc::from("x")], Span::zero(0));
        assert!(!named.is_anonymous());
    }
}
