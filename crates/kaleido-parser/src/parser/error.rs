//! Parse error types.

use kaleido_ast::Span;
use kaleido_lexer::Token;
use std::fmt;

/// Parse error with source location and context.
///
/// Errors are returned, never thrown across component boundaries. A
/// failure in a nested rule unwinds to the public entry point without
/// exposing any partially-built node.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Kind of parse error
    pub kind: ParseErrorKind,
    /// Source location where the error occurred
    pub span: Span,
    /// Human-readable error message
    pub message: String,
}

/// Category of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The current token does not match what the active rule expects.
    UnexpectedToken,

    /// End of input reached while a construct was still incomplete,
    /// e.g. `def foo(` with nothing after it.
    UnexpectedEof,

    /// A call's argument list is malformed: after an argument the parser
    /// requires `,` or `)` and found something else.
    IncompleteArgumentList,

    /// A prototype is malformed: missing function name, missing `(`, or
    /// an unterminated parameter list.
    IncompletePrototype,
}

impl ParseError {
    fn new(kind: ParseErrorKind, span: Span, message: String) -> Self {
        Self {
            kind,
            span,
            message,
        }
    }

    /// Pick between token and end-of-input kinds based on what was found.
    fn kind_for(found: Option<&Token>, kind: ParseErrorKind) -> ParseErrorKind {
        if found.is_none() {
            ParseErrorKind::UnexpectedEof
        } else {
            kind
        }
    }

    /// A specific token was required and something else was found.
    pub fn expected_token(expected: &Token, found: Option<&Token>, span: Span) -> Self {
        let message = match found {
            Some(token) => format!("expected '{}', found '{}'", expected, token),
            None => format!("expected '{}', found end of input", expected),
        };
        Self::new(
            Self::kind_for(found, ParseErrorKind::UnexpectedToken),
            span,
            message,
        )
    }

    /// The current token makes no sense in the given context.
    pub fn unexpected_token(found: Option<&Token>, context: &str, span: Span) -> Self {
        let message = match found {
            Some(token) => format!("unexpected '{}' {}", token, context),
            None => format!("unexpected end of input {}", context),
        };
        Self::new(
            Self::kind_for(found, ParseErrorKind::UnexpectedToken),
            span,
            message,
        )
    }

    /// After a call argument, neither `,` nor `)` followed.
    pub fn incomplete_argument_list(found: Option<&Token>, span: Span) -> Self {
        let message = match found {
            Some(token) => format!("expected ')' or ',' in argument list, found '{}'", token),
            None => "expected ')' or ',' in argument list, found end of input".to_string(),
        };
        Self::new(
            Self::kind_for(found, ParseErrorKind::IncompleteArgumentList),
            span,
            message,
        )
    }

    /// A prototype rule failed; `what` names the missing piece.
    pub fn incomplete_prototype(what: &str, found: Option<&Token>, span: Span) -> Self {
        let message = match found {
            Some(token) => format!("expected {} in prototype, found '{}'", what, token),
            None => format!("expected {} in prototype, found end of input", what),
        };
        Self::new(
            Self::kind_for(found, ParseErrorKind::IncompletePrototype),
            span,
            message,
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at bytes {}..{}",
            self.message, self.span.start, self.span.end
        )
    }
}

impl std::error::Error for ParseError {}
