//! Token stream cursor for the recursive descent parser.

use kaleido_ast::Span;
use kaleido_lexer::Token;
use std::ops::Range;

/// Cursor over a lexed token slice.
///
/// This is the parser's only state: a position into the tokens, read one
/// lookahead token at a time. Each token carries its byte span so errors
/// and AST nodes can point back into the source. A stream is private to
/// one parse session; re-parsing means building a fresh one.
pub struct TokenStream<'src> {
    tokens: &'src [(Token, Range<usize>)],
    pos: usize,
    file_id: u16,
}

impl<'src> TokenStream<'src> {
    /// Create a cursor at the first token.
    pub fn new(tokens: &'src [(Token, Range<usize>)], file_id: u16) -> Self {
        Self {
            tokens,
            pos: 0,
            file_id,
        }
    }

    /// Look at the current token without consuming it.
    ///
    /// `None` means end of input, on this call and every later one.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(tok, _)| tok)
    }

    /// Consume the current token and return it.
    pub fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos).map(|(tok, _)| tok);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Whether the current token has the same discriminant as `expected`.
    pub fn check(&self, expected: &Token) -> bool {
        matches!(self.peek(), Some(t) if std::mem::discriminant(t) == std::mem::discriminant(expected))
    }

    /// Require a specific token, consuming it on match.
    pub fn expect(&mut self, expected: Token) -> Result<Span, super::ParseError> {
        if self.check(&expected) {
            let start = self.pos;
            self.advance();
            Ok(self.span_from(start))
        } else {
            Err(super::ParseError::expected_token(
                &expected,
                self.peek(),
                self.current_span(),
            ))
        }
    }

    /// Whether all tokens have been consumed.
    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Current position, for spanning a rule after it completes.
    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// Span from the token at `start` through the last consumed token.
    ///
    /// # Panics
    /// Panics if `start` is out of bounds; callers pass positions they
    /// have already consumed past.
    pub fn span_from(&self, start: usize) -> Span {
        assert!(
            start < self.tokens.len(),
            "span_from: start {} out of bounds (len {})",
            start,
            self.tokens.len()
        );
        let start_byte = self.tokens[start].1.start;
        let end_byte = if self.pos > 0 {
            self.tokens[self.pos - 1].1.end
        } else {
            start_byte
        };
        Span::new(self.file_id, start_byte as u32, end_byte as u32)
    }

    /// Span of the current token.
    ///
    /// At end of input this is the zero-width span just past the last
    /// token (offset 0 for an empty stream), so errors at EOF still point
    /// somewhere sensible.
    pub fn current_span(&self) -> Span {
        match self.tokens.get(self.pos) {
            Some((_, range)) => Span::new(self.file_id, range.start as u32, range.end as u32),
            None => match self.tokens.last() {
                Some((_, range)) => Span::new(self.file_id, range.end as u32, range.end as u32),
                None => Span::zero(self.file_id),
            },
        }
    }

    /// Skip ahead to the next top-level boundary for error recovery.
    ///
    /// Stops in front of `def`/`extern`, just past a `;`, or at end of
    /// input. Always makes progress when not already at a boundary.
    pub fn synchronize(&mut self) {
        while !self.at_end() {
            match self.peek() {
                Some(Token::Def) | Some(Token::Extern) => break,
                Some(Token::Semicolon) => {
                    self.advance();
                    break;
                }
                _ => {
                    self.advance();
                }
            }
        }
    }
}
