// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Lexical analysis for the kaleido language.
//!
//! Tokenization is built on logos. The token set is deliberately small:
//! two reserved words (`def`, `extern`), identifiers, numeric literals,
//! and one variant per operator/punctuation glyph.
//!
//! # Design
//!
//! - Tokenization is total. There is no lexical error: any character the
//!   other rules do not claim becomes [`Token::Unknown`] and is rejected
//!   later by the parser, with a span to point at.
//! - Whitespace and `#` line comments are stripped during lexing.
//! - Numeric scanning is permissive: a maximal `[0-9.]` run is one token,
//!   converted with strtod-like prefix semantics.
//!
//! # Examples
//!
//! ```
//! use kaleido_lexer::{lex, Token};
//! let tokens = lex("def foo(a b) a + b");
//! assert_eq!(tokens[0].0, Token::Def);
//! ```

use logos::Logos;
use std::ops::Range;
use std::rc::Rc;

/// A kaleido token.
///
/// Identifier text uses `Rc<str>` so tokens stay cheap to clone on their
/// way through the parser.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")] // whitespace
#[logos(skip r"#[^\n]*")] // line comments
pub enum Token {
    /// Keyword `def`
    #[token("def")]
    Def,
    /// Keyword `extern`
    #[token("extern")]
    Extern,

    /// Identifier: a letter followed by letters or digits.
    ///
    /// The continuation set has no underscore; `a_b` lexes as `a`,
    /// `Unknown('_')`, `b`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| Rc::from(lex.slice()))]
    Ident(Rc<str>),

    /// Numeric literal.
    ///
    /// The scanner takes a maximal run of digits and dots, then converts
    /// the longest valid leading prefix. Malformed runs such as `1.2.3`
    /// are therefore not lexical errors; they carry the prefix value
    /// (`1.2`) and the parser sees a single well-formed token.
    #[regex(r"[0-9.]+", |lex| leading_f64(lex.slice()))]
    Number(f64),

    /// Operator `+`
    #[token("+")]
    Plus,
    /// Operator `-`
    #[token("-")]
    Minus,
    /// Operator `*`
    #[token("*")]
    Star,
    /// Operator `/`
    #[token("/")]
    Slash,
    /// Operator `<`
    #[token("<")]
    Lt,
    /// Operator `>`
    #[token(">")]
    Gt,

    /// Delimiter `(`
    #[token("(")]
    LParen,
    /// Delimiter `)`
    #[token(")")]
    RParen,
    /// Delimiter `,`
    #[token(",")]
    Comma,
    /// Delimiter `;`
    #[token(";")]
    Semicolon,

    /// Any character no other rule claims, carried through unclassified.
    ///
    /// Low priority so it never shadows a real rule. Non-ASCII input
    /// lands here one character at a time.
    #[regex(r".", |lex| lex.slice().chars().next(), priority = 1)]
    Unknown(char),
}

/// Convert the longest valid leading prefix of a digits-and-dots run.
///
/// Mirrors `strtod`: stop at the second `.`, parse what came before, and
/// fall back to `0.0` when no prefix parses (e.g. the run is just `.`).
fn leading_f64(text: &str) -> f64 {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in text.char_indices() {
        if c == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        }
        end = i + 1;
    }
    text[..end].parse().unwrap_or(0.0)
}

/// Tokenize a source string, keeping byte spans.
///
/// Total: every input produces a token sequence, never an error. The
/// sequence is a pure function of `source`, so lexing twice yields
/// identical results. An exhausted sequence is the end-of-input
/// condition; the parser's cursor reports it uniformly on every read
/// past the end.
pub fn lex(source: &str) -> Vec<(Token, Range<usize>)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let token = match result {
            Ok(token) => token,
            // The catch-all rule makes errors unreachable in practice,
            // but logos still types the stream as fallible.
            Err(()) => {
                Token::Unknown(source[span.clone()].chars().next().unwrap_or('\u{FFFD}'))
            }
        };
        tokens.push((token, span));
    }
    tokens
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Def => write!(f, "def"),
            Token::Extern => write!(f, "extern"),
            Token::Ident(name) => write!(f, "{}", name),
            Token::Number(value) => write!(f, "{}", value),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Lt => write!(f, "<"),
            Token::Gt => write!(f, ">"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::Semicolon => write!(f, ";"),
            Token::Unknown(c) => write!(f, "{}", c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test helper: lex and drop spans.
    fn tokens(source: &str) -> Vec<Token> {
        lex(source).into_iter().map(|(tok, _)| tok).collect()
    }

    /// Test helper: create an identifier token.
    fn ident(s: &str) -> Token {
        Token::Ident(Rc::from(s))
    }

    #[test]
    fn test_keywords() {
        assert_eq!(tokens("def extern"), vec![Token::Def, Token::Extern]);
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        // Longest match wins: "define" is an identifier, not `def` + "ine".
        assert_eq!(
            tokens("define externs"),
            vec![ident("define"), ident("externs")]
        );
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(
            tokens("foo bar2 X"),
            vec![ident("foo"), ident("bar2"), ident("X")]
        );
    }

    #[test]
    fn test_identifier_has_no_underscore() {
        assert_eq!(
            tokens("a_b"),
            vec![ident("a"), Token::Unknown('_'), ident("b")]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            tokens("1 2.5 .5 42."),
            vec![
                Token::Number(1.0),
                Token::Number(2.5),
                Token::Number(0.5),
                Token::Number(42.0),
            ]
        );
    }

    #[test]
    fn test_permissive_number_run() {
        // A digits-and-dots run is one token carrying the prefix value.
        assert_eq!(tokens("1.2.3"), vec![Token::Number(1.2)]);
        assert_eq!(tokens("."), vec![Token::Number(0.0)]);
        assert_eq!(tokens("..7"), vec![Token::Number(0.0)]);
    }

    #[test]
    fn test_operators_and_delimiters() {
        assert_eq!(
            tokens("+ - * / < > ( ) , ;"),
            vec![
                Token::Plus,
                Token::Minus,
                Token::Star,
                Token::Slash,
                Token::Lt,
                Token::Gt,
                Token::LParen,
                Token::RParen,
                Token::Comma,
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_line_comments() {
        let source = "def # the rest is ignored\nfoo";
        assert_eq!(tokens(source), vec![Token::Def, ident("foo")]);
    }

    #[test]
    fn test_comment_to_end_of_input() {
        assert_eq!(tokens("# nothing else"), vec![]);
    }

    #[test]
    fn test_whitespace_and_comments_only() {
        assert_eq!(tokens("  \t\r\n # comment\n   \n"), vec![]);
    }

    #[test]
    fn test_unknown_characters_pass_through() {
        assert_eq!(tokens("@ !"), vec![Token::Unknown('@'), Token::Unknown('!')]);
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(tokens("λ"), vec![Token::Unknown('λ')]);
    }

    #[test]
    fn test_spans_are_byte_ranges() {
        let spanned = lex("def foo");
        assert_eq!(spanned[0].1, 0..3);
        assert_eq!(spanned[1].1, 4..7);
    }

    #[test]
    fn test_lexing_is_repeatable() {
        let source = "def fib(n) fib(n - 1) + fib(n - 2); # tail\nextern sin(x)";
        assert_eq!(lex(source), lex(source));
    }

    #[test]
    fn test_number_prefix_conversion() {
        assert_eq!(leading_f64("1.2.3"), 1.2);
        assert_eq!(leading_f64("3.14"), 3.14);
        assert_eq!(leading_f64("."), 0.0);
        assert_eq!(leading_f64("12"), 12.0);
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(Token::Def.to_string(), "def");
        assert_eq!(Token::Plus.to_string(), "+");
        assert_eq!(Token::RParen.to_string(), ")");
        assert_eq!(ident("foo").to_string(), "foo");
        assert_eq!(Token::Number(2.5).to_string(), "2.5");
    }
}
