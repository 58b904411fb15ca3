//! Expression parser using Pratt parsing (precedence climbing).
//!
//! ## Precedence levels (lowest to highest)
//!
//! 1. `<`, `>` — comparison
//! 2. `+`, `-` — addition
//! 3. `*`, `/` — multiplication
//!
//! All operators are left-associative. Tokens that are not binary
//! operators have no precedence entry, which is what terminates the
//! climbing loop at `)` `,` `;` or end of input.
//!
//! ## Module organization
//!
//! - `pratt` — climbing loop over binary operators
//! - `atoms` — primary expressions (literals, identifiers/calls, parens)

mod atoms;
mod pratt;

use super::{ParseError, TokenStream};
use kaleido_ast::Expr;

/// Parse a full expression: one primary plus any binary-operator suffix.
pub(super) fn parse_expr(stream: &mut TokenStream) -> Result<Expr, ParseError> {
    pratt::parse_pratt(stream, 0)
}
