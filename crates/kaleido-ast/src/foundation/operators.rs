//! Binary operators of the kaleido expression grammar.

use serde::{Deserialize, Serialize};

/// A binary operator.
///
/// A closed set, so consumers (typically a code generator) can match
/// exhaustively and the compiler checks coverage. Precedence is parser
/// policy and lives with the parser, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `<`
    Lt,
    /// `>`
    Gt,
}

impl BinaryOp {
    /// The source glyph for this operator.
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
            BinaryOp::Lt => '<',
            BinaryOp::Gt => '>',
        }
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
