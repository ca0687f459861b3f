//! Operator matching helpers.

use spartan_ir::{BinaryOp, UnaryOp};

use crate::lexer::Token;
use crate::Parser;

impl Parser<'_> {
    pub(crate) fn match_binary_op(&self) -> Option<BinaryOp> {
        let op = match self.current()? {
            Token::Star => BinaryOp::Mul,
            Token::Slash => BinaryOp::Div,
            Token::Percent => BinaryOp::Rem,
            Token::Plus => BinaryOp::Add,
            Token::Minus => BinaryOp::Sub,
            Token::Shl => BinaryOp::Shl,
            Token::Shr => BinaryOp::Shr,
            Token::UShr => BinaryOp::UShr,
            Token::Lt => BinaryOp::Lt,
            Token::Gt => BinaryOp::Gt,
            Token::LtEq => BinaryOp::LtEq,
            Token::GtEq => BinaryOp::GtEq,
            Token::EqEq => BinaryOp::Eq,
            Token::NotEq => BinaryOp::NotEq,
            Token::Amp => BinaryOp::BitAnd,
            Token::Caret => BinaryOp::BitXor,
            Token::Pipe => BinaryOp::BitOr,
            Token::AmpAmp => BinaryOp::And,
            Token::PipePipe => BinaryOp::Or,
            _ => return None,
        };
        Some(op)
    }

    pub(crate) fn match_unary_op(&self) -> Option<UnaryOp> {
        match self.current()? {
            Token::Minus => Some(UnaryOp::Neg),
            Token::Plus => Some(UnaryOp::Plus),
            Token::Bang => Some(UnaryOp::Not),
            Token::Tilde => Some(UnaryOp::BitNot),
            _ => None,
        }
    }
}
