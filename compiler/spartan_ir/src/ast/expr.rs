//! Expression nodes.
//!
//! Only the distinctions the canonicalizer cares about get their own kind:
//! literals (classified by [`LitKind`]), identifiers, method calls, binary
//! nodes and n-ary operator chains. `Paren`, `Unary`, `FieldAccess` and
//! `Conditional` are carried so trees round-trip through the printer and so
//! operator nodes nested under them are still reached.

use std::fmt;

use super::operators::{BinaryOp, UnaryOp};
use crate::{ExprId, ExprRange, Name, Span};

/// Expression node: a kind plus the source range it was parsed from.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Syntactic class of a literal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LitKind {
    Bool,
    Null,
    Str,
    Char,
    Number,
}

/// A literal and its source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Literal {
    pub kind: LitKind,
    pub text: Name,
}

/// Expression variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Placeholder for an operand the parser could not find.
    Error,

    Literal(Literal),

    Ident(Name),

    /// `receiver.name(args)` or `name(args)`; `receiver` is
    /// [`ExprId::INVALID`] when absent.
    MethodCall {
        receiver: ExprId,
        name: Name,
        args: ExprRange,
    },

    /// `receiver.name`
    FieldAccess { receiver: ExprId, name: Name },

    Unary { op: UnaryOp, operand: ExprId },

    Paren(ExprId),

    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// Chain of three or more operands joined by the same operator.
    Nary { op: BinaryOp, operands: ExprRange },

    /// `cond ? then_branch : else_branch`
    Conditional {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },
}

impl ExprKind {
    #[inline]
    pub fn is_method_call(&self) -> bool {
        matches!(self, ExprKind::MethodCall { .. })
    }

    #[inline]
    pub fn is_literal(&self) -> bool {
        matches!(self, ExprKind::Literal(_))
    }

    #[inline]
    pub fn literal_kind(&self) -> Option<LitKind> {
        match self {
            ExprKind::Literal(lit) => Some(lit.kind),
            _ => None,
        }
    }

    /// Operator of a binary or n-ary node.
    #[inline]
    pub fn infix_op(&self) -> Option<BinaryOp> {
        match self {
            ExprKind::Binary { op, .. } | ExprKind::Nary { op, .. } => Some(*op),
            _ => None,
        }
    }
}
