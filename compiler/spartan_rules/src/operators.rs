//! Which operators may have their operands swapped, and what they become.

use spartan_ir::BinaryOp;

/// True if swapping the operands of `op` preserves meaning, possibly after
/// replacing `op` by its [`converse`].
///
/// `&`, `|` and `^` qualify; the short-circuit `&&` and `||` do not, since
/// swapping them changes which operand is evaluated.
pub const fn is_flipable(op: BinaryOp) -> bool {
    matches!(
        op,
        BinaryOp::BitAnd
            | BinaryOp::BitOr
            | BinaryOp::BitXor
            | BinaryOp::Eq
            | BinaryOp::NotEq
            | BinaryOp::Add
            | BinaryOp::Mul
            | BinaryOp::Gt
            | BinaryOp::GtEq
            | BinaryOp::Lt
            | BinaryOp::LtEq
    )
}

/// The operator that keeps `a op b` true when written as `b op' a`.
///
/// `<` and `>` trade places, as do `<=` and `>=`; every other operator is
/// its own converse.
pub const fn converse(op: BinaryOp) -> BinaryOp {
    match op {
        BinaryOp::Gt => BinaryOp::Lt,
        BinaryOp::Lt => BinaryOp::Gt,
        BinaryOp::GtEq => BinaryOp::LtEq,
        BinaryOp::LtEq => BinaryOp::GtEq,
        other => other,
    }
}
