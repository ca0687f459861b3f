//! Operands exempt from reordering.
//!
//! An exempt operand keeps its position relative to the sibling it is
//! compared with. Exemptions come from two places: fixed syntactic rules
//! (method calls, string literals under `+`) and the literal rules of the
//! [`ExceptionPolicy`].

use spartan_ir::{BinaryOp, ExprArena, ExprId, ExprKind, LitKind};

use crate::policy::{BothLiteralsRule, ExceptionPolicy, RightLiteralRule};

fn is_call(arena: &ExprArena, id: ExprId) -> bool {
    arena.kind(id).is_method_call()
}

fn is_string_literal(arena: &ExprArena, id: ExprId) -> bool {
    arena.kind(id).literal_kind() == Some(LitKind::Str)
}

impl ExceptionPolicy {
    /// Exempt in any position: every literal when literals may not move,
    /// and string literals under `+` (concatenation is not commutative).
    pub fn exempts_operand(&self, arena: &ExprArena, id: ExprId, op: BinaryOp) -> bool {
        (self.both_literals == BothLiteralsRule::None && arena.kind(id).is_literal())
            || (op == BinaryOp::Add && is_string_literal(arena, id))
    }

    /// Exempt when sitting on the right-hand side of `op`.
    pub fn exempts_right_operand(&self, arena: &ExprArena, id: ExprId, op: BinaryOp) -> bool {
        if is_call(arena, id) || self.exempts_operand(arena, id, op) {
            return true;
        }
        match self.right_literal {
            RightLiteralRule::All => false,
            RightLiteralRule::AllButBooleanAndNull => matches!(
                arena.kind(id),
                ExprKind::Literal(lit) if matches!(lit.kind, LitKind::Bool | LitKind::Null)
            ),
            RightLiteralRule::None => arena.kind(id).is_literal(),
        }
    }

    /// Whether `left op right` must keep its operand order.
    pub fn exempts_pair(
        &self,
        arena: &ExprArena,
        left: ExprId,
        right: ExprId,
        op: BinaryOp,
    ) -> bool {
        (is_call(arena, left) && is_call(arena, right))
            || self.exempts_operand(arena, left, op)
            || self.exempts_operand(arena, right, op)
            || self.exempts_right_operand(arena, right, op)
    }
}
