//! Where the printer has to add parentheses.
//!
//! Explicit `Paren` nodes always print. On top of that, a child whose own
//! operator binds more loosely than its position allows is wrapped, so a
//! reordered tree re-parses to the same shape.

use spartan_ir::{BinaryOp, ExprArena, ExprId, ExprKind};

/// Position of a child relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParenPosition {
    /// Receiver of `.name` or `.name(args)`.
    Receiver,

    /// Operand of a prefix operator.
    UnaryOperand,

    /// Operand of a binary or n-ary operator; `leftmost` is true for the
    /// first operand.
    Operand { parent: BinaryOp, leftmost: bool },

    /// Condition of `?:`.
    Condition,
}

/// True if `id` must be wrapped in parentheses at `position`.
pub fn needs_parens(arena: &ExprArena, id: ExprId, position: ParenPosition) -> bool {
    if !id.is_valid() {
        return false;
    }
    let kind = arena.kind(id);
    match position {
        ParenPosition::Receiver | ParenPosition::UnaryOperand => matches!(
            kind,
            ExprKind::Binary { .. }
                | ExprKind::Nary { .. }
                | ExprKind::Conditional { .. }
        ) || (position == ParenPosition::Receiver
            && matches!(kind, ExprKind::Unary { .. })),

        ParenPosition::Operand { parent, leftmost } => match kind.infix_op() {
            Some(op) => {
                let (child, parent_prec) = (op.precedence(), parent.precedence());
                // A leftmost child with the parent's own operator would be
                // absorbed into the parent's chain when re-parsed.
                child > parent_prec || (child == parent_prec && (!leftmost || op == parent))
            }
            None => matches!(kind, ExprKind::Conditional { .. }),
        },

        ParenPosition::Condition => matches!(kind, ExprKind::Conditional { .. }),
    }
}
