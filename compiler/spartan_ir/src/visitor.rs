//! Read-only traversal of an expression arena.
//!
//! Override `visit_*` methods to act on specific nodes and call the matching
//! `walk_*` function to continue into children. The visitor may mutate its
//! own state; the arena stays immutable.
//!
//! ```text
//! struct CountCalls(usize);
//!
//! impl<'ast> Visitor<'ast> for CountCalls {
//!     fn visit_expr(&mut self, id: ExprId, expr: &'ast Expr, arena: &'ast ExprArena) {
//!         if expr.kind.is_method_call() {
//!             self.0 += 1;
//!         }
//!         walk_expr(self, expr, arena);
//!     }
//! }
//! ```

use spartan_stack::ensure_sufficient_stack;

use crate::ast::{Expr, ExprKind};
use crate::{ExprArena, ExprId, ExprRange};

pub trait Visitor<'ast> {
    /// Visit a child reference. Absent children (`ExprId::INVALID`) are
    /// skipped.
    fn visit_expr_id(&mut self, id: ExprId, arena: &'ast ExprArena) {
        if id.is_valid() {
            self.visit_expr(id, arena.get_expr(id), arena);
        }
    }

    fn visit_expr(&mut self, id: ExprId, expr: &'ast Expr, arena: &'ast ExprArena) {
        let _ = id;
        walk_expr(self, expr, arena);
    }
}

/// Visit every child of `expr`, left to right.
pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    expr: &'ast Expr,
    arena: &'ast ExprArena,
) {
    ensure_sufficient_stack(|| match expr.kind {
        ExprKind::Error | ExprKind::Literal(_) | ExprKind::Ident(_) => {}

        ExprKind::MethodCall { receiver, args, .. } => {
            visitor.visit_expr_id(receiver, arena);
            walk_expr_list(visitor, args, arena);
        }
        ExprKind::FieldAccess { receiver, .. } => visitor.visit_expr_id(receiver, arena),
        ExprKind::Unary { operand, .. } => visitor.visit_expr_id(operand, arena),
        ExprKind::Paren(inner) => visitor.visit_expr_id(inner, arena),

        ExprKind::Binary { left, right, .. } => {
            visitor.visit_expr_id(left, arena);
            visitor.visit_expr_id(right, arena);
        }
        ExprKind::Nary { operands, .. } => walk_expr_list(visitor, operands, arena),

        ExprKind::Conditional {
            cond,
            then_branch,
            else_branch,
        } => {
            visitor.visit_expr_id(cond, arena);
            visitor.visit_expr_id(then_branch, arena);
            visitor.visit_expr_id(else_branch, arena);
        }
    });
}

pub fn walk_expr_list<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    range: ExprRange,
    arena: &'ast ExprArena,
) {
    for &id in arena.get_expr_list(range) {
        visitor.visit_expr_id(id, arena);
    }
}
