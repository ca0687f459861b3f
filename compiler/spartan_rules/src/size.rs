//! Operand weight.
//!
//! Everything that decides "which operand is larger" goes through
//! [`is_larger`]: node count first, argument count when comparing two
//! calls, source length last.

use spartan_ir::visitor::{walk_expr, Visitor};
use spartan_ir::{Expr, ExprArena, ExprId, ExprKind};

/// Node-count margin an operand must exceed before it counts as larger
/// on node count alone. Keeps near-equal operands from swapping eagerly.
pub const THRESHOLD: usize = 1;

struct NodeCounter(usize);

impl<'ast> Visitor<'ast> for NodeCounter {
    fn visit_expr(&mut self, _id: ExprId, expr: &'ast Expr, arena: &'ast ExprArena) {
        self.0 += match expr.kind {
            // The method or field name is a node of its own.
            ExprKind::MethodCall { .. } | ExprKind::FieldAccess { .. } => 2,
            _ => 1,
        };
        walk_expr(self, expr, arena);
    }
}

/// Number of nodes in the subtree at `id`; zero if `id` is absent.
pub fn node_count(arena: &ExprArena, id: ExprId) -> usize {
    let mut counter = NodeCounter(0);
    counter.visit_expr_id(id, arena);
    counter.0
}

fn arg_count(arena: &ExprArena, id: ExprId) -> Option<usize> {
    match arena.kind(id) {
        ExprKind::MethodCall { args, .. } => Some(args.len()),
        _ => None,
    }
}

/// True if `a` should be ordered after `b`.
///
/// 1. An operand that has more than [`THRESHOLD`] extra nodes is larger,
///    and one with more than [`THRESHOLD`] fewer nodes is not.
/// 2. Between two method calls, the one with more arguments is larger.
/// 3. Otherwise the one with the longer source text is larger.
///
/// Missing operands are never larger or smaller than anything.
pub fn is_larger(arena: &ExprArena, a: ExprId, b: ExprId) -> bool {
    if arena.is_missing(a) || arena.is_missing(b) {
        return false;
    }
    let (na, nb) = (node_count(arena, a), node_count(arena, b));
    if na > THRESHOLD + nb {
        return true;
    }
    if nb > THRESHOLD + na {
        return false;
    }
    match (arg_count(arena, a), arg_count(arena, b)) {
        (Some(args_a), Some(args_b)) => args_a > args_b,
        _ => arena.span(a).len() > arena.span(b).len(),
    }
}

#[cfg(test)]
mod tests;
