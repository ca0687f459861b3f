//! The canonicalizer.
//!
//! [`Canonicalizer::transpose`] reads a subtree from a source arena and
//! writes its canonical form into a destination arena, bottom-up:
//!
//! 1. Operands are canonicalized first.
//! 2. A flip-able node whose left operand [`is_larger`] than its right, and
//!    whose pair is not exempt, has the two swapped and its operator
//!    replaced by the [converse](crate::operators::converse).
//! 3. An n-ary node is then sorted by [`sort_infix`](sort::sort_infix).
//!
//! An infix node with a missing operand (a parse error) skips steps 2 and 3
//! but its present operands are still canonicalized.
//!
//! Every other node kind is copied with its children canonicalized. The
//! source arena is never modified; node spans are carried over unchanged, so
//! operand lengths are the same before and after a rewrite.

mod sort;

use smallvec::SmallVec;
use spartan_ir::{BinaryOp, Expr, ExprArena, ExprId, ExprKind};
use spartan_stack::ensure_sufficient_stack;

use crate::operators::{converse, is_flipable};
use crate::policy::ExceptionPolicy;
use crate::size::is_larger;

pub(crate) use sort::sort_infix;

/// Operand sequence of one infix node.
pub(crate) type Operands = SmallVec<[ExprId; 8]>;

/// Result of canonicalizing one subtree.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Transposed {
    /// Root of the canonical subtree, in the destination arena.
    pub id: ExprId,
    /// False means the subtree at `id` is structurally identical to the
    /// input.
    pub changed: bool,
}

/// Canonicalizes subtrees of one source arena under a fixed policy.
#[derive(Copy, Clone)]
pub struct Canonicalizer<'a> {
    src: &'a ExprArena,
    policy: ExceptionPolicy,
}

impl<'a> Canonicalizer<'a> {
    pub fn new(src: &'a ExprArena, policy: ExceptionPolicy) -> Self {
        Canonicalizer { src, policy }
    }

    pub fn policy(&self) -> ExceptionPolicy {
        self.policy
    }

    /// Write the canonical form of `id` into `dst`.
    pub fn transpose(&self, id: ExprId, dst: &mut ExprArena) -> Transposed {
        if !id.is_valid() {
            return Transposed {
                id: ExprId::INVALID,
                changed: false,
            };
        }
        ensure_sufficient_stack(|| {
            let expr = *self.src.get_expr(id);
            match expr.kind {
                ExprKind::Binary { op, left, right } => {
                    self.transpose_infix(expr, op, &[left, right], dst)
                }
                ExprKind::Nary { op, operands } => {
                    self.transpose_infix(expr, op, self.src.get_expr_list(operands), dst)
                }
                _ => self.transpose_children(id, dst),
            }
        })
    }

    /// Copy a non-infix node, canonicalizing whatever sits beneath it.
    fn transpose_children(&self, id: ExprId, dst: &mut ExprArena) -> Transposed {
        let mut changed = false;
        let id = self
            .src
            .rebuild(id, dst, &mut |child: ExprId, dst: &mut ExprArena| {
                let t = self.transpose(child, dst);
                changed |= t.changed;
                t.id
            });
        Transposed { id, changed }
    }

    fn transpose_infix(
        &self,
        expr: Expr,
        op: BinaryOp,
        operands: &[ExprId],
        dst: &mut ExprArena,
    ) -> Transposed {
        let mut changed = false;
        let mut ops: Operands = SmallVec::with_capacity(operands.len());
        let mut incomplete = false;
        for &operand in operands {
            if self.src.is_missing(operand) {
                incomplete = true;
                ops.push(self.src.copy_subtree(operand, dst));
                continue;
            }
            let t = self.transpose(operand, dst);
            changed |= t.changed;
            ops.push(t.id);
        }

        // A node with a missing operand keeps its own order.
        if incomplete {
            return Transposed {
                id: alloc_infix(dst, expr, op, &ops),
                changed,
            };
        }

        let mut op = op;
        if ops.len() >= 2
            && is_flipable(op)
            && should_swap(dst, ops[0], ops[1], op, self.policy)
        {
            tracing::trace!(at = %expr.span, ?op, "swapping operands");
            ops.swap(0, 1);
            op = converse(op);
            changed = true;
        }

        if ops.len() > 2 {
            let (sorted_op, sorted) = sort_infix(dst, &mut ops, op, self.policy);
            op = sorted_op;
            changed |= sorted;
        }

        Transposed {
            id: alloc_infix(dst, expr, op, &ops),
            changed,
        }
    }
}

/// Swap condition shared by binary nodes and the n-ary write-back.
pub(crate) fn should_swap(
    arena: &ExprArena,
    left: ExprId,
    right: ExprId,
    op: BinaryOp,
    policy: ExceptionPolicy,
) -> bool {
    is_larger(arena, left, right) && !policy.exempts_pair(arena, left, right, op)
}

/// Allocate a binary node for two operands, an n-ary node for more.
fn alloc_infix(dst: &mut ExprArena, expr: Expr, op: BinaryOp, operands: &[ExprId]) -> ExprId {
    let kind = match *operands {
        [left, right] => ExprKind::Binary { op, left, right },
        _ => ExprKind::Nary {
            op,
            operands: dst.alloc_expr_list(operands.iter().copied()),
        },
    };
    dst.alloc_expr(Expr::new(kind, expr.span))
}

/// Canonicalize the subtree at `id` of `src` into `dst`.
pub fn transpose(
    src: &ExprArena,
    id: ExprId,
    dst: &mut ExprArena,
    policy: ExceptionPolicy,
) -> Transposed {
    Canonicalizer::new(src, policy).transpose(id, dst)
}
