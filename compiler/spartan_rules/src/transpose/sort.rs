//! Ordering the operands of an n-ary chain.
//!
//! Two bounded bubble passes run in a fixed order: first method calls sink
//! towards the back, then the remaining operands are ordered by size. The
//! two orderings do not compose into one comparator (calls are excluded
//! from the size order, and exempt operands act as barriers in both), so
//! they stay separate passes.

use spartan_ir::{BinaryOp, ExprArena, ExprId};

use super::{should_swap, Operands};
use crate::operators::{converse, is_flipable};
use crate::policy::ExceptionPolicy;
use crate::size::is_larger;

/// Sort `ops` in place and return the (possibly flipped) operator with
/// whether anything moved.
///
/// Only flip-able operators with three or more operands are sorted. After
/// both passes the first two operands get the same swap test as a binary
/// node.
pub(crate) fn sort_infix(
    arena: &ExprArena,
    ops: &mut Operands,
    op: BinaryOp,
    policy: ExceptionPolicy,
) -> (BinaryOp, bool) {
    if !is_flipable(op) || ops.len() < 3 {
        return (op, false);
    }

    let mut changed = move_calls_back(arena, ops, op, policy);
    changed |= order_by_size(arena, ops, op, policy);

    let mut op = op;
    if should_swap(arena, ops[0], ops[1], op, policy) {
        ops.swap(0, 1);
        op = converse(op);
        changed = true;
    }
    (op, changed)
}

fn is_call(arena: &ExprArena, id: ExprId) -> bool {
    arena.kind(id).is_method_call()
}

/// Pass 1: step a call right past a non-call, unless either is exempt.
///
/// Calls never pass each other, so their relative order is kept.
fn move_calls_back(
    arena: &ExprArena,
    ops: &mut Operands,
    op: BinaryOp,
    policy: ExceptionPolicy,
) -> bool {
    bubble(ops, |l, s| {
        is_call(arena, l)
            && !is_call(arena, s)
            && !policy.exempts_operand(arena, l, op)
            && !policy.exempts_operand(arena, s, op)
    })
}

/// Pass 2: step a larger operand right past a smaller one. Calls and
/// exempt operands (in either position) stay where they are.
fn order_by_size(
    arena: &ExprArena,
    ops: &mut Operands,
    op: BinaryOp,
    policy: ExceptionPolicy,
) -> bool {
    let movable = |id: ExprId| {
        !is_call(arena, id)
            && !policy.exempts_operand(arena, id, op)
            && !policy.exempts_right_operand(arena, id, op)
    };
    bubble(ops, |l, s| movable(l) && movable(s) && is_larger(arena, l, s))
}

/// At most `ops.len()` sweeps of adjacent swaps wherever `swap(left, right)`
/// holds. Returns whether any swap happened.
fn bubble(ops: &mut Operands, mut swap: impl FnMut(ExprId, ExprId) -> bool) -> bool {
    let mut changed = false;
    for _ in 0..ops.len() {
        let mut swept = false;
        for j in 0..ops.len() - 1 {
            if swap(ops[j], ops[j + 1]) {
                ops.swap(j, j + 1);
                swept = true;
            }
        }
        if !swept {
            break;
        }
        changed = true;
    }
    changed
}
