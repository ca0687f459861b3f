//! Arena storage for expression trees.
//!
//! Nodes live in one contiguous vector and refer to children by [`ExprId`].
//! Child lists (call arguments, n-ary operands) live in a second vector and
//! are addressed by [`ExprRange`].
//!
//! Trees are immutable once built. A pass that rewrites a tree allocates
//! into a fresh arena, copying any subtree it keeps with
//! [`ExprArena::copy_subtree`], so no node is ever reachable from two
//! parents.

use spartan_stack::ensure_sufficient_stack;

use crate::ast::{Expr, ExprKind};
use crate::{ExprId, ExprRange, Span};

#[derive(Clone, Default, Debug)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    expr_lists: Vec<ExprId>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize) -> Self {
        ExprArena {
            exprs: Vec::with_capacity(nodes),
            expr_lists: Vec::with_capacity(nodes / 2),
        }
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let index = u32::try_from(self.exprs.len()).unwrap_or(u32::MAX - 1);
        self.exprs.push(expr);
        ExprId::new(index)
    }

    /// Store `ids` contiguously and return their range.
    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = u32::try_from(self.expr_lists.len()).unwrap_or(u32::MAX);
        self.expr_lists.extend(ids);
        let end = u32::try_from(self.expr_lists.len()).unwrap_or(u32::MAX);
        ExprRange::new(start, end - start)
    }

    /// # Panics
    /// Panics if `id` does not belong to this arena.
    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.get_expr(id).kind
    }

    #[inline]
    pub fn span(&self, id: ExprId) -> Span {
        self.get_expr(id).span
    }

    /// # Panics
    /// Panics if `range` does not belong to this arena.
    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    /// True for an absent child or a parser placeholder.
    #[inline]
    pub fn is_missing(&self, id: ExprId) -> bool {
        !id.is_valid() || matches!(self.kind(id), ExprKind::Error)
    }

    /// Operands of a binary or n-ary node, in order. Empty for other kinds.
    pub fn operands(&self, id: ExprId) -> Vec<ExprId> {
        match *self.kind(id) {
            ExprKind::Binary { left, right, .. } => vec![left, right],
            ExprKind::Nary { operands, .. } => self.get_expr_list(operands).to_vec(),
            _ => Vec::new(),
        }
    }

    /// Deep-copy the subtree at `id` into `dst`, returning the copy's id.
    pub fn copy_subtree(&self, id: ExprId, dst: &mut ExprArena) -> ExprId {
        if !id.is_valid() {
            return ExprId::INVALID;
        }
        ensure_sufficient_stack(|| {
            self.rebuild(id, dst, &mut |child: ExprId, dst: &mut ExprArena| {
                self.copy_subtree(child, dst)
            })
        })
    }

    /// Allocate a shallow copy of `id` in `dst` whose children are produced
    /// by `child`.
    ///
    /// `child` is called once per present child, left to right, and must
    /// return an id in `dst`. Absent children stay absent.
    pub fn rebuild<F>(&self, id: ExprId, dst: &mut ExprArena, child: &mut F) -> ExprId
    where
        F: FnMut(ExprId, &mut ExprArena) -> ExprId,
    {
        let expr = *self.get_expr(id);
        let mut one = |c: ExprId, dst: &mut ExprArena| {
            if c.is_valid() {
                child(c, dst)
            } else {
                ExprId::INVALID
            }
        };
        let kind = match expr.kind {
            ExprKind::Error | ExprKind::Literal(_) | ExprKind::Ident(_) => expr.kind,
            ExprKind::MethodCall {
                receiver,
                name,
                args,
            } => {
                let receiver = one(receiver, dst);
                let args: Vec<ExprId> = self
                    .get_expr_list(args)
                    .iter()
                    .map(|&arg| one(arg, dst))
                    .collect();
                ExprKind::MethodCall {
                    receiver,
                    name,
                    args: dst.alloc_expr_list(args),
                }
            }
            ExprKind::FieldAccess { receiver, name } => ExprKind::FieldAccess {
                receiver: one(receiver, dst),
                name,
            },
            ExprKind::Unary { op, operand } => ExprKind::Unary {
                op,
                operand: one(operand, dst),
            },
            ExprKind::Paren(inner) => ExprKind::Paren(one(inner, dst)),
            ExprKind::Binary { op, left, right } => {
                let left = one(left, dst);
                let right = one(right, dst);
                ExprKind::Binary { op, left, right }
            }
            ExprKind::Nary { op, operands } => {
                let operands: Vec<ExprId> = self
                    .get_expr_list(operands)
                    .iter()
                    .map(|&operand| one(operand, dst))
                    .collect();
                ExprKind::Nary {
                    op,
                    operands: dst.alloc_expr_list(operands),
                }
            }
            ExprKind::Conditional {
                cond,
                then_branch,
                else_branch,
            } => {
                let cond = one(cond, dst);
                let then_branch = one(then_branch, dst);
                let else_branch = one(else_branch, dst);
                ExprKind::Conditional {
                    cond,
                    then_branch,
                    else_branch,
                }
            }
        };
        dst.alloc_expr(Expr::new(kind, expr.span))
    }

    /// Structural equality of two subtrees, possibly in different arenas.
    ///
    /// Compares kinds, operators, operand order, names and spans; ignores
    /// where the nodes happen to sit in their arenas.
    pub fn same_tree(&self, a: ExprId, other: &ExprArena, b: ExprId) -> bool {
        match (a.is_valid(), b.is_valid()) {
            (false, false) => return true,
            (true, true) => {}
            _ => return false,
        }
        ensure_sufficient_stack(|| {
            let (x, y) = (self.get_expr(a), other.get_expr(b));
            if x.span != y.span {
                return false;
            }
            match (x.kind, y.kind) {
                (ExprKind::Error, ExprKind::Error) => true,
                (ExprKind::Literal(l), ExprKind::Literal(r)) => l == r,
                (ExprKind::Ident(l), ExprKind::Ident(r)) => l == r,
                (
                    ExprKind::MethodCall {
                        receiver: lr,
                        name: ln,
                        args: la,
                    },
                    ExprKind::MethodCall {
                        receiver: rr,
                        name: rn,
                        args: ra,
                    },
                ) => ln == rn && self.same_tree(lr, other, rr) && self.same_list(la, other, ra),
                (
                    ExprKind::FieldAccess {
                        receiver: lr,
                        name: ln,
                    },
                    ExprKind::FieldAccess {
                        receiver: rr,
                        name: rn,
                    },
                ) => ln == rn && self.same_tree(lr, other, rr),
                (
                    ExprKind::Unary {
                        op: lo,
                        operand: l,
                    },
                    ExprKind::Unary {
                        op: ro,
                        operand: r,
                    },
                ) => lo == ro && self.same_tree(l, other, r),
                (ExprKind::Paren(l), ExprKind::Paren(r)) => self.same_tree(l, other, r),
                (
                    ExprKind::Binary {
                        op: lo,
                        left: ll,
                        right: lr,
                    },
                    ExprKind::Binary {
                        op: ro,
                        left: rl,
                        right: rr,
                    },
                ) => lo == ro && self.same_tree(ll, other, rl) && self.same_tree(lr, other, rr),
                (
                    ExprKind::Nary {
                        op: lo,
                        operands: l,
                    },
                    ExprKind::Nary {
                        op: ro,
                        operands: r,
                    },
                ) => lo == ro && self.same_list(l, other, r),
                (
                    ExprKind::Conditional {
                        cond: lc,
                        then_branch: lt,
                        else_branch: le,
                    },
                    ExprKind::Conditional {
                        cond: rc,
                        then_branch: rt,
                        else_branch: re,
                    },
                ) => {
                    self.same_tree(lc, other, rc)
                        && self.same_tree(lt, other, rt)
                        && self.same_tree(le, other, re)
                }
                _ => false,
            }
        })
    }

    fn same_list(&self, a: ExprRange, other: &ExprArena, b: ExprRange) -> bool {
        let (l, r) = (self.get_expr_list(a), other.get_expr_list(b));
        l.len() == r.len()
            && l.iter()
                .zip(r)
                .all(|(&x, &y)| self.same_tree(x, other, y))
    }
}
