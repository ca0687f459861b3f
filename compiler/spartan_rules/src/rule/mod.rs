//! The two entry points a host calls: rewrite a range, or find where a
//! rewrite would apply.

use spartan_ir::visitor::{walk_expr, Visitor};
use spartan_ir::{Expr, ExprArena, ExprId, Span};
use spartan_stack::ensure_sufficient_stack;

use crate::policy::ExceptionPolicy;
use crate::ranges::{overlaps, RangeSet};
use crate::transpose::Canonicalizer;

/// Output of [`rewrite`]: a complete copy of the input tree with every
/// in-range operator node in canonical form.
#[derive(Clone, Debug)]
pub struct Rewritten {
    pub arena: ExprArena,
    pub root: ExprId,
    /// False means the tree at `root` is structurally identical to the input.
    pub changed: bool,
}

/// Canonicalize every binary or n-ary node of the tree at `root` whose span
/// overlaps `range` and whose operands are all present.
///
/// A node that gets canonicalized is replaced together with its subtree;
/// everything else is copied as is. The input is not modified.
#[tracing::instrument(level = "debug", skip(arena, policy), fields(nodes = arena.len()))]
pub fn rewrite(arena: &ExprArena, root: ExprId, range: Span, policy: ExceptionPolicy) -> Rewritten {
    let mut splice = Splice {
        src: arena,
        canon: Canonicalizer::new(arena, policy),
        range,
        changed: false,
    };
    let mut out = ExprArena::with_capacity(arena.len());
    let root = splice.copy(root, &mut out);
    if splice.changed {
        tracing::debug!("tree rewritten");
    }
    Rewritten {
        arena: out,
        root,
        changed: splice.changed,
    }
}

struct Splice<'a> {
    src: &'a ExprArena,
    canon: Canonicalizer<'a>,
    range: Span,
    changed: bool,
}

impl Splice<'_> {
    fn copy(&mut self, id: ExprId, dst: &mut ExprArena) -> ExprId {
        if !id.is_valid() {
            return ExprId::INVALID;
        }
        ensure_sufficient_stack(|| {
            let src = self.src;
            let expr = src.get_expr(id);
            if self.applies_to(id, expr) {
                let result = self.canon.transpose(id, dst);
                self.changed |= result.changed;
                return result.id;
            }
            src.rebuild(id, dst, &mut |child: ExprId, dst: &mut ExprArena| {
                self.copy(child, dst)
            })
        })
    }

    fn applies_to(&self, id: ExprId, expr: &Expr) -> bool {
        expr.kind.infix_op().is_some()
            && overlaps(expr.span, self.range)
            && !self
                .src
                .operands(id)
                .iter()
                .any(|&operand| self.src.is_missing(operand))
    }
}

/// Ranges where [`rewrite`] would change something, for highlighting.
///
/// For each binary or n-ary node whose canonical form differs from it, the
/// span of its parent is recorded (the node's own span at the root). The
/// result is sorted and pairwise non-overlapping.
#[tracing::instrument(level = "debug", skip(arena, policy), fields(nodes = arena.len()))]
pub fn find_opportunities(arena: &ExprArena, root: ExprId, policy: ExceptionPolicy) -> Vec<Span> {
    let mut finder = OpportunityFinder {
        canon: Canonicalizer::new(arena, policy),
        parents: Vec::new(),
        found: RangeSet::new(),
    };
    finder.visit_expr_id(root, arena);
    tracing::debug!(count = finder.found.len(), "opportunities found");
    finder.found.into_vec()
}

struct OpportunityFinder<'a> {
    canon: Canonicalizer<'a>,
    /// Spans of the nodes enclosing the one being visited.
    parents: Vec<Span>,
    found: RangeSet,
}

impl<'ast> Visitor<'ast> for OpportunityFinder<'_> {
    fn visit_expr(&mut self, id: ExprId, expr: &'ast Expr, arena: &'ast ExprArena) {
        if expr.kind.infix_op().is_some() {
            let mut scratch = ExprArena::new();
            if self.canon.transpose(id, &mut scratch).changed {
                let at = self.parents.last().copied().unwrap_or(expr.span);
                tracing::trace!(node = %expr.span, at = %at, "opportunity");
                self.found.insert(at);
            }
        }
        self.parents.push(expr.span);
        walk_expr(self, expr, arena);
        self.parents.pop();
    }
}

/// The shortest-operand rule bundled with its settings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ShortestOperand {
    pub policy: ExceptionPolicy,
}

impl ShortestOperand {
    pub const NAME: &'static str = "Shortest operand first";
    pub const DESCRIPTION: &'static str =
        "Make the shortest operand first in a binary commutative or semi-commutative operator";

    pub const fn new(policy: ExceptionPolicy) -> Self {
        ShortestOperand { policy }
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    pub fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    /// See [`rewrite`].
    pub fn rewrite(&self, arena: &ExprArena, root: ExprId, range: Span) -> Rewritten {
        rewrite(arena, root, range, self.policy)
    }

    /// See [`find_opportunities`].
    pub fn opportunities(&self, arena: &ExprArena, root: ExprId) -> Vec<Span> {
        find_opportunities(arena, root, self.policy)
    }
}
