//! Single-line expression printer.

use spartan_ir::{BinaryOp, ExprArena, ExprId, ExprKind, ExprRange, StringInterner, UnaryOp};
use spartan_stack::ensure_sufficient_stack;

use crate::emitter::Emitter;
use crate::parentheses::{needs_parens, ParenPosition};

/// Prints expressions from one arena through an [`Emitter`].
pub struct Formatter<'a, E: Emitter> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    out: E,
}

impl<'a, E: Emitter> Formatter<'a, E> {
    pub fn new(arena: &'a ExprArena, interner: &'a StringInterner, out: E) -> Self {
        Formatter {
            arena,
            interner,
            out,
        }
    }

    /// Consume the formatter, returning its emitter.
    pub fn finish(self) -> E {
        self.out
    }

    /// Print the expression at `id`.
    pub fn emit_expr(&mut self, id: ExprId) {
        if !id.is_valid() {
            return;
        }
        ensure_sufficient_stack(|| self.emit_expr_inner(id));
    }

    fn emit_expr_inner(&mut self, id: ExprId) {
        match *self.arena.kind(id) {
            ExprKind::Error => self.out.emit("/* error */"),
            ExprKind::Literal(lit) => self.out.emit(self.interner.lookup(lit.text)),
            ExprKind::Ident(name) => self.out.emit(self.interner.lookup(name)),
            ExprKind::MethodCall {
                receiver,
                name,
                args,
            } => {
                if receiver.is_valid() {
                    self.emit_child(receiver, ParenPosition::Receiver);
                    self.out.emit(".");
                }
                self.out.emit(self.interner.lookup(name));
                self.emit_args(args);
            }
            ExprKind::FieldAccess { receiver, name } => {
                self.emit_child(receiver, ParenPosition::Receiver);
                self.out.emit(".");
                self.out.emit(self.interner.lookup(name));
            }
            ExprKind::Unary { op, operand } => {
                self.out.emit(op.as_symbol());
                if self.fuses_with_operand(op, operand) {
                    self.out.emit_space();
                }
                self.emit_child(operand, ParenPosition::UnaryOperand);
            }
            ExprKind::Paren(inner) => {
                self.out.emit("(");
                self.emit_expr(inner);
                self.out.emit(")");
            }
            ExprKind::Binary { op, left, right } => {
                self.emit_operands(op, &[left, right]);
            }
            ExprKind::Nary { op, operands } => {
                let arena = self.arena;
                self.emit_operands(op, arena.get_expr_list(operands));
            }
            ExprKind::Conditional {
                cond,
                then_branch,
                else_branch,
            } => {
                self.emit_child(cond, ParenPosition::Condition);
                self.out.emit_space();
                self.out.emit("?");
                self.out.emit_space();
                self.emit_expr(then_branch);
                self.out.emit_space();
                self.out.emit(":");
                self.out.emit_space();
                self.emit_expr(else_branch);
            }
        }
    }

    /// True if printing `op` directly before `operand` would read as `--` or
    /// `++`, which lex as a single decrement or increment token.
    fn fuses_with_operand(&self, op: UnaryOp, operand: ExprId) -> bool {
        if !operand.is_valid() || !matches!(op, UnaryOp::Neg | UnaryOp::Plus) {
            return false;
        }
        matches!(*self.arena.kind(operand), ExprKind::Unary { op: inner, .. } if inner == op)
    }

    fn emit_operands(&mut self, op: BinaryOp, operands: &[ExprId]) {
        for (i, &operand) in operands.iter().enumerate() {
            if i > 0 {
                self.out.emit_space();
                self.out.emit(op.as_symbol());
                self.out.emit_space();
            }
            let position = ParenPosition::Operand {
                parent: op,
                leftmost: i == 0,
            };
            self.emit_child(operand, position);
        }
    }

    fn emit_args(&mut self, args: ExprRange) {
        let arena = self.arena;
        self.out.emit("(");
        for (i, &arg) in arena.get_expr_list(args).iter().enumerate() {
            if i > 0 {
                self.out.emit(",");
                self.out.emit_space();
            }
            self.emit_expr(arg);
        }
        self.out.emit(")");
    }

    /// Emit a child, wrapping it in parentheses if its position requires.
    fn emit_child(&mut self, id: ExprId, position: ParenPosition) {
        if needs_parens(self.arena, id, position) {
            self.out.emit("(");
            self.emit_expr(id);
            self.out.emit(")");
        } else {
            self.emit_expr(id);
        }
    }
}
