//! Printer for expression trees.
//!
//! Turns an arena subtree back into single-line source text. The output
//! re-parses to the same tree shape: besides explicit parentheses, the
//! printer wraps any operand whose operator binds more loosely than its
//! position allows (see [`parentheses`]).
//!
//! Spacing is fixed: one space around binary operators, `", "` between
//! arguments, no space after prefix operators or around `.`, except
//! between two `-` or two `+` prefixes (`- -a`).

mod emitter;
mod formatter;
pub mod parentheses;

pub use emitter::{Emitter, StringEmitter};
pub use formatter::Formatter;

use spartan_ir::{ExprArena, ExprId, StringInterner};

/// Print the subtree at `id` to a string.
pub fn format_expr(arena: &ExprArena, interner: &StringInterner, id: ExprId) -> String {
    let mut formatter = Formatter::new(arena, interner, StringEmitter::with_capacity(64));
    formatter.emit_expr(id);
    formatter.finish().output()
}

#[cfg(test)]
mod tests;
