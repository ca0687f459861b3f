//! Expression tree node types.

mod expr;
mod operators;

pub use expr::{Expr, ExprKind, LitKind, Literal};
pub use operators::{BinaryOp, UnaryOp};
