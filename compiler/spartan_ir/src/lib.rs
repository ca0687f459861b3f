//! Expression tree types for the shortest-operand canonicalizer.
//!
//! This crate is the data contract between a host front end and the rewrite
//! engine in `spartan_rules`:
//! - [`Span`]s for source ranges
//! - [`Name`]s for interned identifier and literal text
//! - [`Expr`] nodes allocated in an [`ExprArena`] and addressed by [`ExprId`]
//! - a read-only [`visitor`]
//!
//! # Design
//!
//! - **Flat trees**: no `Box<Expr>`; children are `ExprId` indices and child
//!   lists are `ExprRange`s.
//! - **Exclusive ownership**: each id has exactly one parent. Rewrites build
//!   a new arena rather than patching an existing one.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod expr_id;
mod interner;
mod name;
mod span;
pub mod visitor;

pub use arena::ExprArena;
pub use ast::{BinaryOp, Expr, ExprKind, LitKind, Literal, UnaryOp};
pub use expr_id::{ExprId, ExprRange};
pub use interner::StringInterner;
pub use name::Name;
pub use span::{Span, SpanError};
