//! Shortest-operand-first canonicalization.
//!
//! Reorders the operands of commutative and semi-commutative operators so
//! the shorter operand comes first (`ccccc + a` becomes `a + ccccc`,
//! `yyyy > x` becomes `x < yyyy`), and reports where such a rewrite would
//! apply.
//!
//! # Layers
//!
//! - [`operators`]: which operators may be flipped, and their converses
//! - [`size`]: the "is larger" ordering on operands
//! - [`policy`] and the exemption checks built on it: which operands stay put
//! - [`transpose`](mod@transpose): the canonicalizer itself, bottom-up over one subtree
//! - [`ranges`]: merging of reported source ranges
//! - [`rewrite`] / [`find_opportunities`]: the entry points a host calls
//!
//! Every entry point is a pure function of its inputs. Trees are read from
//! one [`ExprArena`](spartan_ir::ExprArena) and results are written to a
//! fresh one; the policy is passed in explicitly.

mod exceptions;
pub mod operators;
pub mod policy;
pub mod ranges;
mod rule;
pub mod size;
pub mod transpose;

pub use operators::{converse, is_flipable};
pub use policy::{BothLiteralsRule, ExceptionPolicy, RightLiteralRule};
pub use ranges::{merge, overlaps, union_into, RangeSet};
pub use rule::{find_opportunities, rewrite, Rewritten, ShortestOperand};
pub use size::{is_larger, node_count, THRESHOLD};
pub use transpose::{transpose, Canonicalizer, Transposed};
