//! Property-based tests for the canonicalizer and the range merger.
//!
//! Strategies build source text that the parser turns into trees:
//! 1. Meaning: a canonicalized arithmetic comparison evaluates to the same
//!    value as the input under every assignment.
//! 2. Idempotence: canonicalizing a canonical tree changes nothing.
//! 3. Calls last: in a sorted chain no call precedes a non-call.
//! 4. Range laws: overlap agrees with merge length, merged sets are disjoint.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    clippy::cast_possible_truncation,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use spartan_ir::{BinaryOp, ExprArena, ExprId, ExprKind, Span, StringInterner};
use spartan_parse::parse;
use spartan_rules::{
    find_opportunities, merge, overlaps, transpose, ExceptionPolicy, RangeSet,
};

// -- Code Generation Strategies --

const VARIABLES: [&str; 5] = ["a", "bb", "ccc", "dddd", "eeeee"];

/// Parenthesize compound operands.
fn wrap(text: &str) -> String {
    if text.contains(' ') {
        format!("({text})")
    } else {
        text.to_owned()
    }
}

fn join(items: &[String], op: &str) -> String {
    items
        .iter()
        .map(|item| wrap(item))
        .collect::<Vec<_>>()
        .join(&format!(" {op} "))
}

fn int_leaf() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(VARIABLES.to_vec()).prop_map(str::to_owned),
        (0u32..100).prop_map(|n| n.to_string()),
    ]
}

fn int_expr() -> impl Strategy<Value = String> {
    int_leaf().prop_recursive(3, 24, 5, |inner| {
        (
            prop::collection::vec(inner, 2..5),
            prop::sample::select(vec!["+", "*", "&", "|", "^", "-"]),
        )
            .prop_map(|(items, op)| join(&items, op))
    })
}

fn comparison() -> impl Strategy<Value = String> {
    (
        int_expr(),
        prop::sample::select(vec!["<", ">", "<=", ">=", "==", "!="]),
        int_expr(),
    )
        .prop_map(|(l, op, r)| format!("{} {} {}", wrap(&l), op, wrap(&r)))
}

/// Operands whose pairwise order is a strict weak order: one-node leaves
/// and three-node field accesses, plus calls (which never enter the size
/// order).
fn chain_operand() -> impl Strategy<Value = String> {
    let name = prop::string::string_regex("[a-z]{1,6}")
        .expect("valid regex")
        .prop_filter("not a keyword", |s| {
            !matches!(s.as_str(), "true" | "false" | "null")
        })
        .boxed();
    prop_oneof![
        name.clone(),
        (0u32..10_000).prop_map(|n| n.to_string()),
        (name.clone(), name.clone()).prop_map(|(a, b)| format!("{a}.{b}")),
        (name.clone(), prop::collection::vec(name, 0..3))
            .prop_map(|(f, args)| format!("{f}({})", args.join(", "))),
    ]
}

fn chain(len: std::ops::Range<usize>) -> impl Strategy<Value = String> {
    (
        prop::collection::vec(chain_operand(), len),
        prop::sample::select(vec!["+", "*", "&", "|", "^", "==", "!="]),
    )
        .prop_map(|(items, op)| join(&items, op))
}

fn span() -> impl Strategy<Value = Span> {
    (0u32..100, 0u32..20).prop_map(|(start, len)| Span::new(start, start + len))
}

// -- Evaluation --

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Value {
    Int(i64),
    Bool(bool),
}

fn int(value: Value) -> i64 {
    match value {
        Value::Int(n) => n,
        Value::Bool(b) => panic!("expected an integer, got {b}"),
    }
}

fn apply(op: BinaryOp, l: Value, r: Value) -> Value {
    let (l, r) = (int(l), int(r));
    match op {
        BinaryOp::Add => Value::Int(l.wrapping_add(r)),
        BinaryOp::Sub => Value::Int(l.wrapping_sub(r)),
        BinaryOp::Mul => Value::Int(l.wrapping_mul(r)),
        BinaryOp::BitAnd => Value::Int(l & r),
        BinaryOp::BitOr => Value::Int(l | r),
        BinaryOp::BitXor => Value::Int(l ^ r),
        BinaryOp::Lt => Value::Bool(l < r),
        BinaryOp::Gt => Value::Bool(l > r),
        BinaryOp::LtEq => Value::Bool(l <= r),
        BinaryOp::GtEq => Value::Bool(l >= r),
        BinaryOp::Eq => Value::Bool(l == r),
        BinaryOp::NotEq => Value::Bool(l != r),
        other => panic!("operator {other:?} is not generated"),
    }
}

fn eval(arena: &ExprArena, interner: &StringInterner, id: ExprId, env: &[i64; 5]) -> Value {
    match *arena.kind(id) {
        ExprKind::Ident(name) => {
            let text = interner.lookup(name);
            let slot = VARIABLES.iter().position(|v| *v == text).unwrap();
            Value::Int(env[slot])
        }
        ExprKind::Literal(lit) => Value::Int(interner.lookup(lit.text).parse().unwrap()),
        ExprKind::Paren(inner) => eval(arena, interner, inner, env),
        ExprKind::Binary { op, left, right } => apply(
            op,
            eval(arena, interner, left, env),
            eval(arena, interner, right, env),
        ),
        ExprKind::Nary { op, operands } => {
            let operands = arena.get_expr_list(operands);
            let first = eval(arena, interner, operands[0], env);
            operands[1..].iter().fold(first, |acc, &operand| {
                apply(op, acc, eval(arena, interner, operand, env))
            })
        }
        other => panic!("{other:?} is not generated"),
    }
}

fn is_call(arena: &ExprArena, id: ExprId) -> bool {
    arena.kind(id).is_method_call()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn canonical_form_keeps_meaning(
        source in comparison(),
        env in prop::array::uniform5(-8i64..8),
    ) {
        let mut interner = StringInterner::new();
        let output = parse(&source, &mut interner);
        prop_assert!(output.errors.is_empty(), "{}: {:?}", source, output.errors);

        let mut canonical = ExprArena::new();
        let result = transpose(&output.arena, output.root, &mut canonical, ExceptionPolicy::default());

        prop_assert_eq!(
            eval(&output.arena, &interner, output.root, &env),
            eval(&canonical, &interner, result.id, &env)
        );
    }

    #[test]
    fn canonicalizing_twice_changes_nothing(source in chain(2..7)) {
        let mut interner = StringInterner::new();
        let output = parse(&source, &mut interner);
        prop_assert!(output.errors.is_empty(), "{}: {:?}", source, output.errors);
        let policy = ExceptionPolicy::default();

        let mut once = ExprArena::new();
        let first = transpose(&output.arena, output.root, &mut once, policy);
        let mut twice = ExprArena::new();
        let second = transpose(&once, first.id, &mut twice, policy);

        prop_assert!(!second.changed, "{}", source);
        prop_assert!(once.same_tree(first.id, &twice, second.id), "{}", source);
        prop_assert!(find_opportunities(&once, first.id, policy).is_empty(), "{}", source);
    }

    #[test]
    fn calls_end_up_last(source in chain(3..8)) {
        let mut interner = StringInterner::new();
        let output = parse(&source, &mut interner);
        prop_assert!(output.errors.is_empty(), "{}: {:?}", source, output.errors);

        let mut canonical = ExprArena::new();
        let result = transpose(&output.arena, output.root, &mut canonical, ExceptionPolicy::default());
        let operands = canonical.operands(result.id);
        if let Some(first_call) = operands.iter().position(|&id| is_call(&canonical, id)) {
            prop_assert!(
                operands[first_call..].iter().all(|&id| is_call(&canonical, id)),
                "{}", source
            );
        }
    }

    #[test]
    fn overlap_agrees_with_merge(a in span(), b in span()) {
        let merged = merge(a, b);
        prop_assert_eq!(overlaps(a, b), merged.len() <= a.len() + b.len());
        prop_assert_eq!(overlaps(a, b), overlaps(b, a));
        prop_assert!(merged.contains_span(a) && merged.contains_span(b));
    }

    #[test]
    fn range_set_is_sorted_and_disjoint(spans in prop::collection::vec(span(), 0..20)) {
        let set: RangeSet = spans.iter().copied().collect();
        for pair in set.as_slice().windows(2) {
            prop_assert!(pair[0].end < pair[1].start, "{:?}", set);
        }
        for r in &spans {
            prop_assert!(set.iter().any(|entry| entry.contains_span(*r)), "{:?} lost", r);
        }
    }
}
