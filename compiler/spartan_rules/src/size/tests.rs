use spartan_ir::{ExprArena, ExprId, ExprKind, StringInterner};
use spartan_parse::parse;

use super::*;

/// Parses `probe(a, b)` and returns the arena with the two arguments.
fn pair(a: &str, b: &str) -> (ExprArena, ExprId, ExprId) {
    let mut interner = StringInterner::new();
    let output = parse(&format!("probe({a}, {b})"), &mut interner);
    let ExprKind::MethodCall { args, .. } = *output.arena.kind(output.root) else {
        panic!("expected call");
    };
    let args = output.arena.get_expr_list(args).to_vec();
    (output.arena, args[0], args[1])
}

fn count(text: &str) -> usize {
    let mut interner = StringInterner::new();
    let output = parse(text, &mut interner);
    assert!(output.errors.is_empty(), "{:?}", output.errors);
    node_count(&output.arena, output.root)
}

#[test]
fn node_counts() {
    assert_eq!(count("a"), 1);
    assert_eq!(count("42"), 1);
    assert_eq!(count("f()"), 2);
    assert_eq!(count("a.f(b)"), 4);
    assert_eq!(count("x.y"), 3);
    assert_eq!(count("a + b"), 3);
    assert_eq!(count("a + b + c"), 4);
    assert_eq!(count("-(a)"), 3);
    assert_eq!(node_count(&ExprArena::new(), ExprId::INVALID), 0);
}

#[test]
fn node_count_dominates() {
    let (arena, a, b) = pair("x * y", "averyveryverylongname");
    assert!(is_larger(&arena, a, b));
    assert!(!is_larger(&arena, b, a));
}

#[test]
fn one_extra_node_is_within_threshold() {
    // 2 nodes against 1: falls through to length.
    let (arena, a, b) = pair("-x", "abc");
    assert!(!is_larger(&arena, a, b));
    assert!(is_larger(&arena, b, a));
}

#[test]
fn argument_count_breaks_ties_between_calls() {
    let (arena, a, b) = pair("f(a, b)", "longername(c)");
    assert!(is_larger(&arena, a, b));
    assert!(!is_larger(&arena, b, a));
}

#[test]
fn length_is_the_last_resort() {
    let (arena, a, b) = pair("ccccc", "a");
    assert!(is_larger(&arena, a, b));
    assert!(!is_larger(&arena, b, a));

    let (arena, a, b) = pair("abc", "xyz");
    assert!(!is_larger(&arena, a, b));
    assert!(!is_larger(&arena, b, a));
}

#[test]
fn missing_operands_are_never_larger() {
    let mut interner = StringInterner::new();
    let output = parse("averylongname +", &mut interner);
    let ops = output.arena.operands(output.root);
    assert!(!is_larger(&output.arena, ops[0], ops[1]));
    assert!(!is_larger(&output.arena, ops[1], ops[0]));
    assert!(!is_larger(&output.arena, ops[0], ExprId::INVALID));
}
