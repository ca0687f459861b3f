use pretty_assertions::assert_eq;
use spartan_ir::{BinaryOp, Expr, ExprArena, ExprId, ExprKind, Span, StringInterner};
use spartan_parse::parse;

use super::*;

/// Parse and print back.
fn reprint(source: &str) -> String {
    let mut interner = StringInterner::new();
    let output = parse(source, &mut interner);
    assert!(output.errors.is_empty(), "{source}: {:?}", output.errors);
    format_expr(&output.arena, &interner, output.root)
}

#[test]
fn normalizes_spacing() {
    assert_eq!(reprint("a+b*c"), "a + b * c");
    assert_eq!(reprint("f( x ,y )  ==  list . size ( )"), "f(x, y) == list.size()");
    assert_eq!(reprint("!done&&-x>~y"), "!done && -x > ~y");
    assert_eq!(reprint("c?a:b"), "c ? a : b");
}

#[test]
fn repeated_sign_prefixes_stay_apart() {
    assert_eq!(reprint("- -a"), "- -a");
    assert_eq!(reprint("+ +x"), "+ +x");
    assert_eq!(reprint("- -(-a)"), "- -(-a)");
    assert_eq!(reprint("- - -a"), "- - -a");
    assert_eq!(reprint("-+a"), "-+a");
    assert_eq!(reprint("!!done"), "!!done");
    assert_eq!(reprint("b - -a"), "b - -a");
}

#[test]
fn keeps_explicit_parens() {
    assert_eq!(reprint("(a + b) * c"), "(a + b) * c");
    assert_eq!(reprint("((x))"), "((x))");
}

#[test]
fn literal_text_is_verbatim() {
    assert_eq!(
        reprint(r#"s == "a \"q\"" || c == '\n' || n == 0x1FL"#),
        r#"s == "a \"q\"" || c == '\n' || n == 0x1FL"#
    );
}

#[test]
fn error_nodes_are_marked() {
    let mut interner = StringInterner::new();
    let output = parse("a +", &mut interner);
    assert_eq!(
        format_expr(&output.arena, &interner, output.root),
        "a + /* error */"
    );
}

/// Builds `op(left, right)` by hand, bypassing the parser.
fn binary(arena: &mut ExprArena, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
    arena.alloc_expr(Expr::new(ExprKind::Binary { op, left, right }, Span::DUMMY))
}

#[test]
fn adds_parens_where_shape_requires() {
    let mut interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let mut ident = |arena: &mut ExprArena, text: &str| {
        let name = interner.intern(text);
        arena.alloc_expr(Expr::new(ExprKind::Ident(name), Span::DUMMY))
    };
    let a = ident(&mut arena, "a");
    let b = ident(&mut arena, "b");
    let c = ident(&mut arena, "c");
    let d = ident(&mut arena, "d");

    // c * (a + b): looser child on the right.
    let sum = binary(&mut arena, BinaryOp::Add, a, b);
    let product = binary(&mut arena, BinaryOp::Mul, c, sum);
    // d - (a + b): equal precedence, not leftmost.
    let sum2 = binary(&mut arena, BinaryOp::Add, a, b);
    let diff = binary(&mut arena, BinaryOp::Sub, d, sum2);
    // (a + b) + c: same operator on the left would merge into one chain.
    let sum3 = binary(&mut arena, BinaryOp::Add, a, b);
    let nested = binary(&mut arena, BinaryOp::Add, sum3, c);
    // a - b + c: different operator of the same level on the left.
    let diff2 = binary(&mut arena, BinaryOp::Sub, a, b);
    let mixed = binary(&mut arena, BinaryOp::Add, diff2, c);

    assert_eq!(format_expr(&arena, &interner, product), "c * (a + b)");
    assert_eq!(format_expr(&arena, &interner, diff), "d - (a + b)");
    assert_eq!(format_expr(&arena, &interner, nested), "(a + b) + c");
    assert_eq!(format_expr(&arena, &interner, mixed), "a - b + c");
}

#[test]
fn receiver_and_unary_operand_parens() {
    let mut interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let x = interner.intern("x");
    let y = interner.intern("y");
    let size = interner.intern("size");
    let x = arena.alloc_expr(Expr::new(ExprKind::Ident(x), Span::DUMMY));
    let y = arena.alloc_expr(Expr::new(ExprKind::Ident(y), Span::DUMMY));
    let sum = binary(&mut arena, BinaryOp::Add, x, y);
    let call = arena.alloc_expr(Expr::new(
        ExprKind::MethodCall {
            receiver: sum,
            name: size,
            args: spartan_ir::ExprRange::EMPTY,
        },
        Span::DUMMY,
    ));
    let neg = arena.alloc_expr(Expr::new(
        ExprKind::Unary {
            op: spartan_ir::UnaryOp::Neg,
            operand: sum,
        },
        Span::DUMMY,
    ));
    assert_eq!(format_expr(&arena, &interner, call), "(x + y).size()");
    assert_eq!(format_expr(&arena, &interner, neg), "-(x + y)");
}

#[test]
fn parentheses_rules() {
    use crate::parentheses::{needs_parens, ParenPosition};

    let mut interner = StringInterner::new();
    let output = parse("a || b ? c : d", &mut interner);
    let arena = &output.arena;
    let ExprKind::Conditional { cond, .. } = *arena.kind(output.root) else {
        panic!("expected conditional");
    };
    // `||` binds tighter than `?:`.
    assert!(!needs_parens(arena, cond, ParenPosition::Condition));
    assert!(needs_parens(
        arena,
        output.root,
        ParenPosition::Operand {
            parent: BinaryOp::Add,
            leftmost: true
        }
    ));
    assert!(!needs_parens(arena, ExprId::INVALID, ParenPosition::Receiver));
}
