//! Expression grammar.
//!
//! Precedence, loosest first: `?:`, then the binary levels of
//! [`BinaryOp::precedence`] from `||` down to `*`, then prefix operators,
//! postfix `.name` / `.name(args)`, and primaries.

mod operators;

use spartan_ir::{BinaryOp, ExprId, ExprKind, ExprRange, LitKind, Literal, Span};
use spartan_stack::ensure_sufficient_stack;

use crate::lexer::Token;
use crate::Parser;

/// Loosest binary precedence level (`||`).
const LOOSEST: u8 = 12;
/// Tightest binary precedence level (`*`).
const TIGHTEST: u8 = 3;

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` to prevent stack overflow on deeply
    /// nested expressions.
    pub(crate) fn parse_expr(&mut self) -> ExprId {
        ensure_sufficient_stack(|| self.parse_conditional())
    }

    /// `cond ? a : b`, right-associative.
    fn parse_conditional(&mut self) -> ExprId {
        let cond = self.parse_binary(LOOSEST);
        if self.eat(Token::Question).is_none() {
            return cond;
        }
        let then_branch = self.parse_expr();
        let else_branch = if self.expect(Token::Colon, "`:`").is_some() {
            self.parse_expr()
        } else {
            self.missing_operand()
        };
        let span = self.span_of(cond).merge(self.span_of(else_branch));
        self.alloc(
            ExprKind::Conditional {
                cond,
                then_branch,
                else_branch,
            },
            span,
        )
    }

    /// One binary precedence level.
    ///
    /// Consecutive uses of the same operator collect into one chain; a
    /// different operator of the same level closes the chain so far and
    /// starts a new one with it as the leftmost operand.
    fn parse_binary(&mut self, level: u8) -> ExprId {
        if level < TIGHTEST {
            return self.parse_unary();
        }
        let first = self.parse_binary(level - 1);
        let mut operands = Vec::new();
        let mut chain: Option<BinaryOp> = None;

        while let Some(op) = self
            .match_binary_op()
            .filter(|op| op.precedence() == level)
        {
            self.advance();
            if operands.is_empty() {
                operands.push(first);
            }
            let right = self.parse_binary(level - 1);
            if let Some(prev) = chain.filter(|&prev| prev != op) {
                let left = self.alloc_chain(prev, &operands);
                operands = vec![left];
            }
            operands.push(right);
            chain = Some(op);
        }

        match chain {
            Some(op) => self.alloc_chain(op, &operands),
            None => first,
        }
    }

    /// Binary node for two operands, n-ary node for more.
    fn alloc_chain(&mut self, op: BinaryOp, operands: &[ExprId]) -> ExprId {
        let span = match (operands.first(), operands.last()) {
            (Some(&first), Some(&last)) => self.span_of(first).merge(self.span_of(last)),
            _ => self.current_span(),
        };
        let kind = match *operands {
            [left, right] => ExprKind::Binary { op, left, right },
            _ => ExprKind::Nary {
                op,
                operands: self.arena.alloc_expr_list(operands.iter().copied()),
            },
        };
        self.alloc(kind, span)
    }

    fn parse_unary(&mut self) -> ExprId {
        let Some(op) = self.match_unary_op() else {
            return self.parse_postfix();
        };
        let start = self.advance();
        let operand = ensure_sufficient_stack(|| self.parse_unary());
        let span = start.merge(self.span_of(operand));
        self.alloc(ExprKind::Unary { op, operand }, span)
    }

    /// `.name` and `.name(args)` after a primary.
    fn parse_postfix(&mut self) -> ExprId {
        let mut expr = self.parse_primary();
        while self.eat(Token::Dot).is_some() {
            let Some(name_span) = self.expect(Token::Ident, "member name") else {
                break;
            };
            let name = self.intern(name_span);
            let start = self.span_of(expr);
            expr = if self.check(Token::LParen) {
                let (args, end) = self.parse_args();
                self.alloc(
                    ExprKind::MethodCall {
                        receiver: expr,
                        name,
                        args,
                    },
                    start.merge(end),
                )
            } else {
                self.alloc(
                    ExprKind::FieldAccess {
                        receiver: expr,
                        name,
                    },
                    start.merge(name_span),
                )
            };
        }
        expr
    }

    /// `( args )`; the current token must be `(`. Returns the argument
    /// list and the span of the closing token (or of the last argument when
    /// the `)` is missing).
    fn parse_args(&mut self) -> (ExprRange, Span) {
        self.advance();
        let mut args = Vec::new();
        if let Some(close) = self.eat(Token::RParen) {
            return (self.arena.alloc_expr_list(args), close);
        }
        let end = loop {
            let arg = self.parse_expr();
            args.push(arg);
            if self.eat(Token::Comma).is_some() {
                continue;
            }
            break self
                .expect(Token::RParen, "`,` or `)`")
                .unwrap_or_else(|| self.span_of(arg));
        };
        (self.arena.alloc_expr_list(args), end)
    }

    fn parse_primary(&mut self) -> ExprId {
        let span = self.current_span();
        let literal = match self.current() {
            Some(Token::True | Token::False) => Some(LitKind::Bool),
            Some(Token::Null) => Some(LitKind::Null),
            Some(Token::Number) => Some(LitKind::Number),
            Some(Token::Str) => Some(LitKind::Str),
            Some(Token::Char) => Some(LitKind::Char),
            _ => None,
        };
        if let Some(kind) = literal {
            self.advance();
            let text = self.intern(span);
            return self.alloc(ExprKind::Literal(Literal { kind, text }), span);
        }

        match self.current() {
            Some(Token::Ident) => {
                self.advance();
                let name = self.intern(span);
                if self.check(Token::LParen) {
                    let (args, end) = self.parse_args();
                    self.alloc(
                        ExprKind::MethodCall {
                            receiver: ExprId::INVALID,
                            name,
                            args,
                        },
                        span.merge(end),
                    )
                } else {
                    self.alloc(ExprKind::Ident(name), span)
                }
            }
            Some(Token::LParen) => {
                self.advance();
                let inner = self.parse_expr();
                let end = self
                    .expect(Token::RParen, "`)`")
                    .unwrap_or_else(|| self.span_of(inner));
                self.alloc(ExprKind::Paren(inner), span.merge(end))
            }
            _ => {
                self.error_expected("expression");
                self.missing_operand()
            }
        }
    }

    /// Placeholder for an operand that is not there.
    fn missing_operand(&mut self) -> ExprId {
        let at = Span::point(self.current_span().start);
        self.alloc(ExprKind::Error, at)
    }
}
