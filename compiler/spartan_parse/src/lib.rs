//! Recursive descent parser for single Java-style expressions.
//!
//! Produces a flat tree in an [`ExprArena`]. Runs of one operator at one
//! precedence level become a single n-ary node (`a + b + c`), mixed
//! operators nest as binary nodes. Parsing never fails outright: errors are
//! collected and missing operands become `Error` nodes, which the rewrite
//! engine leaves alone.

mod cursor;
mod error;
mod grammar;
pub mod lexer;

use cursor::Cursor;
pub use error::ParseError;

use spartan_ir::{Expr, ExprArena, ExprId, ExprKind, Name, Span, StringInterner};

use lexer::Token;

/// Output of [`parse`].
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub arena: ExprArena,
    pub root: ExprId,
    /// Lexical and syntax errors, in source order.
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse `source` as one expression.
///
/// Identifier and literal text is interned into `interner`, which the
/// caller keeps for printing the tree back.
pub fn parse(source: &str, interner: &mut StringInterner) -> ParseOutput {
    let lexed = lexer::lex(source);
    let source_len = u32::try_from(source.len()).unwrap_or(u32::MAX);

    let mut parser = Parser::new(source, &lexed.tokens, source_len, interner);
    let root = parser.parse_expr();
    parser.expect_end();

    let mut errors = lexed.errors;
    errors.extend(parser.errors);
    errors.sort_by_key(|err| err.span().start);
    if !errors.is_empty() {
        tracing::debug!(count = errors.len(), "parsed with errors");
    }

    ParseOutput {
        arena: parser.arena,
        root,
        errors,
    }
}

/// Parser state.
pub(crate) struct Parser<'a> {
    source: &'a str,
    cursor: Cursor<'a>,
    interner: &'a mut StringInterner,
    arena: ExprArena,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    fn new(
        source: &'a str,
        tokens: &'a [(Token, Span)],
        source_len: u32,
        interner: &'a mut StringInterner,
    ) -> Self {
        Parser {
            source,
            cursor: Cursor::new(tokens, source_len),
            interner,
            arena: ExprArena::with_capacity(tokens.len()),
            errors: Vec::new(),
        }
    }

    #[inline]
    fn current(&self) -> Option<Token> {
        self.cursor.current()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn check(&self, token: Token) -> bool {
        self.cursor.check(token)
    }

    #[inline]
    fn advance(&mut self) -> Span {
        self.cursor.advance()
    }

    /// Consume `token` if it is next.
    fn eat(&mut self, token: Token) -> Option<Span> {
        if self.check(token) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consume `token`, or record an error naming `expected`.
    fn expect(&mut self, token: Token, expected: &'static str) -> Option<Span> {
        let eaten = self.eat(token);
        if eaten.is_none() {
            self.error_expected(expected);
        }
        eaten
    }

    fn expect_end(&mut self) {
        if !self.cursor.is_at_end() {
            self.error_expected("end of expression");
        }
    }

    fn error_expected(&mut self, expected: &'static str) {
        let span = self.current_span();
        let error = if self.cursor.is_at_end() {
            ParseError::UnexpectedEof { expected, span }
        } else {
            ParseError::UnexpectedToken {
                expected,
                found: self.text(span).to_owned(),
                span,
            }
        };
        tracing::trace!(error = %error, "recovering");
        self.errors.push(error);
    }

    fn text(&self, span: Span) -> &'a str {
        self.source.get(span.to_range()).unwrap_or("")
    }

    fn intern(&mut self, span: Span) -> Name {
        let text = self.text(span);
        self.interner.intern(text)
    }

    fn span_of(&self, id: ExprId) -> Span {
        self.arena.span(id)
    }

    fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, span))
    }
}
