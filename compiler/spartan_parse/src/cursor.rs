//! Token cursor for navigating the token stream.

use spartan_ir::Span;

use crate::lexer::Token;

/// Position in a lexed token stream, with one token of lookahead.
pub struct Cursor<'a> {
    tokens: &'a [(Token, Span)],
    /// Span reported at end of input: a point just past the last byte.
    eof: Span,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [(Token, Span)], source_len: u32) -> Self {
        Cursor {
            tokens,
            eof: Span::point(source_len),
            pos: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> Option<Token> {
        self.tokens.get(self.pos).map(|&(token, _)| token)
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.tokens.get(self.pos).map_or(self.eof, |&(_, span)| span)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[inline]
    pub fn check(&self, token: Token) -> bool {
        self.current() == Some(token)
    }

    /// Consume the current token and return its span.
    pub fn advance(&mut self) -> Span {
        let span = self.current_span();
        if !self.is_at_end() {
            self.pos += 1;
        }
        span
    }
}
