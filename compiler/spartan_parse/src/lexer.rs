//! Tokenizer for Java-style expressions, generated with logos.
//!
//! Whitespace (including newlines) is skipped. Every operator is its own
//! token; logos picks the longest match, so `>>>=`-style ambiguities never
//! arise for the operators an expression can contain.

use logos::Logos;
use spartan_ir::Span;

use crate::ParseError;

#[derive(Logos, Copy, Clone, Debug, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    // === Keywords ===
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,

    // === Names and literals ===
    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Ident,
    #[regex(r"[0-9][0-9_]*(\.[0-9][0-9_]*)?([eE][+-]?[0-9]+)?[lLfFdD]?")]
    #[regex(r"0[xX][0-9a-fA-F_]+[lL]?")]
    Number,
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    Str,
    #[regex(r"'([^'\\\n]|\\.)*'")]
    Char,

    // === Punctuation ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,

    // === Operators ===
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token(">>>")]
    UShr,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("&")]
    Amp,
    #[token("^")]
    Caret,
    #[token("|")]
    Pipe,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
}

/// Output of [`lex`]: the tokens that were recognized plus any lexical
/// errors.
#[derive(Clone, Debug, Default)]
pub struct Lexed {
    pub tokens: Vec<(Token, Span)>,
    pub errors: Vec<ParseError>,
}

/// Tokenize `source`.
///
/// Unrecognized characters are reported and skipped. An unterminated
/// string or character literal ends lexing, since everything after the
/// opening quote belongs to it.
pub fn lex(source: &str) -> Lexed {
    let mut out = Lexed::default();
    let mut lexer = Token::lexer(source);
    while let Some(result) = lexer.next() {
        let span = match Span::try_from_range(lexer.span()) {
            Ok(span) => span,
            Err(err) => {
                out.errors.push(ParseError::from(err));
                break;
            }
        };
        match result {
            Ok(token) => out.tokens.push((token, span)),
            Err(()) => {
                let text = lexer.slice();
                if text.starts_with('"') || text.starts_with('\'') {
                    let end = u32::try_from(source.len()).unwrap_or(u32::MAX);
                    out.errors.push(ParseError::UnterminatedLiteral {
                        span: Span::new(span.start, end),
                    });
                    break;
                }
                out.errors.push(ParseError::InvalidCharacter {
                    text: text.to_owned(),
                    span,
                });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests;
