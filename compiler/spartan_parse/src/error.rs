//! Parse errors.
//!
//! Every error is recoverable: the parser records it and keeps going, leaving
//! an [`ExprKind::Error`](spartan_ir::ExprKind::Error) node where an operand
//! was expected.

use spartan_ir::{Span, SpanError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected {expected}, found `{found}`")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        span: Span,
    },

    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: &'static str, span: Span },

    #[error("invalid character `{text}`")]
    InvalidCharacter { text: String, span: Span },

    #[error("unterminated literal")]
    UnterminatedLiteral { span: Span },

    #[error(transparent)]
    SourceTooLarge(#[from] SpanError),
}

impl ParseError {
    /// Where the error occurred. Errors without a location report
    /// [`Span::DUMMY`].
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedEof { span, .. }
            | ParseError::InvalidCharacter { span, .. }
            | ParseError::UnterminatedLiteral { span } => *span,
            ParseError::SourceTooLarge(_) => Span::DUMMY,
        }
    }
}
