use pretty_assertions::assert_eq;

use super::*;

fn kinds(source: &str) -> Vec<Token> {
    let lexed = lex(source);
    assert!(lexed.errors.is_empty(), "{:?}", lexed.errors);
    lexed.tokens.into_iter().map(|(token, _)| token).collect()
}

#[test]
fn longest_operator_wins() {
    assert_eq!(
        kinds("a >>> b >> c > d >= e"),
        vec![
            Token::Ident,
            Token::UShr,
            Token::Ident,
            Token::Shr,
            Token::Ident,
            Token::Gt,
            Token::Ident,
            Token::GtEq,
            Token::Ident,
        ]
    );
    assert_eq!(
        kinds("a && b & c || d | e"),
        vec![
            Token::Ident,
            Token::AmpAmp,
            Token::Ident,
            Token::Amp,
            Token::Ident,
            Token::PipePipe,
            Token::Ident,
            Token::Pipe,
            Token::Ident,
        ]
    );
}

#[test]
fn keywords_are_not_identifiers() {
    assert_eq!(
        kinds("true nullable null falsey"),
        vec![Token::True, Token::Ident, Token::Null, Token::Ident]
    );
}

#[test]
fn literals() {
    assert_eq!(
        kinds(r#"12 3.5e2 0xFFL "s \" t" 'c' '\n'"#),
        vec![
            Token::Number,
            Token::Number,
            Token::Number,
            Token::Str,
            Token::Char,
            Token::Char,
        ]
    );
}

#[test]
fn spans_are_byte_offsets() {
    let lexed = lex("ab +  cde");
    let spans: Vec<Span> = lexed.tokens.iter().map(|&(_, span)| span).collect();
    assert_eq!(
        spans,
        vec![Span::new(0, 2), Span::new(3, 4), Span::new(6, 9)]
    );
}

#[test]
fn invalid_character_is_skipped() {
    let lexed = lex("a # b");
    assert_eq!(lexed.tokens.len(), 2);
    assert_eq!(
        lexed.errors,
        vec![ParseError::InvalidCharacter {
            text: "#".to_owned(),
            span: Span::new(2, 3),
        }]
    );
}

#[test]
fn unterminated_string_stops_lexing() {
    let lexed = lex("a + \"abc");
    assert_eq!(
        lexed.tokens.iter().map(|&(t, _)| t).collect::<Vec<_>>(),
        vec![Token::Ident, Token::Plus]
    );
    assert_eq!(
        lexed.errors,
        vec![ParseError::UnterminatedLiteral {
            span: Span::new(4, 8)
        }]
    );
}
