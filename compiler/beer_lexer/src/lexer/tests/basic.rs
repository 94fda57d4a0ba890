use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_lexer_basic() {
    assert_eq!(
        kinds("1 + 2"),
        vec![
            TokenKind::Int(1),
            TokenKind::Plus,
            TokenKind::Int(2),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_lexer_all_operators() {
    assert_eq!(
        kinds("(4-3)*2/1"),
        vec![
            TokenKind::LeftParen,
            TokenKind::Int(4),
            TokenKind::Minus,
            TokenKind::Int(3),
            TokenKind::RightParen,
            TokenKind::Star,
            TokenKind::Int(2),
            TokenKind::Slash,
            TokenKind::Int(1),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_empty_input_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds(" \t "), vec![TokenKind::Eof]);
}

#[test]
fn test_float_literals() {
    assert_eq!(kinds("3.25"), vec![TokenKind::Float(3.25), TokenKind::Eof]);
    assert_eq!(kinds("10."), vec![TokenKind::Float(10.0), TokenKind::Eof]);
}

#[test]
fn test_second_dot_ends_number_and_is_illegal() {
    let err = Lexer::new("<test>", "1.2.3").tokenize().unwrap_err();
    let LexError::IllegalCharacter { ch, span } = err;
    assert_eq!(ch, '.');
    assert_eq!(span.start.index, 3);
    assert_eq!(span.end.index, 4);
}

#[test]
fn test_leading_dot_is_illegal() {
    let err = Lexer::new("<test>", ".5").tokenize().unwrap_err();
    assert_eq!(err.to_string(), "Illegal Character: '.'");
}

#[test]
fn test_huge_integer_becomes_float() {
    let tokens = kinds("99999999999999999999");
    assert_eq!(tokens, vec![TokenKind::Float(1e20), TokenKind::Eof]);
}

#[test]
fn test_first_illegal_character_wins() {
    let err = Lexer::new("<test>", "1 + a + b").tokenize().unwrap_err();
    let LexError::IllegalCharacter { ch, span } = err;
    assert_eq!(ch, 'a');
    assert_eq!(span.start.column, 4);
}

#[test]
fn test_newline_is_illegal() {
    let err = Lexer::new("<test>", "1\n").tokenize().unwrap_err();
    let LexError::IllegalCharacter { ch, .. } = err;
    assert_eq!(ch, '\n');
}

#[test]
fn test_iterator_stops_after_eof() {
    let mut lexer = Lexer::new("<test>", "7");
    assert!(matches!(lexer.next(), Some(Ok(Token { kind: TokenKind::Int(7), .. }))));
    assert!(matches!(lexer.next(), Some(Ok(Token { kind: TokenKind::Eof, .. }))));
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
}
