use ozl::{
    error::LexError,
    interpreter::lexer::{Position, Token, TokenKind, tokenize},
};
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().iter().map(|t| t.kind).collect()
}

#[test]
fn fixed_form_tokens_lex_alone() {
    let cases = [("(", TokenKind::OpenParen),
                 (")", TokenKind::CloseParen),
                 ("{", TokenKind::OpenBrace),
                 ("}", TokenKind::CloseBrace),
                 ("[", TokenKind::OpenBracket),
                 ("]", TokenKind::CloseBracket),
                 (",", TokenKind::Comma),
                 (".", TokenKind::Dot),
                 (":", TokenKind::Colon),
                 (";", TokenKind::Semicolon),
                 ("=", TokenKind::Equals),
                 ("+", TokenKind::BinaryOperator),
                 ("-", TokenKind::BinaryOperator),
                 ("*", TokenKind::BinaryOperator),
                 ("/", TokenKind::BinaryOperator),
                 ("%", TokenKind::BinaryOperator),
                 ("let", TokenKind::Let),
                 ("const", TokenKind::Const)];

    for (text, kind) in cases {
        let tokens = tokenize(text).unwrap();
        assert_eq!(tokens.len(), 2, "tokens for {text:?}");
        assert_eq!(tokens[0].kind, kind, "kind for {text:?}");
        assert_eq!(tokens[0].text, text);
        assert_eq!(tokens[1].kind, TokenKind::EndOfInput);
    }
}

#[test]
fn keywords_need_an_exact_match() {
    assert_eq!(kinds("letter constant lets"),
               [TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::EndOfInput]);
    assert_eq!(kinds("null"), [TokenKind::Identifier, TokenKind::EndOfInput]);
}

#[test]
fn digits_and_letters_form_separate_runs() {
    let tokens = tokenize("123abc 7").unwrap();
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();

    assert_eq!(texts, ["123", "abc", "7", Token::END_OF_INPUT_TEXT]);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
}

#[test]
fn identifiers_may_contain_underscores_after_the_first_letter() {
    let tokens = tokenize("total_count").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].text, "total_count");
}

#[test]
fn whitespace_produces_no_tokens() {
    assert_eq!(kinds(" \t\r\n  "), [TokenKind::EndOfInput]);
    assert_eq!(kinds(""), [TokenKind::EndOfInput]);
}

#[test]
fn exactly_one_end_of_input_token() {
    let tokens = tokenize("let x = { a: 1 }; x.a[0](1, 2);").unwrap();
    let ends = tokens.iter()
                     .filter(|t| t.kind == TokenKind::EndOfInput)
                     .count();

    assert_eq!(ends, 1);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfInput));
}

#[test]
fn tokens_carry_line_and_column() {
    let tokens = tokenize("let x =\n  42;").unwrap();

    assert_eq!(tokens[3].text, "42");
    assert_eq!(tokens[3].position, Position { line: 2, column: 3 });
    assert_eq!(tokens[4].position, Position { line: 2, column: 5 });
    assert_eq!(tokens[5].position, Position { line: 2, column: 6 });
}

#[test]
fn unrecognized_character_is_error() {
    assert_eq!(tokenize("let x = 5 $ 3;"),
               Err(LexError::UnrecognizedCharacter { character: '$',
                                                     position:  Position { line:   1,
                                                                           column: 11, }, }));
    assert!(tokenize("_private").is_err());
    assert!(tokenize("a == b").is_ok());
    assert!(tokenize("a != b").is_err());
}

#[test]
fn long_single_line_keeps_columns_exact() {
    let count = 100_000;
    let source = "a ".repeat(count);
    let tokens = tokenize(&source).unwrap();

    assert_eq!(tokens.len(), count + 1);
    assert_eq!(tokens[count - 1].position,
               Position { line:   1,
                          column: 2 * count - 1, });
    assert_eq!(tokens[count].position,
               Position { line:   1,
                          column: 2 * count + 1, });
}

#[test]
fn columns_restart_after_each_newline() {
    let tokens = tokenize("a\nbb c\n\n  d").unwrap();
    let positions: Vec<(usize, usize)> = tokens.iter()
                                               .map(|t| (t.position.line, t.position.column))
                                               .collect();

    assert_eq!(positions, [(1, 1), (2, 1), (2, 4), (4, 3), (4, 4)]);
}
