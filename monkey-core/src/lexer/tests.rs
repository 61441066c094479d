use super::prelude::{Lexer, Token};

fn lex(input: &str) -> Vec<Token> {
    Lexer::new(input.char_indices().map(|(i, c)| (i as u32, c)))
        .map(|(_, token, _)| token)
        .collect()
}

#[test]
fn test_symbols() {
    let input = "=+(){},;-!*/<>[]:";

    let tokens = vec![
        Token::Assign,
        Token::Plus,
        Token::LParen,
        Token::RParen,
        Token::LBrace,
        Token::RBrace,
        Token::Comma,
        Token::Semicolon,
        Token::Minus,
        Token::Bang,
        Token::Asterisk,
        Token::Slash,
        Token::LessThan,
        Token::GreaterThan,
        Token::LBracket,
        Token::RBracket,
        Token::Colon,
        Token::Eof,
    ];

    assert_eq!(lex(input), tokens);
}

#[test]
fn test_program() {
    let input = r#"
        let five = 5;
        let add = fn(x, y) {
            x + y;
        };

        let result = add(five, ten);

        if (5 < 10) {
            return true;
        } else {
            return false;
        }

        10 == 10;
        10 != 9;
        "foobar"
        "foo bar"
        [1, 2];
        {"foo": "bar"}
    "#;

    let tokens = vec![
        Token::Let,
        Token::Ident("five".to_string()),
        Token::Assign,
        Token::Int("5".to_string()),
        Token::Semicolon,
        Token::Let,
        Token::Ident("add".to_string()),
        Token::Assign,
        Token::Function,
        Token::LParen,
        Token::Ident("x".to_string()),
        Token::Comma,
        Token::Ident("y".to_string()),
        Token::RParen,
        Token::LBrace,
        Token::Ident("x".to_string()),
        Token::Plus,
        Token::Ident("y".to_string()),
        Token::Semicolon,
        Token::RBrace,
        Token::Semicolon,
        Token::Let,
        Token::Ident("result".to_string()),
        Token::Assign,
        Token::Ident("add".to_string()),
        Token::LParen,
        Token::Ident("five".to_string()),
        Token::Comma,
        Token::Ident("ten".to_string()),
        Token::RParen,
        Token::Semicolon,
        Token::If,
        Token::LParen,
        Token::Int("5".to_string()),
        Token::LessThan,
        Token::Int("10".to_string()),
        Token::RParen,
        Token::LBrace,
        Token::Return,
        Token::True,
        Token::Semicolon,
        Token::RBrace,
        Token::Else,
        Token::LBrace,
        Token::Return,
        Token::False,
        Token::Semicolon,
        Token::RBrace,
        Token::Int("10".to_string()),
        Token::Equal,
        Token::Int("10".to_string()),
        Token::Semicolon,
        Token::Int("10".to_string()),
        Token::NotEqual,
        Token::Int("9".to_string()),
        Token::Semicolon,
        Token::Str("foobar".to_string()),
        Token::Str("foo bar".to_string()),
        Token::LBracket,
        Token::Int("1".to_string()),
        Token::Comma,
        Token::Int("2".to_string()),
        Token::RBracket,
        Token::Semicolon,
        Token::LBrace,
        Token::Str("foo".to_string()),
        Token::Colon,
        Token::Str("bar".to_string()),
        Token::RBrace,
        Token::Eof,
    ];

    assert_eq!(lex(input), tokens);
}

#[test]
fn test_illegal_character() {
    let input = "let a ^ 5";

    let tokens = vec![
        Token::Let,
        Token::Ident("a".to_string()),
        Token::Illegal('^'),
        Token::Int("5".to_string()),
        Token::Eof,
    ];

    assert_eq!(lex(input), tokens);
}

#[test]
fn test_spans() {
    let input = "let ab = 12;";

    let lexer = Lexer::new(input.char_indices().map(|(i, c)| (i as u32, c)));
    let spans = lexer
        .map(|(start, _, end)| (start, end))
        .collect::<Vec<(u32, u32)>>();

    assert_eq!(spans, vec![(0, 3), (4, 6), (7, 8), (9, 11), (11, 12), (12, 12)]);
}

#[test]
fn test_long_whitespace_run() {
    let input = format!("1{}2", " ".repeat(1_000_000));

    let tokens = vec![
        Token::Int("1".to_string()),
        Token::Int("2".to_string()),
        Token::Eof,
    ];

    assert_eq!(lex(&input), tokens);
}

#[test]
fn test_unterminated_string() {
    let input = "\"abc";

    let tokens = vec![
        Token::Str("abc".to_string()),
        Token::Eof,
    ];

    assert_eq!(lex(input), tokens);
}
