use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // <letter | _> { <letter | _ | digit> }
    Ident(String),
    // { <digit> }, converted to a value by the parser
    Int(String),
    // " { <any char except "> } "
    Str(String),
    // anything the lexer does not recognize; rejected by the parser
    Illegal(char),

    // Operators
    Assign,   // =
    Plus,     // +
    Minus,    // -
    Bang,     // !
    Asterisk, // *
    Slash,    // /

    LessThan,    // <
    GreaterThan, // >
    Equal,       // ==
    NotEqual,    // !=

    // Delimiters
    Comma,     // ,
    Semicolon, // ;
    Colon,     // :
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    LBracket,  // [
    RBracket,  // ]

    // Keywords
    Function, // fn
    Let,      // let
    True,     // true
    False,    // false
    If,       // if
    Else,     // else
    Return,   // return

    Eof,
}

impl Token {
    pub fn is_keyword(&self) -> bool {
        match self {
            Token::Function
            | Token::Let
            | Token::True
            | Token::False
            | Token::If
            | Token::Else
            | Token::Return => true,
            _ => false,
        }
    }

    pub fn is_operator(&self) -> bool {
        match self {
            Token::Plus
            | Token::Minus
            | Token::Bang
            | Token::Asterisk
            | Token::Slash
            | Token::LessThan
            | Token::GreaterThan
            | Token::Equal
            | Token::NotEqual => true,
            _ => false,
        }
    }

    pub fn as_literal(&self) -> String {
        match self {
            Token::Ident(value) => value.clone(),
            Token::Int(value) => value.clone(),
            Token::Str(value) => value.clone(),
            Token::Illegal(ch) => ch.to_string(),

            Token::Assign => "=".to_string(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Bang => "!".to_string(),
            Token::Asterisk => "*".to_string(),
            Token::Slash => "/".to_string(),

            Token::LessThan => "<".to_string(),
            Token::GreaterThan => ">".to_string(),
            Token::Equal => "==".to_string(),
            Token::NotEqual => "!=".to_string(),

            Token::Comma => ",".to_string(),
            Token::Semicolon => ";".to_string(),
            Token::Colon => ":".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::LBrace => "{".to_string(),
            Token::RBrace => "}".to_string(),
            Token::LBracket => "[".to_string(),
            Token::RBracket => "]".to_string(),

            Token::Function => "fn".to_string(),
            Token::Let => "let".to_string(),
            Token::True => "true".to_string(),
            Token::False => "false".to_string(),
            Token::If => "if".to_string(),
            Token::Else => "else".to_string(),
            Token::Return => "return".to_string(),

            Token::Eof => "\0".to_string(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_literal())
    }
}
