use super::token::Token;

pub type Spanned = (u32, Token, u32);

pub fn str_to_keyword(word: &str) -> Option<Token> {
    Some(match word {
        "fn" => Token::Function,
        "let" => Token::Let,
        "true" => Token::True,
        "false" => Token::False,
        "if" => Token::If,
        "else" => Token::Else,
        "return" => Token::Return,
        _ => return None,
    })
}

/// Turns a position-tagged character stream into spanned tokens. The
/// lexer itself never fails: unrecognized characters become
/// `Token::Illegal` and are rejected later by the parser.
#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = (u32, char)>> {
    position: u32,
    next_position: u32,
    ch: Option<char>,
    next_ch: Option<char>,
    input: T,
    eof_emitted: bool,
}

impl<T: Iterator<Item = (u32, char)>> Lexer<T> {
    pub fn new(input: T) -> Self {
        let mut lexer = Self {
            position: 0,
            next_position: 0,
            ch: None,
            next_ch: None,
            input,
            eof_emitted: false,
        };

        lexer.next_char();
        lexer.next_char();

        lexer
    }

    pub fn next_token(&mut self) -> Spanned {
        while let Some(' ' | '\t' | '\n' | '\r' | '\x0C') = self.ch {
            self.next_char();
        }

        match self.ch {
            Some(ch) => match ch {
                '=' => match self.next_ch {
                    Some('=') => self.eat_two_chars(Token::Equal),
                    _ => self.eat_one_char(Token::Assign),
                },
                '!' => match self.next_ch {
                    Some('=') => self.eat_two_chars(Token::NotEqual),
                    _ => self.eat_one_char(Token::Bang),
                },
                '+' => self.eat_one_char(Token::Plus),
                '-' => self.eat_one_char(Token::Minus),
                '*' => self.eat_one_char(Token::Asterisk),
                '/' => self.eat_one_char(Token::Slash),
                '<' => self.eat_one_char(Token::LessThan),
                '>' => self.eat_one_char(Token::GreaterThan),
                ',' => self.eat_one_char(Token::Comma),
                ';' => self.eat_one_char(Token::Semicolon),
                ':' => self.eat_one_char(Token::Colon),
                '(' => self.eat_one_char(Token::LParen),
                ')' => self.eat_one_char(Token::RParen),
                '{' => self.eat_one_char(Token::LBrace),
                '}' => self.eat_one_char(Token::RBrace),
                '[' => self.eat_one_char(Token::LBracket),
                ']' => self.eat_one_char(Token::RBracket),
                '"' => self.lex_string(),
                'a'..='z' | 'A'..='Z' | '_' => self.lex_ident(),
                '0'..='9' => self.lex_number(),
                c => self.eat_one_char(Token::Illegal(c)),
            },
            None => {
                let pos = self.position;
                (pos, Token::Eof, pos)
            },
        }
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.ch;

        let next = match self.input.next() {
            Some((pos, ch)) => {
                self.position = self.next_position;
                self.next_position = pos;

                Some(ch)
            },
            None => {
                self.position = self.next_position;
                self.next_position += 1;

                None
            },
        };

        self.ch = self.next_ch;
        self.next_ch = next;

        ch
    }

    fn eat_one_char(&mut self, token: Token) -> Spanned {
        let start_pos = self.position;
        self.next_char();
        let end_pos = self.position;

        (start_pos, token, end_pos)
    }

    fn eat_two_chars(&mut self, token: Token) -> Spanned {
        let start_pos = self.position;
        self.next_char();
        self.next_char();
        let end_pos = self.position;

        (start_pos, token, end_pos)
    }

    fn lex_ident(&mut self) -> Spanned {
        let start_pos = self.position;
        let mut ident = String::new();

        loop {
            match self.ch {
                Some(ch) if ch.is_ascii_alphanumeric() || ch == '_' => {
                    ident.push(ch);
                    self.next_char();
                },
                _ => break,
            }
        }

        let end_pos = self.position;

        let token = match str_to_keyword(&ident) {
            Some(token) => token,
            None => Token::Ident(ident),
        };

        (start_pos, token, end_pos)
    }

    fn lex_number(&mut self) -> Spanned {
        let start_pos = self.position;
        let mut value = String::new();

        loop {
            match self.ch {
                Some(ch) if ch.is_ascii_digit() => {
                    value.push(ch);
                    self.next_char();
                },
                _ => break,
            }
        }

        let end_pos = self.position;

        (start_pos, Token::Int(value), end_pos)
    }

    // An unterminated string simply ends at the end of input; there is
    // no escaping.
    fn lex_string(&mut self) -> Spanned {
        let start_pos = self.position;
        let mut value = String::new();

        self.next_char();

        loop {
            match self.ch {
                Some('"') => {
                    self.next_char();
                    break;
                },
                Some(ch) => {
                    value.push(ch);
                    self.next_char();
                },
                None => break,
            }
        }

        let end_pos = self.position;

        (start_pos, Token::Str(value), end_pos)
    }
}

impl<T: Iterator<Item = (u32, char)>> Iterator for Lexer<T> {
    type Item = Spanned;

    fn next(&mut self) -> Option<Self::Item> {
        if self.eof_emitted {
            return None;
        }

        let spanned = self.next_token();

        if spanned.1 == Token::Eof {
            self.eof_emitted = true;
        }

        Some(spanned)
    }
}
