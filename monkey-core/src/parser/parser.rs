use crate::{lexer::prelude::{Lexer, Spanned, Token}, utils::prelude::SrcSpan};
use super::error::{parse_error, ParseError, ParseErrorType};
use super::ast::{Expression, Parsed, Program, Statement};

pub trait Parse<T: Iterator<Item = Spanned>>
    where Self: Sized,
{
    fn parse(
        parser: &mut Parser<T>,
        precedence: Option<Precedence>,
    ) -> Result<Self, ParseError>;
}

pub trait InfixParse<T: Iterator<Item = Spanned>>
    where Self: Sized,
{
    fn parse(
        parser: &mut Parser<T>,
        left: Expression,
        precedence: Option<Precedence>,
    ) -> Result<Self, ParseError>;
}

pub struct Parser<T: Iterator<Item = Spanned>> {
    pub current_token: Option<Spanned>,
    pub next_token: Option<Spanned>,
    pub errors: Vec<ParseError>,

    tokens: T,
}

impl<T: Iterator<Item = Spanned>> Parser<T> {
    pub fn new(input: T) -> Self {
        let mut parser = Self {
            current_token: None,
            next_token: None,
            errors: vec![],

            tokens: input,
        };

        parser.step();
        parser.step();

        parser
    }

    pub fn step(&mut self) {
        let _ = self.next_token();
    }

    pub fn next_token(&mut self) -> Option<Spanned> {
        let t = self.current_token.take();

        // The end-of-file token marks the end of the stream; past it the
        // token window simply drains to `None`.
        let next = match self.tokens.next() {
            Some((_, Token::Eof, _)) | None => None,
            Some(tok) => Some(tok),
        };

        self.current_token = self.next_token.take();
        self.next_token = next;

        t
    }

    pub fn current_precedence(&self) -> Precedence {
        match &self.current_token {
            Some((_, token, _)) => Precedence::from(token),
            None => Precedence::Lowest,
        }
    }

    /// Parses the whole token stream. Always produces a `Program`; a
    /// statement that fails to parse is recorded in `errors` and the
    /// parser resynchronises at the next statement boundary, so a single
    /// run can surface several diagnostics. The program must not be
    /// evaluated when `errors` is non-empty.
    pub fn parse(&mut self) -> Parsed {
        let start = match &self.current_token {
            Some((start, _, _)) => *start,
            None => 0,
        };

        let mut statements: Vec<Statement> = vec![];

        while self.current_token.is_some() {
            match Statement::parse(self, None) {
                Ok(statement) => statements.push(statement),
                Err(error) => {
                    self.errors.push(error);
                    self.synchronize();
                },
            }
        }

        let end = statements.last()
            .map(|statement| statement.location().end)
            .unwrap_or(start);

        Parsed {
            program: Program {
                statements,
                location: SrcSpan { start, end },
            },
            errors: std::mem::take(&mut self.errors),
        }
    }

    // Skip to just past the next semicolon, or to the end of input.
    fn synchronize(&mut self) {
        loop {
            match self.current_token {
                Some((_, Token::Semicolon, _)) => {
                    self.step();
                    break;
                },
                Some(_) => self.step(),
                None => break,
            }
        }
    }

    pub fn expect_one(&mut self, token: Token) -> Result<(u32, u32), ParseError> {
        match self.current_token.take() {
            Some((start, tok, end)) if tok == token => {
                self.step();
                Ok((start, end))
            },
            Some(t) => {
                let (start, tok, end) = t.clone();
                self.current_token = Some(t);

                parse_error(
                    ParseErrorType::UnexpectedToken {
                        token: tok,
                        expected: vec![format!("`{}`", token.as_literal())],
                    },
                    SrcSpan { start, end },
                )
            },
            None => parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 },
            ),
        }
    }

    pub fn expect_ident(&mut self) -> Result<(u32, String, u32), ParseError> {
        match self.current_token.take() {
            Some((start, Token::Ident(value), end)) => {
                self.step();
                Ok((start, value, end))
            },
            Some(t) => {
                let (start, _, end) = t.clone();
                self.current_token = Some(t);

                parse_error(
                    ParseErrorType::ExpectedIdent,
                    SrcSpan { start, end },
                )
            },
            None => parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 },
            ),
        }
    }

    /// Comma-separated expressions up to (and including) `end`. Used by
    /// call arguments and array literals; a trailing comma is tolerated.
    pub fn expression_list(&mut self, end: Token) -> Result<(Vec<Expression>, u32), ParseError> {
        if let Ok((_, end_pos)) = self.expect_one(end.clone()) {
            return Ok((vec![], end_pos));
        }

        let mut items = vec![Expression::parse(self, None)?];

        while let Ok(_) = self.expect_one(Token::Comma) {
            if let Some((_, tok, _)) = &self.current_token {
                if *tok == end {
                    break;
                }
            }

            items.push(Expression::parse(self, None)?);
        }

        let (_, end_pos) = self.expect_one(end)?;

        Ok((items, end_pos))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
    Index,
}

impl From<&Token> for Precedence {
    fn from(value: &Token) -> Self {
        match value {
            Token::Equal | Token::NotEqual => Self::Equals,
            Token::LessThan | Token::GreaterThan => Self::LessGreater,
            Token::Plus | Token::Minus => Self::Sum,
            Token::Slash | Token::Asterisk => Self::Product,
            Token::LParen => Self::Call,
            Token::LBracket => Self::Index,
            _ => Self::Lowest,
        }
    }
}

pub fn parse_module(src: &str) -> Parsed {
    let lexer = Lexer::new(src.char_indices().map(|(i, c)| (i as u32, c)));
    let mut parser = Parser::new(lexer);

    parser.parse()
}

pub fn parse_module_from_stream(stream: impl Iterator<Item = char>) -> Parsed {
    let lexer = Lexer::new(stream
        .scan(0, |pos, c| {
            *pos += c.len_utf8() as u32;
            Some((*pos - c.len_utf8() as u32, c))
        })
    );
    let mut parser = Parser::new(lexer);

    parser.parse()
}
