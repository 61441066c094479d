use crate::{lexer::prelude::Token, utils::prelude::SrcSpan};

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
    ExpectedIdent,
    UnexpectedEof,
    UnexpectedToken {
        token: Token,
        expected: Vec<String>,
    },
    NoPrefixFunction {
        token: Token,
    },
    InvalidIntegerLiteral {
        literal: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub error: ParseErrorType,
    pub span: SrcSpan,
}

impl ParseError {
    pub fn details(&self) -> (String, Vec<String>) {
        match &self.error {
            ParseErrorType::ExpectedIdent => ("Expected identifier".into(), vec![]),
            ParseErrorType::UnexpectedEof => ("Unexpected end of file".into(), vec![]),
            ParseErrorType::UnexpectedToken { token, expected } => {
                let found = match token {
                    Token::Int(_) => "an Int".to_string(),
                    Token::Str(_) => "a String".to_string(),
                    Token::Ident(_) => "an Identifier".to_string(),
                    Token::Illegal(ch) => format!("an illegal character `{ch}`"),
                    _ if token.is_keyword() => format!("the keyword `{}`", token.as_literal()),
                    _ => format!("`{}`", token.as_literal()),
                };

                let messages = std::iter::once(format!("Found {found}, expected one of: "))
                    .chain(expected.iter().map(|s| format!("- {s}")))
                    .collect();

                ("Not expected this".into(), messages)
            },
            ParseErrorType::NoPrefixFunction { token } => {
                (format!("No prefix parse function for `{}` found", token.as_literal()), vec![])
            },
            ParseErrorType::InvalidIntegerLiteral { literal } => {
                (format!("Could not parse `{literal}` as integer"), vec![])
            },
        }
    }
}

pub fn parse_error<T>(error: ParseErrorType, span: SrcSpan) -> Result<T, ParseError> {
    Err(ParseError { error, span })
}
