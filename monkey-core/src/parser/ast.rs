use std::fmt::Display;

use crate::{
    lexer::prelude::{Spanned, Token},
    parser::prelude::{parse_error, InfixParse, Parse, ParseErrorType, Precedence},
    utils::prelude::SrcSpan,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub program: Program,
    pub errors: Vec<crate::parser::prelude::ParseError>,
}

// program -> { <statement> }
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
    pub location: SrcSpan,
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }

        Ok(())
    }
}

// statement -> <let> | <return> | <expression_statement>
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(Let),
    Return(Return),
    Expression(ExpressionStatement),
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Statement {
    fn parse(
        parser: &mut crate::parser::prelude::Parser<T>,
        _precedence: Option<Precedence>,
    ) -> Result<Self, crate::parser::prelude::ParseError> {
        let statement = match &parser.current_token {
            Some((_, Token::Let, _)) => Self::Let(Let::parse(parser, None)?),
            Some((_, Token::Return, _)) => Self::Return(Return::parse(parser, None)?),
            Some(_) => Self::Expression(ExpressionStatement::parse(parser, None)?),
            None => return parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 },
            ),
        };

        // the statement terminator is optional
        if let Some((_, Token::Semicolon, _)) = parser.current_token {
            parser.step();
        }

        Ok(statement)
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Let(let_) => write!(f, "{let_}"),
            Self::Return(return_) => write!(f, "{return_}"),
            Self::Expression(expression) => write!(f, "{expression}"),
        }
    }
}

impl Statement {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Let(let_) => let_.location,
            Self::Return(return_) => return_.location,
            Self::Expression(expression) => expression.location,
        }
    }
}

// let -> let <identifier> = <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Let {
    pub name: Identifier,
    pub value: Expression,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Let {
    fn parse(
        parser: &mut crate::parser::prelude::Parser<T>,
        _precedence: Option<Precedence>,
    ) -> Result<Self, crate::parser::prelude::ParseError> {
        let (start, _) = parser.expect_one(Token::Let)?;

        let name = Identifier::from(parser.expect_ident()?);

        parser.expect_one(Token::Assign)?;

        let value = Expression::parse(parser, None)?;
        let end = value.location().end;

        Ok(Self {
            name,
            value,
            location: SrcSpan { start, end },
        })
    }
}

impl Display for Let {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "let {} = {};", self.name, self.value)
    }
}

// return -> return <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    pub value: Expression,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Return {
    fn parse(
        parser: &mut crate::parser::prelude::Parser<T>,
        _precedence: Option<Precedence>,
    ) -> Result<Self, crate::parser::prelude::ParseError> {
        let (start, _) = parser.expect_one(Token::Return)?;

        let value = Expression::parse(parser, None)?;
        let end = value.location().end;

        Ok(Self {
            value,
            location: SrcSpan { start, end },
        })
    }
}

impl Display for Return {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "return {};", self.value)
    }
}

// expression_statement -> <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = Spanned>> Parse<T> for ExpressionStatement {
    fn parse(
        parser: &mut crate::parser::prelude::Parser<T>,
        _precedence: Option<Precedence>,
    ) -> Result<Self, crate::parser::prelude::ParseError> {
        let expression = Expression::parse(parser, None)?;
        let location = expression.location();

        Ok(Self {
            expression,
            location,
        })
    }
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

// block -> { "{" { <statement> } "}" }
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Block {
    fn parse(
        parser: &mut crate::parser::prelude::Parser<T>,
        _precedence: Option<Precedence>,
    ) -> Result<Self, crate::parser::prelude::ParseError> {
        let (start, mut end) = parser.expect_one(Token::LBrace)?;

        let mut statements = vec![];

        loop {
            match &parser.current_token {
                Some((_, Token::RBrace, _)) => {
                    end = parser.expect_one(Token::RBrace)?.1;
                    break;
                },
                Some(_) => statements.push(Statement::parse(parser, None)?),
                None => return parse_error(
                    ParseErrorType::UnexpectedEof,
                    SrcSpan { start, end },
                ),
            }
        }

        Ok(Self {
            statements,
            location: SrcSpan { start, end },
        })
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }

        Ok(())
    }
}

// expression -> <identifier> | <literal> | <prefix> | <infix> | <if>
//             | <function> | <call> | <index> | "(" <expression> ")"
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(BooleanLiteral),
    StringLit(StringLiteral),
    Array(ArrayLiteral),
    Hash(HashLiteral),
    Prefix(Prefix),
    Infix(Infix),
    If(If),
    Function(FunctionLiteral),
    Call(Call),
    Index(Index),
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Expression {
    fn parse(
        parser: &mut crate::parser::prelude::Parser<T>,
        precedence: Option<Precedence>,
    ) -> Result<Self, crate::parser::prelude::ParseError> {
        // prefix position: build the left-hand expression
        let mut expression = match &parser.current_token {
            Some((start, token, end)) => match token {
                Token::Ident(_) => {
                    Self::Identifier(Identifier::from(parser.expect_ident()?))
                },
                Token::Int(_) => Self::Integer(IntegerLiteral::parse(parser, None)?),
                Token::Str(_) => Self::StringLit(StringLiteral::parse(parser, None)?),
                Token::True | Token::False => {
                    Self::Boolean(BooleanLiteral::parse(parser, None)?)
                },
                Token::Bang | Token::Minus => Self::Prefix(Prefix::parse(parser, None)?),
                Token::If => Self::If(If::parse(parser, None)?),
                Token::Function => Self::Function(FunctionLiteral::parse(parser, None)?),
                Token::LBracket => Self::Array(ArrayLiteral::parse(parser, None)?),
                Token::LBrace => Self::Hash(HashLiteral::parse(parser, None)?),
                Token::LParen => {
                    parser.expect_one(Token::LParen)?;

                    let expression = Expression::parse(parser, None)?;

                    parser.expect_one(Token::RParen)?;

                    expression
                },
                _ => return parse_error(
                    ParseErrorType::NoPrefixFunction {
                        token: token.clone(),
                    },
                    SrcSpan { start: *start, end: *end },
                ),
            },
            None => return parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 },
            ),
        };

        // infix position: climb while the pending operator binds tighter
        while precedence.unwrap_or(Precedence::Lowest) < parser.current_precedence() {
            expression = match &parser.current_token {
                Some((_, token, _)) => match token {
                    token if token.is_operator() => {
                        Self::Infix(Infix::parse(parser, expression, precedence)?)
                    },
                    Token::LParen => Self::Call(Call::parse(parser, expression, precedence)?),
                    Token::LBracket => Self::Index(Index::parse(parser, expression, precedence)?),
                    _ => break,
                },
                None => break,
            }
        }

        Ok(expression)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(identifier) => write!(f, "{identifier}"),
            Self::Integer(integer) => write!(f, "{integer}"),
            Self::Boolean(boolean) => write!(f, "{boolean}"),
            Self::StringLit(string) => write!(f, "{string}"),
            Self::Array(array) => write!(f, "{array}"),
            Self::Hash(hash) => write!(f, "{hash}"),
            Self::Prefix(prefix) => write!(f, "{prefix}"),
            Self::Infix(infix) => write!(f, "{infix}"),
            Self::If(if_) => write!(f, "{if_}"),
            Self::Function(function) => write!(f, "{function}"),
            Self::Call(call) => write!(f, "{call}"),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl Expression {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Identifier(identifier) => identifier.location,
            Self::Integer(integer) => integer.location,
            Self::Boolean(boolean) => boolean.location,
            Self::StringLit(string) => string.location,
            Self::Array(array) => array.location,
            Self::Hash(hash) => hash.location,
            Self::Prefix(prefix) => prefix.location,
            Self::Infix(infix) => infix.location,
            Self::If(if_) => if_.location,
            Self::Function(function) => function.location,
            Self::Call(call) => call.location,
            Self::Index(index) => index.location,
        }
    }
}

// identifier -> (<letter> | _) { <letter> | <digit> | _ }
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub value: String,
    pub location: SrcSpan,
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<(u32, String, u32)> for Identifier {
    fn from(value: (u32, String, u32)) -> Self {
        Identifier {
            value: value.1,
            location: SrcSpan { start: value.0, end: value.2 },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub value: i64,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = Spanned>> Parse<T> for IntegerLiteral {
    fn parse(
        parser: &mut crate::parser::prelude::Parser<T>,
        _precedence: Option<Precedence>,
    ) -> Result<Self, crate::parser::prelude::ParseError> {
        match parser.next_token() {
            Some((start, Token::Int(literal), end)) => {
                let location = SrcSpan { start, end };

                match literal.parse::<i64>() {
                    Ok(value) => Ok(Self { value, location }),
                    Err(_) => parse_error(
                        ParseErrorType::InvalidIntegerLiteral { literal },
                        location,
                    ),
                }
            },
            Some((start, token, end)) => parse_error(
                ParseErrorType::UnexpectedToken {
                    token,
                    expected: vec!["an Int".to_string()],
                },
                SrcSpan { start, end },
            ),
            None => parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 },
            ),
        }
    }
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
    pub value: bool,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = Spanned>> Parse<T> for BooleanLiteral {
    fn parse(
        parser: &mut crate::parser::prelude::Parser<T>,
        _precedence: Option<Precedence>,
    ) -> Result<Self, crate::parser::prelude::ParseError> {
        match parser.next_token() {
            Some((start, Token::True, end)) => Ok(Self {
                value: true,
                location: SrcSpan { start, end },
            }),
            Some((start, Token::False, end)) => Ok(Self {
                value: false,
                location: SrcSpan { start, end },
            }),
            Some((start, token, end)) => parse_error(
                ParseErrorType::UnexpectedToken {
                    token,
                    expected: vec!["`true`".to_string(), "`false`".to_string()],
                },
                SrcSpan { start, end },
            ),
            None => parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 },
            ),
        }
    }
}

impl Display for BooleanLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub value: String,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = Spanned>> Parse<T> for StringLiteral {
    fn parse(
        parser: &mut crate::parser::prelude::Parser<T>,
        _precedence: Option<Precedence>,
    ) -> Result<Self, crate::parser::prelude::ParseError> {
        match parser.next_token() {
            Some((start, Token::Str(value), end)) => Ok(Self {
                value,
                location: SrcSpan { start, end },
            }),
            Some((start, token, end)) => parse_error(
                ParseErrorType::UnexpectedToken {
                    token,
                    expected: vec!["a String".to_string()],
                },
                SrcSpan { start, end },
            ),
            None => parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 },
            ),
        }
    }
}

impl Display for StringLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

// array -> "[" [ <expression> {, <expression> } ] "]"
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLiteral {
    pub elements: Vec<Expression>,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = Spanned>> Parse<T> for ArrayLiteral {
    fn parse(
        parser: &mut crate::parser::prelude::Parser<T>,
        _precedence: Option<Precedence>,
    ) -> Result<Self, crate::parser::prelude::ParseError> {
        let (start, _) = parser.expect_one(Token::LBracket)?;

        let (elements, end) = parser.expression_list(Token::RBracket)?;

        Ok(Self {
            elements,
            location: SrcSpan { start, end },
        })
    }
}

impl Display for ArrayLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let elements = self.elements.iter()
            .map(|element| element.to_string())
            .collect::<Vec<String>>();

        write!(f, "[{}]", elements.join(", "))
    }
}

// hash -> "{" [ <expression> : <expression> {, <expression> : <expression> } [,] ] "}"
#[derive(Debug, Clone, PartialEq)]
pub struct HashLiteral {
    pub pairs: Vec<(Expression, Expression)>,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = Spanned>> Parse<T> for HashLiteral {
    fn parse(
        parser: &mut crate::parser::prelude::Parser<T>,
        _precedence: Option<Precedence>,
    ) -> Result<Self, crate::parser::prelude::ParseError> {
        let (start, _) = parser.expect_one(Token::LBrace)?;

        let mut pairs = vec![];

        let end = loop {
            if let Ok((_, end)) = parser.expect_one(Token::RBrace) {
                break end;
            }

            let key = Expression::parse(parser, None)?;

            parser.expect_one(Token::Colon)?;

            let value = Expression::parse(parser, None)?;

            pairs.push((key, value));

            if let Err(_) = parser.expect_one(Token::Comma) {
                let (_, end) = parser.expect_one(Token::RBrace)?;
                break end;
            }
        };

        Ok(Self {
            pairs,
            location: SrcSpan { start, end },
        })
    }
}

impl Display for HashLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pairs = self.pairs.iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect::<Vec<String>>();

        write!(f, "{{{}}}", pairs.join(", "))
    }
}

// prefix -> (! | -) <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Prefix {
    pub operator: Token,
    pub right: Box<Expression>,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Prefix {
    fn parse(
        parser: &mut crate::parser::prelude::Parser<T>,
        _precedence: Option<Precedence>,
    ) -> Result<Self, crate::parser::prelude::ParseError> {
        let Some((start, operator, _)) = parser.next_token() else {
            return parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 },
            );
        };

        let right = Expression::parse(parser, Some(Precedence::Prefix))?;
        let end = right.location().end;

        Ok(Self {
            operator,
            right: Box::new(right),
            location: SrcSpan { start, end },
        })
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.operator.as_literal(), self.right)
    }
}

// infix -> <expression> <operator> <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Infix {
    pub left: Box<Expression>,
    pub operator: Token,
    pub right: Box<Expression>,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = Spanned>> InfixParse<T> for Infix {
    fn parse(
        parser: &mut crate::parser::prelude::Parser<T>,
        left: Expression,
        _precedence: Option<Precedence>,
    ) -> Result<Self, crate::parser::prelude::ParseError> {
        let precedence = parser.current_precedence();

        let SrcSpan { start, .. } = left.location();

        let operator = match &parser.current_token {
            Some((_, token, _)) if token.is_operator() => token.clone(),
            Some((start, token, end)) => return parse_error(
                ParseErrorType::UnexpectedToken {
                    token: token.clone(),
                    expected: vec!["an operator".to_string()],
                },
                SrcSpan { start: *start, end: *end },
            ),
            None => return parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 },
            ),
        };

        parser.step();

        let right = Expression::parse(parser, Some(precedence))?;

        let SrcSpan { end, .. } = right.location();

        Ok(Self {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            location: SrcSpan { start, end },
        })
    }
}

impl Display for Infix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator.as_literal(), self.right)
    }
}

// if -> if "(" <expression> ")" <block> [ else <block> ]
#[derive(Debug, Clone, PartialEq)]
pub struct If {
    pub condition: Box<Expression>,
    pub consequence: Block,
    pub alternative: Option<Block>,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = Spanned>> Parse<T> for If {
    fn parse(
        parser: &mut crate::parser::prelude::Parser<T>,
        _precedence: Option<Precedence>,
    ) -> Result<Self, crate::parser::prelude::ParseError> {
        let (start, _) = parser.expect_one(Token::If)?;

        parser.expect_one(Token::LParen)?;

        let condition = Expression::parse(parser, None)?;

        parser.expect_one(Token::RParen)?;

        let consequence = Block::parse(parser, None)?;

        let mut end = consequence.location.end;

        let alternative = match parser.expect_one(Token::Else) {
            Ok(_) => {
                let alternative = Block::parse(parser, None)?;

                end = alternative.location.end;

                Some(alternative)
            },
            Err(_) => None,
        };

        Ok(Self {
            condition: Box::new(condition),
            consequence,
            alternative,
            location: SrcSpan { start, end },
        })
    }
}

impl Display for If {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "if {} {}", self.condition, self.consequence)?;

        if let Some(alternative) = &self.alternative {
            write!(f, " else {alternative}")?;
        }

        Ok(())
    }
}

// function -> fn "(" [ <identifier> {, <identifier> } ] ")" <block>
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    pub params: Vec<Identifier>,
    pub body: Block,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = Spanned>> Parse<T> for FunctionLiteral {
    fn parse(
        parser: &mut crate::parser::prelude::Parser<T>,
        _precedence: Option<Precedence>,
    ) -> Result<Self, crate::parser::prelude::ParseError> {
        let (start, _) = parser.expect_one(Token::Function)?;

        parser.expect_one(Token::LParen)?;

        let mut params = vec![];

        if let Err(_) = parser.expect_one(Token::RParen) {
            params.push(Identifier::from(parser.expect_ident()?));

            while let Ok(_) = parser.expect_one(Token::Comma) {
                params.push(Identifier::from(parser.expect_ident()?));
            }

            parser.expect_one(Token::RParen)?;
        }

        let body = Block::parse(parser, None)?;
        let end = body.location.end;

        Ok(Self {
            params,
            body,
            location: SrcSpan { start, end },
        })
    }
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let params = self.params.iter()
            .map(|param| param.to_string())
            .collect::<Vec<String>>();

        write!(f, "fn({}) {}", params.join(", "), self.body)
    }
}

// call -> <expression> "(" [ <expression> {, <expression> } ] ")"
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = Spanned>> InfixParse<T> for Call {
    fn parse(
        parser: &mut crate::parser::prelude::Parser<T>,
        left: Expression,
        _precedence: Option<Precedence>,
    ) -> Result<Self, crate::parser::prelude::ParseError> {
        let start = left.location().start;

        parser.expect_one(Token::LParen)?;

        let (arguments, end) = parser.expression_list(Token::RParen)?;

        Ok(Self {
            callee: Box::new(left),
            arguments,
            location: SrcSpan { start, end },
        })
    }
}

impl Display for Call {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arguments = self.arguments.iter()
            .map(|argument| argument.to_string())
            .collect::<Vec<String>>();

        write!(f, "{}({})", self.callee, arguments.join(", "))
    }
}

// index -> <expression> "[" <expression> "]"
#[derive(Debug, Clone, PartialEq)]
pub struct Index {
    pub left: Box<Expression>,
    pub index: Box<Expression>,
    pub location: SrcSpan,
}

impl<T: Iterator<Item = Spanned>> InfixParse<T> for Index {
    fn parse(
        parser: &mut crate::parser::prelude::Parser<T>,
        left: Expression,
        _precedence: Option<Precedence>,
    ) -> Result<Self, crate::parser::prelude::ParseError> {
        let start = left.location().start;

        parser.expect_one(Token::LBracket)?;

        let index = Expression::parse(parser, None)?;

        let (_, end) = parser.expect_one(Token::RBracket)?;

        Ok(Self {
            left: Box::new(left),
            index: Box::new(index),
            location: SrcSpan { start, end },
        })
    }
}

impl Display for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}[{}])", self.left, self.index)
    }
}
