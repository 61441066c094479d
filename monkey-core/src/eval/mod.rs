use std::cell::RefCell;
use std::collections::HashMap;
use std::io::BufReader;
use std::path::Path;
use std::rc::Rc;

use utf8_chars::BufReadCharsExt;

use crate::lexer::prelude::Token;
use crate::object::prelude::{
    builtin, Environment, Function, HashPair, Object, FALSE, NULL, TRUE,
};
use crate::parser::prelude::{
    parse_module, parse_module_from_stream, Block, Expression, HashLiteral, Identifier, If,
    Program, Statement,
};
use crate::utils::prelude::Error;

/// The outcome of evaluating a source file: the program that was
/// parsed and the value it reduced to.
#[derive(Debug)]
pub struct Evaluated {
    pub program: Program,
    pub object: Object,
}

/// Reads and evaluates a whole source file. Parse errors and runtime
/// errors both surface as `Error` so the driver can pretty-print them.
pub fn interpret(path: &Path) -> Result<Evaluated, Error> {
    let src = std::fs::read_to_string(path)
        .map_err(|error| Error::StdIo { err: error.kind() })?;

    let parsed = parse_module(&src);

    if !parsed.errors.is_empty() {
        return Err(Error::Parse {
            path: path.to_path_buf(),
            src,
            errors: parsed.errors,
        });
    }

    match eval(&parsed.program, Environment::new()) {
        Object::Error { message } => Err(Error::Runtime { message }),
        object => Ok(Evaluated {
            program: parsed.program,
            object,
        }),
    }
}

/// Like [`interpret`], but feeds the parser from a buffered character
/// stream instead of slurping the file up front. The source is still
/// accumulated on the side so diagnostics can quote it.
pub fn interpret_from_stream(path: &Path) -> Result<Evaluated, Error> {
    let file = std::fs::File::open(path)
        .map_err(|error| Error::StdIo { err: error.kind() })?;
    let mut reader = BufReader::new(file);

    let mut src = String::new();
    let parsed = parse_module_from_stream(
        reader.chars()
            .map_while(Result::ok)
            .map(|c| {
                src.push(c);
                c
            }),
    );

    if !parsed.errors.is_empty() {
        return Err(Error::Parse {
            path: path.to_path_buf(),
            src,
            errors: parsed.errors,
        });
    }

    match eval(&parsed.program, Environment::new()) {
        Object::Error { message } => Err(Error::Runtime { message }),
        object => Ok(Evaluated {
            program: parsed.program,
            object,
        }),
    }
}

/// Evaluates a program to a single value. At the top level a
/// `ReturnValue` is unwrapped and an `Error` stops evaluation; both
/// are handed back as-is to the caller.
pub fn eval(program: &Program, env: Rc<RefCell<Environment>>) -> Object {
    let mut result = NULL;

    for statement in &program.statements {
        result = eval_statement(statement, env.clone());

        match result {
            Object::ReturnValue { value } => return *value,
            Object::Error { .. } => return result,
            _ => {},
        }
    }

    result
}

fn eval_statement(statement: &Statement, env: Rc<RefCell<Environment>>) -> Object {
    match statement {
        Statement::Let(let_) => {
            let value = eval_expression(&let_.value, env.clone());

            if value.is_error() {
                return value;
            }

            env.borrow_mut().set(let_.name.value.clone(), value.clone());

            value
        },
        Statement::Return(return_) => {
            let value = eval_expression(&return_.value, env);

            if value.is_error() {
                return value;
            }

            Object::ReturnValue { value: Box::new(value) }
        },
        Statement::Expression(statement) => eval_expression(&statement.expression, env),
    }
}

// Blocks pass `ReturnValue` and `Error` through without unwrapping, so
// a return deep inside nested blocks still stops the outer ones.
fn eval_block(block: &Block, env: Rc<RefCell<Environment>>) -> Object {
    let mut result = NULL;

    for statement in &block.statements {
        result = eval_statement(statement, env.clone());

        if matches!(result, Object::ReturnValue { .. } | Object::Error { .. }) {
            return result;
        }
    }

    result
}

fn eval_expression(expression: &Expression, env: Rc<RefCell<Environment>>) -> Object {
    match expression {
        Expression::Identifier(identifier) => eval_identifier(identifier, env),
        Expression::Integer(integer) => Object::Integer { value: integer.value },
        Expression::Boolean(boolean) => native_bool(boolean.value),
        Expression::StringLit(string) => Object::Str { value: string.value.clone() },
        Expression::Array(array) => match eval_expressions(&array.elements, env) {
            Ok(elements) => Object::Array { elements },
            Err(error) => error,
        },
        Expression::Hash(hash) => eval_hash_literal(hash, env),
        Expression::Prefix(prefix) => {
            let right = eval_expression(&prefix.right, env);

            if right.is_error() {
                return right;
            }

            eval_prefix(&prefix.operator, right)
        },
        Expression::Infix(infix) => {
            let left = eval_expression(&infix.left, env.clone());

            if left.is_error() {
                return left;
            }

            let right = eval_expression(&infix.right, env);

            if right.is_error() {
                return right;
            }

            eval_infix(&infix.operator, left, right)
        },
        Expression::If(if_) => eval_if(if_, env),
        Expression::Function(function) => Object::Function(Function {
            params: function.params.clone(),
            body: function.body.clone(),
            env,
        }),
        Expression::Call(call) => {
            let callee = eval_expression(&call.callee, env.clone());

            if callee.is_error() {
                return callee;
            }

            match eval_expressions(&call.arguments, env) {
                Ok(arguments) => apply_function(callee, arguments),
                Err(error) => error,
            }
        },
        Expression::Index(index) => {
            let left = eval_expression(&index.left, env.clone());

            if left.is_error() {
                return left;
            }

            let idx = eval_expression(&index.index, env);

            if idx.is_error() {
                return idx;
            }

            eval_index(left, idx)
        },
    }
}

fn eval_identifier(identifier: &Identifier, env: Rc<RefCell<Environment>>) -> Object {
    if let Some(value) = env.borrow().get(&identifier.value) {
        return value;
    }

    // builtins resolve last, so user bindings can shadow them
    if let Some(value) = builtin(&identifier.value) {
        return value;
    }

    Object::Error {
        message: format!("identifier not found: {}", identifier.value),
    }
}

fn eval_prefix(operator: &Token, right: Object) -> Object {
    match operator {
        Token::Bang => match right {
            Object::Boolean { value } => native_bool(!value),
            Object::Null => TRUE,
            _ => FALSE,
        },
        Token::Minus => match right {
            Object::Integer { value } => Object::Integer { value: value.wrapping_neg() },
            other => Object::Error {
                message: format!("unknown operator: -{}", other.kind()),
            },
        },
        other => Object::Error {
            message: format!("unknown operator: {}{}", other.as_literal(), right.kind()),
        },
    }
}

fn eval_infix(operator: &Token, left: Object, right: Object) -> Object {
    match (left, right) {
        (Object::Integer { value: left }, Object::Integer { value: right }) => {
            eval_integer_infix(operator, left, right)
        },
        (Object::Str { value: left }, Object::Str { value: right })
            if *operator == Token::Plus =>
        {
            Object::Str { value: format!("{left}{right}") }
        },
        (Object::Boolean { value: left }, Object::Boolean { value: right }) => match operator {
            Token::Equal => native_bool(left == right),
            Token::NotEqual => native_bool(left != right),
            _ => Object::Error {
                message: format!(
                    "unknown operator: Boolean {} Boolean",
                    operator.as_literal(),
                ),
            },
        },
        (left, right) if left.kind() != right.kind() => Object::Error {
            message: format!(
                "type mismatch: {} {} {}",
                left.kind(),
                operator.as_literal(),
                right.kind(),
            ),
        },
        (left, right) => Object::Error {
            message: format!(
                "unknown operator: {} {} {}",
                left.kind(),
                operator.as_literal(),
                right.kind(),
            ),
        },
    }
}

// Arithmetic wraps on overflow; no operator may abort the host, so
// `MIN / -1` wraps too instead of trapping.
fn eval_integer_infix(operator: &Token, left: i64, right: i64) -> Object {
    match operator {
        Token::Plus => Object::Integer { value: left.wrapping_add(right) },
        Token::Minus => Object::Integer { value: left.wrapping_sub(right) },
        Token::Asterisk => Object::Integer { value: left.wrapping_mul(right) },
        Token::Slash => {
            if right == 0 {
                return Object::Error { message: "division by zero".to_string() };
            }

            Object::Integer { value: left.wrapping_div(right) }
        },
        Token::LessThan => native_bool(left < right),
        Token::GreaterThan => native_bool(left > right),
        Token::Equal => native_bool(left == right),
        Token::NotEqual => native_bool(left != right),
        other => Object::Error {
            message: format!("unknown operator: Integer {} Integer", other.as_literal()),
        },
    }
}

fn eval_if(if_: &If, env: Rc<RefCell<Environment>>) -> Object {
    let condition = eval_expression(&if_.condition, env.clone());

    if condition.is_error() {
        return condition;
    }

    if is_truthy(&condition) {
        eval_block(&if_.consequence, env)
    } else if let Some(alternative) = &if_.alternative {
        eval_block(alternative, env)
    } else {
        NULL
    }
}

/// Evaluates expressions left to right, stopping at the first error.
fn eval_expressions(
    expressions: &[Expression],
    env: Rc<RefCell<Environment>>,
) -> Result<Vec<Object>, Object> {
    let mut results = Vec::with_capacity(expressions.len());

    for expression in expressions {
        let value = eval_expression(expression, env.clone());

        if value.is_error() {
            return Err(value);
        }

        results.push(value);
    }

    Ok(results)
}

fn apply_function(callee: Object, arguments: Vec<Object>) -> Object {
    match callee {
        Object::Function(function) => {
            if arguments.len() != function.params.len() {
                return Object::Error {
                    message: format!(
                        "wrong number of arguments. got={}, want={}",
                        arguments.len(),
                        function.params.len(),
                    ),
                };
            }

            // arguments bind in a child of the environment the function
            // captured at definition, not of the caller's
            let env = Environment::new_enclosed(function.env.clone());

            for (param, argument) in function.params.iter().zip(arguments) {
                env.borrow_mut().set(param.value.clone(), argument);
            }

            match eval_block(&function.body, env) {
                Object::ReturnValue { value } => *value,
                other => other,
            }
        },
        Object::Builtin { func, .. } => func(arguments),
        other => Object::Error {
            message: format!("not a function: {}", other.kind()),
        },
    }
}

fn eval_index(left: Object, index: Object) -> Object {
    match (left, index) {
        (Object::Array { elements }, Object::Integer { value }) => usize::try_from(value)
            .ok()
            .and_then(|index| elements.get(index).cloned())
            .unwrap_or(NULL),
        (Object::Hash { pairs }, index) => match index.hash_key() {
            Some(key) => pairs.get(&key)
                .map(|pair| pair.value.clone())
                .unwrap_or(NULL),
            None => Object::Error {
                message: format!("unusable as hash key: {}", index.kind()),
            },
        },
        (left, _) => Object::Error {
            message: format!("index operator not supported: {}", left.kind()),
        },
    }
}

fn eval_hash_literal(hash: &HashLiteral, env: Rc<RefCell<Environment>>) -> Object {
    let mut pairs = HashMap::new();

    for (key_expression, value_expression) in &hash.pairs {
        let key = eval_expression(key_expression, env.clone());

        if key.is_error() {
            return key;
        }

        let Some(hash_key) = key.hash_key() else {
            return Object::Error {
                message: format!("unusable as hash key: {}", key.kind()),
            };
        };

        let value = eval_expression(value_expression, env.clone());

        if value.is_error() {
            return value;
        }

        let _ = pairs.insert(hash_key, HashPair { key, value });
    }

    Object::Hash { pairs }
}

// Everything except `false` and `null` is truthy.
fn is_truthy(object: &Object) -> bool {
    !matches!(object, Object::Null | Object::Boolean { value: false })
}

fn native_bool(value: bool) -> Object {
    if value {
        TRUE
    } else {
        FALSE
    }
}

#[cfg(test)]
mod tests;
