use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Display;
use std::rc::Rc;

use crate::object::prelude::Environment;
use crate::parser::prelude::{Block, Identifier};

pub const TRUE: Object = Object::Boolean { value: true };
pub const FALSE: Object = Object::Boolean { value: false };
pub const NULL: Object = Object::Null;

pub type BuiltinFunction = fn(Vec<Object>) -> Object;

/// A runtime value. Evaluation failures travel through this type as
/// `Error` values rather than through `Result`, so every composition
/// point checks for them explicitly and passes them upward unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Integer {
        value: i64,
    },
    Boolean {
        value: bool,
    },
    Str {
        value: String,
    },
    Array {
        elements: Vec<Object>,
    },
    Hash {
        pairs: HashMap<HashKey, HashPair>,
    },
    Function(Function),
    Builtin {
        name: &'static str,
        func: BuiltinFunction,
    },
    ReturnValue {
        value: Box<Object>,
    },
    Error {
        message: String,
    },
    Null,
}

impl Object {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Integer { .. } => Kind::Integer,
            Self::Boolean { .. } => Kind::Boolean,
            Self::Str { .. } => Kind::Str,
            Self::Array { .. } => Kind::Array,
            Self::Hash { .. } => Kind::Hash,
            Self::Function(_) => Kind::Function,
            Self::Builtin { .. } => Kind::Builtin,
            Self::ReturnValue { .. } => Kind::ReturnValue,
            Self::Error { .. } => Kind::Error,
            Self::Null => Kind::Null,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Only integers, booleans and strings can key a hash.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Self::Integer { value } => Some(HashKey::Integer(*value)),
            Self::Boolean { value } => Some(HashKey::Boolean(*value)),
            Self::Str { value } => Some(HashKey::Str(value.clone())),
            _ => None,
        }
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer { value } => write!(f, "{value}"),
            Self::Boolean { value } => write!(f, "{value}"),
            Self::Str { value } => write!(f, "{value}"),
            Self::Array { elements } => {
                let elements = elements.iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>();

                write!(f, "[{}]", elements.join(", "))
            },
            Self::Hash { pairs } => {
                let pairs = pairs.values()
                    .map(|pair| format!("{}: {}", pair.key, pair.value))
                    .collect::<Vec<String>>();

                write!(f, "{{{}}}", pairs.join(", "))
            },
            Self::Function(function) => write!(f, "{function}"),
            Self::Builtin { .. } => write!(f, "builtin function"),
            Self::ReturnValue { value } => write!(f, "{value}"),
            Self::Error { message } => write!(f, "Error: {message}"),
            Self::Null => write!(f, "null"),
        }
    }
}

/// The name an object's type goes by in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Integer,
    Boolean,
    Str,
    Array,
    Hash,
    Function,
    Builtin,
    ReturnValue,
    Error,
    Null,
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Integer => "Integer",
            Self::Boolean => "Boolean",
            Self::Str => "String",
            Self::Array => "Array",
            Self::Hash => "Hash",
            Self::Function => "Function",
            Self::Builtin => "Builtin",
            Self::ReturnValue => "ReturnValue",
            Self::Error => "Error",
            Self::Null => "Null",
        };

        write!(f, "{name}")
    }
}

/// A user-defined function together with the environment it closed
/// over at the point of definition.
#[derive(Clone)]
pub struct Function {
    pub params: Vec<Identifier>,
    pub body: Block,
    pub env: Rc<RefCell<Environment>>,
}

// The captured environment can refer back to the function itself, so
// equality and debug formatting must not walk into it.
impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params
            && self.body == other.body
            && Rc::ptr_eq(&self.env, &other.env)
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
            .field("params", &self.params)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let params = self.params.iter()
            .map(|param| param.to_string())
            .collect::<Vec<String>>();

        write!(f, "fn({}) {{\n{}\n}}", params.join(", "), self.body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    Str(String),
}

/// Hash entries keep the original key object around so the literal can
/// be printed back the way it was written.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    pub key: Object,
    pub value: Object,
}
