use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{self, Debug, Display};
use std::rc::Rc;

use crate::prelude::{Block, Environment, Identifier};

#[derive(Debug, Clone)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    String(String),
    Null,
    ReturnValue(Box<Object>),
    Error(String),
    Function(Rc<Function>),
    Builtin(Builtin),
    Array(Vec<Object>),
    Hash(HashMap<HashKey, HashPair>),
}

impl Object {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Boolean(_) => "BOOLEAN",
            Self::String(_) => "STRING",
            Self::Null => "NULL",
            Self::ReturnValue(_) => "RETURN_VALUE",
            Self::Error(_) => "ERROR",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
        }
    }

    pub fn inspect(&self) -> String {
        match self {
            Self::Integer(value) => value.to_string(),
            Self::Boolean(value) => value.to_string(),
            Self::String(value) => value.clone(),
            Self::Null => "null".to_owned(),
            Self::ReturnValue(value) => value.inspect(),
            Self::Error(message) => format!("ERROR: {}", message),
            Self::Function(function) => {
                let parameters = function
                    .parameters
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>();
                format!("fn({}) {}", parameters.join(", "), function.body)
            }
            Self::Builtin(_) => "built-in function".to_owned(),
            Self::Array(elements) => {
                let elements = elements.iter().map(Object::inspect).collect::<Vec<_>>();
                format!("[{}]", elements.join(", "))
            }
            Self::Hash(pairs) => {
                let pairs = pairs
                    .values()
                    .map(|pair| format!("{}: {}", pair.key.inspect(), pair.value.inspect()))
                    .collect::<Vec<_>>();
                format!("{{{}}}", pairs.join(", "))
            }
        }
    }

    /// Integers, booleans and strings can serve as hash keys; everything
    /// else returns `None` and the caller reports the error.
    pub fn hash_key(&self) -> Option<HashKey> {
        let value = match self {
            Self::Integer(value) => *value as u64,
            Self::Boolean(value) => u64::from(*value),
            Self::String(value) => fnv1a(value.as_bytes()),
            _ => return None,
        };

        Some(HashKey {
            object_type: self.type_name(),
            value,
        })
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::Boolean(left), Self::Boolean(right)) => left == right,
            (Self::String(left), Self::String(right)) => left == right,
            (Self::Null, Self::Null) => true,
            (Self::ReturnValue(left), Self::ReturnValue(right)) => left == right,
            (Self::Error(left), Self::Error(right)) => left == right,
            (Self::Function(left), Self::Function(right)) => Rc::ptr_eq(left, right),
            (Self::Builtin(left), Self::Builtin(right)) => left.name == right.name,
            (Self::Array(left), Self::Array(right)) => left == right,
            (Self::Hash(left), Self::Hash(right)) => left == right,
            _ => false,
        }
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inspect())
    }
}

/// A user-defined function together with the environment it closed over.
#[derive(Clone)]
pub struct Function {
    pub parameters: Vec<Identifier>,
    pub body: Block,
    pub env: Rc<RefCell<Environment>>,
}

// The captured environment may contain the function itself; keep it out of
// the Debug output so printing cannot recurse.
impl Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub func: fn(&[Object]) -> Object,
}

/// Internal key of hash objects. Guest-level `==` and key equality agree:
/// two hashable objects produce the same key exactly when they are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    object_type: &'static str,
    value: u64,
}

/// The original key object is kept alongside the value for `inspect`.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    pub key: Object,
    pub value: Object,
}

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(FNV_PRIME)
    })
}
