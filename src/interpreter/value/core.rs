use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    ast::Block,
    interpreter::{
        environment::Environment,
        value::{
            hash_key::{HashKey, HashPair},
            methods::Builtin,
        },
    },
};

/// Shared, mutable element storage of an array value.
pub type Elements = Rc<RefCell<Vec<Value>>>;
/// Shared, mutable pair storage of a hash value.
pub type Pairs = Rc<RefCell<HashMap<HashKey, HashPair>>>;

/// Represents a runtime value in the interpreter.
///
/// Scalars (integers, floats, booleans, null, strings) behave as immutable
/// values. Arrays and hashes are reference-like: cloning a `Value` clones
/// the handle, so every binding to the same array observes its mutations.
/// The `Return`/`Break`/`Continue` variants are control sentinels that only
/// exist while propagating through block evaluation, and `Empty` marks
/// statements with no user-visible result so the REPL does not echo them.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit float.
    Float(f64),
    /// A boolean.
    Bool(bool),
    /// The null value.
    Null,
    /// An immutable UTF-8 string.
    Str(String),
    /// A mutable, shared array.
    Array(Elements),
    /// A mutable, shared hash map.
    Hash(Pairs),
    /// A user function together with its captured environment.
    Function(Rc<Function>),
    /// A native built-in function.
    Builtin(Builtin),
    /// Control sentinel produced by `return`.
    Return(Box<Value>),
    /// Control sentinel produced by `break`.
    Break,
    /// Control sentinel produced by `continue`.
    Continue,
    /// The result of statements that produce no user-visible value.
    Empty,
}

/// A user-defined function value.
///
/// Captures the environment active at its definition site; calls evaluate
/// the body in a fresh scope enclosed by that environment, which is how
/// closures observe later mutations of outer bindings.
pub struct Function {
    /// Parameter names in declaration order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body: Block,
    /// The environment captured at the definition site.
    pub env: Rc<Environment>,
}

impl std::fmt::Debug for Function {
    /// Omits the captured environment: a named function is reachable from
    /// its own defining scope, so walking it would never terminate.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
            .field("parameters", &self.parameters)
            .field("body", &self.body.to_string())
            .finish()
    }
}

impl Value {
    /// Returns the value's type name as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Float(_) => "FLOAT",
            Self::Bool(_) => "BOOLEAN",
            Self::Null => "NULL",
            Self::Str(_) => "STRING",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Return(_) => "RETURN_VALUE",
            Self::Break => "BREAK",
            Self::Continue => "CONTINUE",
            Self::Empty => "EMPTY",
        }
    }

    /// Tests the value's truthiness.
    ///
    /// Only `false` and `null` are falsy; every other value is truthy,
    /// including zero and the empty string.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Bool(false))
    }

    /// Builds an array value from a vector of elements.
    #[must_use]
    pub fn array(elements: Vec<Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(elements)))
    }

    /// Builds a hash value from a pair map.
    #[must_use]
    pub fn hash(pairs: HashMap<HashKey, HashPair>) -> Self {
        Self::Hash(Rc::new(RefCell::new(pairs)))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(elements: Vec<Self>) -> Self {
        Self::array(elements)
    }
}

impl PartialEq for Value {
    /// Structural equality for tests and helpers.
    ///
    /// Arrays and hashes compare by contents here; the language-level `==`
    /// operator instead uses reference identity for them, implemented in
    /// the evaluator.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(l), Self::Integer(r)) => l == r,
            (Self::Float(l), Self::Float(r)) => l == r,
            (Self::Bool(l), Self::Bool(r)) => l == r,
            (Self::Null, Self::Null) | (Self::Break, Self::Break) => true,
            (Self::Continue, Self::Continue) | (Self::Empty, Self::Empty) => true,
            (Self::Str(l), Self::Str(r)) => l == r,
            (Self::Array(l), Self::Array(r)) => {
                Rc::ptr_eq(l, r) || *l.borrow() == *r.borrow()
            },
            (Self::Hash(l), Self::Hash(r)) => Rc::ptr_eq(l, r) || *l.borrow() == *r.borrow(),
            (Self::Function(l), Self::Function(r)) => Rc::ptr_eq(l, r),
            (Self::Builtin(l), Self::Builtin(r)) => l.name == r.name,
            (Self::Return(l), Self::Return(r)) => l == r,
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    /// Writes the value's inspect form.
    ///
    /// Strings print raw (no surrounding quotes), floats print with a
    /// minimal decimal representation, arrays as `[e1, e2]`, hashes as
    /// `{k: v}` in unspecified order, and functions as
    /// `fn(a, b) { <body> }`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::Str(value) => write!(f, "{value}"),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (index, element) in elements.borrow().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::Hash(pairs) => {
                write!(f, "{{")?;
                for (index, pair) in pairs.borrow().values().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                write!(f, "}}")
            },
            Self::Function(function) => {
                write!(f, "fn({}) {{ {} }}", function.parameters.join(", "), function.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Return(value) => write!(f, "{value}"),
            Self::Break => write!(f, "break"),
            Self::Continue => write!(f, "continue"),
            Self::Empty => Ok(()),
        }
    }
}
