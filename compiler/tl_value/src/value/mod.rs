//! Runtime values for the TinyLisp interpreter.
//!
//! Only `Number` takes part in arithmetic. Everything else exists so that
//! builtins can be handed the full range of values the evaluator produces
//! and reject the ones they do not support.
//!
//! Heap variants share their payload through `Arc`, so cloning a `Value` is
//! cheap and values can cross threads.

use std::fmt;
use std::sync::Arc;

use crate::Callable;

/// Runtime value in the TinyLisp interpreter.
#[derive(Clone, Debug)]
pub enum Value {
    /// The empty value.
    Nil,
    Bool(bool),
    /// The language's only numeric type.
    Number(f64),
    Str(Arc<str>),
    Symbol(Arc<str>),
    List(Arc<[Value]>),
    /// A builtin procedure.
    Builtin(&'static dyn Callable),
}

impl Value {
    #[inline]
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::Str(s.into())
    }

    pub fn symbol(name: impl Into<Arc<str>>) -> Self {
        Value::Symbol(name.into())
    }

    pub fn list(items: impl Into<Arc<[Value]>>) -> Self {
        Value::List(items.into())
    }

    #[inline]
    pub fn builtin(callable: &'static dyn Callable) -> Self {
        Value::Builtin(callable)
    }

    /// Extract the numeric payload, or `None` for any other variant.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Get the builtin behind this value, if it is one.
    pub fn as_builtin(&self) -> Option<&'static dyn Callable> {
        match self {
            Value::Builtin(callable) => Some(*callable),
            _ => None,
        }
    }

    /// Name of the variant, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::List(_) => "list",
            Value::Builtin(_) => "procedure",
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            #[allow(clippy::float_cmp, reason = "language equality is IEEE equality")]
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) | (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Builtin(a), Value::Builtin(b)) => a.name() == b.name(),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(true) => f.write_str("#t"),
            Value::Bool(false) => f.write_str("#f"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "\"{s}\""),
            Value::Symbol(name) => f.write_str(name),
            Value::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
            Value::Builtin(callable) => write!(f, "<builtin {}>", callable.name()),
        }
    }
}
