//! The calling convention shared by every builtin procedure.
//!
//! The evaluator needs no per-builtin special cases: it asks a `Callable`
//! for its declared `Arity`, then invokes `call` with the evaluated
//! arguments, the call-site line and a `CallContext`.

use std::fmt;

use crate::{EvalResult, Line, Value};

/// Declared argument count of a callable.
///
/// `Variadic` is the "any number of arguments" sentinel. A variadic builtin
/// may still enforce its own minimum inside `call`; the declaration does not
/// encode it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// Any number of arguments.
    Variadic,
}

impl Arity {
    /// Whether `count` arguments satisfy this declaration.
    #[inline]
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => n == count,
            Arity::Variadic => true,
        }
    }

    #[inline]
    pub fn is_variadic(self) -> bool {
        matches!(self, Arity::Variadic)
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{n}"),
            Arity::Variadic => f.write_str("any number of"),
        }
    }
}

/// Handle to the running interpreter, passed into every builtin call.
///
/// Lets higher-order builtins call back into the evaluator. Implementations
/// must tolerate concurrent use through a shared reference.
pub trait CallContext {
    /// Apply `callee` to already-evaluated arguments.
    fn apply(&self, callee: &Value, line: Line, args: &[Value]) -> EvalResult;
}

/// A builtin procedure the evaluator can invoke.
///
/// Implementations are stateless and shared as `&'static dyn Callable`.
/// `call` must not mutate its arguments or any shared state, and identical
/// inputs must always give identical outputs.
pub trait Callable: Send + Sync {
    /// Symbol the builtin is bound to (e.g. `"+"`).
    fn name(&self) -> &'static str;

    /// Declared argument count.
    fn arity(&self) -> Arity;

    /// Invoke the builtin.
    fn call(&self, line: Line, ctx: &dyn CallContext, args: &[Value]) -> EvalResult;
}

impl fmt::Debug for dyn Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<builtin {}>", self.name())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
