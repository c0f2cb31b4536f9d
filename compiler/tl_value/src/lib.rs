//! TinyLisp Values - runtime values and the builtin calling convention.
//!
//! This crate provides:
//! - The dynamic `Value` type produced by the evaluator
//! - The `Callable` contract every builtin procedure implements
//! - Execution error types (`ExecutionError`, `ErrorKind`, `EvalResult`)
//!
//! # Architecture
//!
//! Builtins are stateless `'static` instances behind `&'static dyn Callable`.
//! The evaluator resolves a symbol to one of them, evaluates the argument
//! expressions to `Value`s, and hands the slice to `Callable::call` together
//! with the call-site line and a `CallContext` handle for re-entrant calls.

mod callable;
mod errors;
mod value;

#[cfg(test)]
mod test_helpers;

pub use callable::{Arity, CallContext, Callable};
pub use errors::{ErrorKind, EvalResult, ExecutionError};
pub use value::Value;

// Re-export error constructors for use by other crates
pub use errors::{
    division_by_zero, not_a_number, not_callable, too_few_arguments, undefined_symbol,
    wrong_arg_count,
};

/// Source line of a call site, used for diagnostics only.
pub type Line = u32;
