//! TinyLisp Eval - builtin dispatch for the TinyLisp evaluator.
//!
//! This crate provides the evaluator side of the builtin calling convention:
//! - `ArithOp`: the `+ - * /` operators as one table-driven `Callable`
//! - `BuiltinTable`: the immutable symbol → builtin table built at startup
//! - `Interpreter`: the `CallContext` that resolves and dispatches calls
//! - `InterpreterConfig`: dispatch and diagnostic settings
//!
//! # Re-exports
//!
//! Value and error types from `tl_value` are re-exported for convenience.

mod arithmetic;
mod config;
mod interpreter;
mod registry;

#[cfg(test)]
mod tests;

use std::sync::Once;

pub use tl_value::{
    Arity, CallContext, Callable, ErrorKind, EvalResult, ExecutionError, Line, Value,
};

pub use arithmetic::{ArithOp, Seed, ADD, DIV, MIN_ARGS, MUL, SUB};
pub use config::{DiagnosticStyle, InterpreterConfig, CHECK_ARITY_VAR, DIAGNOSTICS_VAR};
pub use interpreter::Interpreter;
pub use registry::{BuiltinModule, BuiltinTable, ARITHMETIC_MODULE, STANDARD_MODULES};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=tl_eval=debug` or `RUST_LOG=tl_eval=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
