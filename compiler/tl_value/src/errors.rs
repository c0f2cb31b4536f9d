//! Execution errors returned by builtins and the evaluator.
//!
//! Errors are values: every failure is returned through `EvalResult`, never
//! raised. Factory functions (e.g. `division_by_zero()`) are the public API
//! and fill in both `kind` and the exact user-facing `message`.

use std::fmt;

use thiserror::Error;

use crate::{Arity, Line, Value};

/// Result of calling a builtin or evaluating a call.
pub type EvalResult = Result<Value, ExecutionError>;

/// Category of an execution error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Too few arguments for a variadic operator with a manual minimum.
    Arity,
    /// An operand had the wrong dynamic type.
    Type,
    /// A divisor was exactly zero.
    DivisionByZero,
    /// A call site named a symbol with no binding.
    UndefinedSymbol,
    /// A call site resolved to a value that cannot be called.
    NotCallable,
    /// Argument count rejected by a callable's declared arity.
    ArgumentCount,
}

impl ErrorKind {
    /// Short label used when diagnostics are rendered with their category.
    pub fn label(self) -> &'static str {
        match self {
            Self::Arity => "arity error",
            Self::Type => "type error",
            Self::DivisionByZero => "division by zero",
            Self::UndefinedSymbol => "undefined symbol",
            Self::NotCallable => "not callable",
            Self::ArgumentCount => "argument count",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Failure of a call, carrying the call-site line and a message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct ExecutionError {
    /// Line of the call site that failed.
    pub line: Line,
    /// Structured category, for matching without parsing the message.
    pub kind: ErrorKind,
    /// Human-readable message, without the line prefix.
    pub message: String,
}

impl ExecutionError {
    pub fn new(line: Line, kind: ErrorKind, message: impl Into<String>) -> Self {
        ExecutionError {
            line,
            kind,
            message: message.into(),
        }
    }

    #[inline]
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

// Arithmetic errors

/// Variadic operator called with fewer than two arguments.
#[cold]
pub fn too_few_arguments(line: Line, symbol: &str) -> ExecutionError {
    ExecutionError::new(
        line,
        ErrorKind::Arity,
        format!("'{symbol}' requires at least two arguments"),
    )
}

/// Operand that is not a number.
#[cold]
pub fn not_a_number(line: Line, symbol: &str) -> ExecutionError {
    ExecutionError::new(
        line,
        ErrorKind::Type,
        format!("'{symbol}' is only defined for numbers"),
    )
}

/// Zero divisor. The message does not name the operator.
#[cold]
pub fn division_by_zero(line: Line) -> ExecutionError {
    ExecutionError::new(line, ErrorKind::DivisionByZero, "Division by zero")
}

// Dispatch errors

/// Symbol with no binding at the call site.
#[cold]
pub fn undefined_symbol(line: Line, name: &str) -> ExecutionError {
    ExecutionError::new(
        line,
        ErrorKind::UndefinedSymbol,
        format!("undefined symbol '{name}'"),
    )
}

/// Call site whose head is not a procedure.
#[cold]
pub fn not_callable(line: Line, type_name: &str) -> ExecutionError {
    ExecutionError::new(
        line,
        ErrorKind::NotCallable,
        format!("{type_name} is not callable"),
    )
}

/// Argument count rejected by the declared arity.
#[cold]
pub fn wrong_arg_count(line: Line, name: &str, arity: Arity, got: usize) -> ExecutionError {
    let arg_word = if arity == Arity::Exact(1) {
        "argument"
    } else {
        "arguments"
    };
    ExecutionError::new(
        line,
        ErrorKind::ArgumentCount,
        format!("'{name}' expects {arity} {arg_word}, got {got}"),
    )
}
