//! Test helpers for exercising callables without an evaluator.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{not_callable, CallContext, EvalResult, Line, Value};

/// Call context that dispatches builtins directly and counts re-entrant calls.
#[derive(Default)]
pub struct MockContext {
    applied: AtomicUsize,
}

impl MockContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `apply` was called.
    pub fn applied(&self) -> usize {
        self.applied.load(Ordering::Relaxed)
    }
}

impl CallContext for MockContext {
    fn apply(&self, callee: &Value, line: Line, args: &[Value]) -> EvalResult {
        self.applied.fetch_add(1, Ordering::Relaxed);
        match callee.as_builtin() {
            Some(builtin) => builtin.call(line, self, args),
            None => Err(not_callable(line, callee.type_name())),
        }
    }
}
