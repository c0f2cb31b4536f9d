//! The interpreter context builtins are invoked through.
//!
//! The `Interpreter` owns the builtin table and configuration. It resolves
//! call-site symbols, checks declared arity, and dispatches to the callee.
//! Errors from a builtin are returned unchanged; the interpreter only
//! decides how to render them for the user (`report`).

use tl_value::{
    not_callable, undefined_symbol, wrong_arg_count, CallContext, EvalResult, ExecutionError,
    Line, Value,
};

use crate::config::InterpreterConfig;
use crate::registry::BuiltinTable;

pub struct Interpreter {
    config: InterpreterConfig,
    builtins: BuiltinTable,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Interpreter with the default configuration and standard builtins.
    pub fn new() -> Self {
        Self::with_config(InterpreterConfig::default())
    }

    pub fn with_config(config: InterpreterConfig) -> Self {
        Self::with_builtins(config, BuiltinTable::standard())
    }

    pub fn with_builtins(config: InterpreterConfig, builtins: BuiltinTable) -> Self {
        Interpreter { config, builtins }
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    pub fn builtins(&self) -> &BuiltinTable {
        &self.builtins
    }

    /// Resolve a call-site symbol to its builtin.
    pub fn resolve(&self, line: Line, symbol: &str) -> EvalResult {
        self.builtins
            .get(symbol)
            .map(Value::builtin)
            .ok_or_else(|| undefined_symbol(line, symbol))
    }

    /// Resolve `symbol` and apply it to `args`.
    pub fn call_symbol(&self, line: Line, symbol: &str, args: &[Value]) -> EvalResult {
        let callee = self.resolve(line, symbol)?;
        self.apply(&callee, line, args)
    }

    /// Render an error for the user.
    pub fn report(&self, err: &ExecutionError) -> String {
        self.config.diagnostics.render(err)
    }
}

impl CallContext for Interpreter {
    #[tracing::instrument(level = "trace", skip(self, callee, args), fields(callee = %callee, argc = args.len()))]
    fn apply(&self, callee: &Value, line: Line, args: &[Value]) -> EvalResult {
        let Some(builtin) = callee.as_builtin() else {
            return Err(not_callable(line, callee.type_name()));
        };

        let arity = builtin.arity();
        if self.config.check_declared_arity && !arity.accepts(args.len()) {
            return Err(wrong_arg_count(line, builtin.name(), arity, args.len()));
        }

        builtin.call(line, self, args)
    }
}
