//! Builtin registration table.
//!
//! Builtins are grouped into static `BuiltinModule`s. A `BuiltinTable` is
//! built from modules once, when an interpreter is created, and is read-only
//! from then on.

use rustc_hash::FxHashMap;
use tl_value::Callable;

use crate::arithmetic::{ADD, DIV, MUL, SUB};

/// A named group of builtins, each bound to a symbol.
pub struct BuiltinModule {
    pub name: &'static str,
    pub entries: &'static [(&'static str, &'static dyn Callable)],
}

/// Numeric arithmetic: `+ - * /`.
pub static ARITHMETIC_MODULE: BuiltinModule = BuiltinModule {
    name: "arithmetic",
    entries: &[("+", &ADD), ("-", &SUB), ("*", &MUL), ("/", &DIV)],
};

/// Modules loaded by `BuiltinTable::standard`.
pub static STANDARD_MODULES: &[&BuiltinModule] = &[&ARITHMETIC_MODULE];

/// Immutable map from symbol to builtin.
pub struct BuiltinTable {
    entries: FxHashMap<&'static str, &'static dyn Callable>,
}

impl BuiltinTable {
    /// Build a table from `modules`, in order.
    ///
    /// A symbol bound by more than one module keeps the later binding.
    pub fn from_modules(modules: &[&BuiltinModule]) -> Self {
        let mut entries: FxHashMap<&'static str, &'static dyn Callable> = FxHashMap::default();
        for module in modules {
            for &(symbol, callable) in module.entries {
                if entries.insert(symbol, callable).is_some() {
                    tracing::warn!(symbol, module = module.name, "builtin rebound");
                }
            }
        }
        tracing::debug!(
            modules = modules.len(),
            builtins = entries.len(),
            "builtin table built"
        );
        BuiltinTable { entries }
    }

    /// Table with every standard module.
    pub fn standard() -> Self {
        Self::from_modules(STANDARD_MODULES)
    }

    pub fn get(&self, symbol: &str) -> Option<&'static dyn Callable> {
        self.entries.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bound symbols, sorted.
    pub fn symbols(&self) -> Vec<&'static str> {
        let mut symbols: Vec<_> = self.entries.keys().copied().collect();
        symbols.sort_unstable();
        symbols
    }
}

impl Default for BuiltinTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
