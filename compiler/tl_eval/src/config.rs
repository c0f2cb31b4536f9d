//! Interpreter configuration.
//!
//! Plain data with a `Default`; policy lives on the `Interpreter`. Settings
//! can be overridden from the environment with `InterpreterConfig::from_env`.

use tl_value::ExecutionError;

/// Variable selecting the diagnostic style (`plain` or `tagged`).
pub const DIAGNOSTICS_VAR: &str = "TINYLISP_DIAGNOSTICS";
/// Variable controlling declared-arity checks (`0`/`false` disables).
pub const CHECK_ARITY_VAR: &str = "TINYLISP_CHECK_ARITY";

/// How errors are rendered for the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DiagnosticStyle {
    /// `line N: message`
    #[default]
    Plain,
    /// `line N: [kind] message`
    Tagged,
}

impl DiagnosticStyle {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Some(Self::Plain),
            "tagged" => Some(Self::Tagged),
            _ => None,
        }
    }

    pub fn render(self, err: &ExecutionError) -> String {
        match self {
            Self::Plain => err.to_string(),
            Self::Tagged => format!("line {}: [{}] {}", err.line, err.kind, err.message),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Reject calls whose argument count the callee's declared `Arity`
    /// does not accept, before the callee runs.
    pub check_declared_arity: bool,
    pub diagnostics: DiagnosticStyle,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            check_declared_arity: true,
            diagnostics: DiagnosticStyle::Plain,
        }
    }
}

impl InterpreterConfig {
    /// Defaults overridden by `TINYLISP_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `lookup`. Unrecognised values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(DIAGNOSTICS_VAR) {
            match DiagnosticStyle::parse(&raw) {
                Some(style) => config.diagnostics = style,
                None => tracing::warn!(var = DIAGNOSTICS_VAR, value = %raw, "unknown diagnostic style"),
            }
        }

        if let Some(raw) = lookup(CHECK_ARITY_VAR) {
            match parse_flag(&raw) {
                Some(flag) => config.check_declared_arity = flag,
                None => tracing::warn!(var = CHECK_ARITY_VAR, value = %raw, "expected a boolean"),
            }
        }

        config
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
