//! Numeric arithmetic builtins: `+`, `-`, `*`, `/`.
//!
//! The four operators share one fold. They differ only in the step function,
//! in how the accumulator is seeded, and in division's zero-divisor guard,
//! so they are variants of a single `ArithOp` enum rather than four types.
//!
//! Every operator declares `Arity::Variadic` but requires at least two
//! arguments; the minimum is checked inside `call`, not derived from the
//! declaration.

use tl_value::{
    division_by_zero, not_a_number, too_few_arguments, Arity, CallContext, Callable, EvalResult,
    ExecutionError, Line, Value,
};

/// Fewest arguments any arithmetic operator accepts.
pub const MIN_ARGS: usize = 2;

/// An arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// How the accumulator of a fold starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Seed {
    /// Start from this identity and fold over every argument.
    Identity(f64),
    /// Start from the first argument and fold over the rest.
    FirstArgument,
}

impl ArithOp {
    pub const ALL: [ArithOp; 4] = [ArithOp::Add, ArithOp::Sub, ArithOp::Mul, ArithOp::Div];

    /// Symbol the operator is bound to.
    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
        }
    }

    pub fn seed(self) -> Seed {
        match self {
            ArithOp::Add => Seed::Identity(0.0),
            ArithOp::Sub | ArithOp::Mul | ArithOp::Div => Seed::FirstArgument,
        }
    }

    /// One step of the fold. Division rejects an exactly-zero divisor.
    #[inline]
    fn step(self, line: Line, acc: f64, operand: f64) -> Result<f64, ExecutionError> {
        match self {
            ArithOp::Add => Ok(acc + operand),
            ArithOp::Sub => Ok(acc - operand),
            ArithOp::Mul => Ok(acc * operand),
            ArithOp::Div if operand == 0.0 => Err(division_by_zero(line)),
            ArithOp::Div => Ok(acc / operand),
        }
    }

    /// Fold `args` left to right.
    ///
    /// Fewer than two arguments fail before any argument is inspected.
    /// After that the fold stops at the first non-number or, for division,
    /// the first zero divisor, whichever comes first in argument order.
    pub fn fold(self, line: Line, args: &[Value]) -> Result<f64, ExecutionError> {
        if args.len() < MIN_ARGS {
            return Err(too_few_arguments(line, self.symbol()));
        }

        let mut operands = args
            .iter()
            .map(|arg| arg.as_number().ok_or_else(|| not_a_number(line, self.symbol())));

        let mut acc = match self.seed() {
            Seed::Identity(identity) => identity,
            Seed::FirstArgument => match operands.next() {
                Some(first) => first?,
                None => return Err(too_few_arguments(line, self.symbol())),
            },
        };

        for operand in operands {
            acc = self.step(line, acc, operand?)?;
        }
        Ok(acc)
    }
}

impl Callable for ArithOp {
    fn name(&self) -> &'static str {
        self.symbol()
    }

    fn arity(&self) -> Arity {
        Arity::Variadic
    }

    #[tracing::instrument(level = "trace", skip(self, _ctx, args), fields(op = self.symbol(), argc = args.len()))]
    fn call(&self, line: Line, _ctx: &dyn CallContext, args: &[Value]) -> EvalResult {
        self.fold(line, args).map(Value::Number)
    }
}

// Shared instances, one per symbol
pub static ADD: ArithOp = ArithOp::Add;
pub static SUB: ArithOp = ArithOp::Sub;
pub static MUL: ArithOp = ArithOp::Mul;
pub static DIV: ArithOp = ArithOp::Div;

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
