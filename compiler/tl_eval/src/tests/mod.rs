//! Tests that exercise the interpreter and the operators together.

#![allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
