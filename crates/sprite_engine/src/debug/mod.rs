//! Debug module for diagnostics
//!
//! Holds the diagnostic channel that scene operations report rejected
//! requests through.

pub mod diagnostics;

pub use diagnostics::{Diagnostic, Diagnostics, Severity, DIAGNOSTIC_TARGET};
