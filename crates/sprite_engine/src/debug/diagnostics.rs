//! Diagnostic channel for rejected scene operations
//!
//! Scene and layer operations never panic on bad input. They report what
//! went wrong here and leave their state untouched, so this channel is the
//! way callers find out that a call was dropped.

use std::collections::VecDeque;
use std::fmt;

use crate::core::config::DEFAULT_DIAGNOSTIC_HISTORY;

/// Log target used for every diagnostic
pub const DIAGNOSTIC_TARGET: &str = "sprite_engine::diagnostics";

/// How serious a diagnostic is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Informational message
    Info,
    /// A request was rejected or partially dropped
    Warning,
}

/// A single reported condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Operation that produced it, e.g. `scene.move_layer`
    pub category: &'static str,
    /// Severity of the condition
    pub severity: Severity,
    /// Human readable description
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)
    }
}

/// Bounded diagnostic history
///
/// Every entry is also forwarded to the `log` facade. Once the history is
/// full the oldest entry is evicted.
#[derive(Debug, Clone)]
pub struct Diagnostics {
    entries: VecDeque<Diagnostic>,
    capacity: usize,
}

impl Diagnostics {
    /// Create a channel that keeps at most `capacity` entries
    ///
    /// Storage grows on demand; `capacity` only bounds the history.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Report a rejected request
    pub fn warning(&mut self, category: &'static str, message: impl Into<String>) {
        let message = message.into();
        log::warn!(target: DIAGNOSTIC_TARGET, "{}: {}", category, message);
        self.push(Diagnostic { category, severity: Severity::Warning, message });
    }

    /// Report an informational message
    pub fn info(&mut self, category: &'static str, message: impl Into<String>) {
        let message = message.into();
        log::info!(target: DIAGNOSTIC_TARGET, "{}: {}", category, message);
        self.push(Diagnostic { category, severity: Severity::Info, message });
    }

    fn push(&mut self, diagnostic: Diagnostic) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(diagnostic);
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been retained
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry
    pub fn last(&self) -> Option<&Diagnostic> {
        self.entries.back()
    }

    /// Retained entries, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Number of retained warnings in a category
    pub fn count_in(&self, category: &str) -> usize {
        self.entries
            .iter()
            .filter(|d| d.severity == Severity::Warning && d.category == category)
            .count()
    }

    /// Take every retained entry, leaving the history empty
    pub fn drain(&mut self) -> Vec<Diagnostic> {
        self.entries.drain(..).collect()
    }

    /// Forget every retained entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_DIAGNOSTIC_HISTORY)
    }
}
