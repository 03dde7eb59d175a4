//! Warning collection for partial-failure isolation.
//!
//! One failing unit must never drop its siblings: extraction folds every
//! handle collection through [`Warnings::fold_loaded`], keeping the units
//! that materialized and recording one warning per unit that did not.

use crate::model::Handle;
use itertools::Itertools;
use std::fmt;

/// One recorded extraction warning, naming the unit that was skipped or
/// degraded and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub unit: String,
    pub detail: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.unit, self.detail)
    }
}

/// Ordered collector of extraction warnings, passed down the extractor
/// stack. Every recorded warning is also emitted through `tracing`.
#[derive(Debug, Default)]
pub struct Warnings {
    entries: Vec<Warning>,
}

impl Warnings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one warning and logs it.
    pub fn record(&mut self, unit: impl Into<String>, detail: impl Into<String>) {
        let warning = Warning {
            unit: unit.into(),
            detail: detail.into(),
        };
        tracing::warn!(unit = %warning.unit, detail = %warning.detail, "extraction warning");
        self.entries.push(warning);
    }

    /// Loads every handle in order, keeping the successes and recording one
    /// warning per failure. The result preserves input order, which keeps
    /// the emitted document diff-friendly.
    pub fn fold_loaded<'a, T>(&mut self, unit_kind: &str, handles: &'a [Handle<T>]) -> Vec<&'a T> {
        let mut loaded = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.load() {
                Ok(value) => loaded.push(value),
                Err(error) => {
                    self.record(format!("{} '{}'", unit_kind, handle.label()), error.to_string());
                }
            }
        }
        loaded
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// One-line summary of all warnings, for shell-side logs.
    pub fn summary(&self) -> String {
        self.entries.iter().join("; ")
    }

    pub fn into_vec(self) -> Vec<Warning> {
        self.entries
    }
}
