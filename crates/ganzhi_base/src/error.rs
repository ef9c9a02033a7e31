//! Error types for stem-branch calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ganzhi_time::TimeError;

/// A table lookup that produced no valid entry.
///
/// This only happens when a reference table is corrupted or a derivation has
/// a logic defect. The computation that hit it is aborted; no default pillar
/// is ever substituted.
#[derive(Debug, Clone, PartialEq)]
pub struct InvariantViolation {
    /// Name of the failing lookup, e.g. `"month stem table"`.
    pub lookup: &'static str,
    /// What was looked up and what came back.
    pub detail: String,
}

impl Display for InvariantViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} lookup failed: {}", self.lookup, self.detail)
    }
}

/// Errors from stem-branch calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GanzhiError {
    /// Civil date/time validation failed.
    Time(TimeError),
    /// Caller supplied a value outside the accepted domain.
    InvalidInput(&'static str),
    /// Internal table or derivation defect.
    Invariant(InvariantViolation),
}

impl GanzhiError {
    /// Build an invariant violation and log it.
    pub fn invariant(lookup: &'static str, detail: String) -> Self {
        tracing::error!(lookup, %detail, "stem-branch invariant violated");
        Self::Invariant(InvariantViolation { lookup, detail })
    }
}

impl Display for GanzhiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Invariant(v) => write!(f, "invariant violation: {v}"),
        }
    }
}

impl Error for GanzhiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for GanzhiError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
