//! Error types for birth-chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ganzhi_base::GanzhiError;
use ganzhi_time::TimeError;

/// Errors from birth-chart computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Birth date or time failed validation.
    Time(TimeError),
    /// Stem-branch derivation failed.
    Ganzhi(GanzhiError),
    /// Birth descriptor is inconsistent.
    InvalidDescriptor(&'static str),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Ganzhi(e) => write!(f, "ganzhi error: {e}"),
            Self::InvalidDescriptor(msg) => write!(f, "invalid birth descriptor: {msg}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Ganzhi(e) => Some(e),
            Self::InvalidDescriptor(_) => None,
        }
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<GanzhiError> for ChartError {
    fn from(e: GanzhiError) -> Self {
        match e {
            GanzhiError::Time(t) => Self::Time(t),
            other => Self::Ganzhi(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ganzhi_time_errors_flatten() {
        let e: ChartError = GanzhiError::Time(TimeError::InvalidMinute(60)).into();
        assert_eq!(e, ChartError::Time(TimeError::InvalidMinute(60)));
    }

    #[test]
    fn display_prefixes() {
        let e: ChartError = GanzhiError::InvalidInput("lunar day must be 1-30").into();
        assert_eq!(e.to_string(), "ganzhi error: invalid input: lunar day must be 1-30");
        assert!(e.source().is_some());
    }
}
