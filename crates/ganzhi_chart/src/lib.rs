//! Birth-chart computation on top of `ganzhi_base`.
//!
//! Takes a birth descriptor (Gregorian or lunisolar date, local clock time,
//! gender), normalizes it to a Gregorian civil time, and returns the four
//! pillars together with the luck cycle and the calendar context they were
//! derived from.

pub mod chart;
pub mod chart_types;
pub mod error;

pub use chart::{age_on, chart_for_birth, normalize_birth};
pub use chart_types::{BirthChart, BirthDescriptor, CalendarType, ChartConfig};
pub use error::ChartError;
