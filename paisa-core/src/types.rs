//! Common data structures shared by connectors and the dashboard layer.

use serde::{Deserialize, Serialize};

use crate::PaisaError;

/// One record from the source API after wire decoding.
///
/// Transient: observations exist only between the connector and
/// [`crate::series::normalize::normalize`]; null-valued entries are
/// excluded there and never reach the derived series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    /// Calendar year of the observation.
    pub year: i32,
    /// CPI value, `None` when the agency reported no figure for the year.
    pub value: Option<f64>,
}

/// A single derived point of the inflation series.
///
/// Immutable once computed. A normalized series is ascending by year and
/// carries exactly one point per year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InflationPoint {
    /// Calendar year.
    pub year: i32,
    /// Raw CPI value for the year.
    pub cpi: f64,
    /// What 100 units of currency from the base year buy in this year,
    /// rounded half-up to two decimals.
    pub purchasing_power: f64,
    /// Year-over-year CPI change in percent, rounded half-up to two
    /// decimals. Exactly `0.0` for the first point of a series.
    pub inflation_rate: f64,
}

/// An inclusive year window selected by the user.
///
/// Construction enforces `start_year < end_year`; a window is never empty
/// or reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    start_year: i32,
    end_year: i32,
}

impl YearRange {
    /// Build a validated year range.
    ///
    /// # Errors
    /// Returns `Err(PaisaError::InvalidArg)` when `start_year >= end_year`.
    pub fn new(start_year: i32, end_year: i32) -> Result<Self, PaisaError> {
        if start_year >= end_year {
            return Err(PaisaError::invalid_arg(format!(
                "start year {start_year} must precede end year {end_year}"
            )));
        }
        Ok(Self {
            start_year,
            end_year,
        })
    }

    /// First year of the window (inclusive).
    #[must_use]
    pub const fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Last year of the window (inclusive).
    #[must_use]
    pub const fn end_year(&self) -> i32 {
        self.end_year
    }

    /// Whether `year` falls inside the window.
    #[must_use]
    pub const fn contains(&self, year: i32) -> bool {
        year >= self.start_year && year <= self.end_year
    }
}

/// A macroeconomic event annotated on the chart.
///
/// Static reference data with a lifecycle independent of the fetched
/// series; events are merged with a series only at render time by
/// year-equality lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalEvent {
    /// Calendar year the event is anchored to.
    pub year: i32,
    /// Short label shown on the chart marker.
    pub label: String,
    /// Longer description for tooltips and the event ledger.
    pub description: String,
    /// Vertical offset hint for label positioning, in display units.
    pub offset_y: f64,
}

impl HistoricalEvent {
    /// Convenience constructor.
    pub fn new(
        year: i32,
        label: impl Into<String>,
        description: impl Into<String>,
        offset_y: f64,
    ) -> Self {
        Self {
            year,
            label: label.into(),
            description: description.into(),
            offset_y,
        }
    }
}

/// An event that survived alignment against a filtered series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedEvent {
    /// The source event.
    pub event: HistoricalEvent,
    /// The series point whose year matched the event exactly.
    pub point: InflationPoint,
    /// Marker y-position: the matched point's purchasing power rescaled so
    /// the window's first point sits at 100.
    pub normalized_y: f64,
}

/// Summary statistics for the currently selected window.
///
/// Ephemeral: recomputed whenever the window or the underlying series
/// changes, always relative to the window's first point rather than the
/// global base year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// First year of the window actually covered by data.
    pub start_year: i32,
    /// Last year of the window actually covered by data.
    pub end_year: i32,
    /// Value of 100 units from `start_year` in `end_year`, rounded half-up
    /// to two decimals.
    pub current_value: f64,
    /// Share of purchasing power lost across the window in percent,
    /// rounded half-up to one decimal. Negative under deflation.
    pub percent_lost: f64,
    /// Number of years spanned by the window.
    pub years_span: i32,
    /// How many times more money the same goods cost at the end of the
    /// window, rounded half-up to one decimal. `0.0` when purchasing power
    /// rounds to nothing.
    pub multiplier: f64,
}
