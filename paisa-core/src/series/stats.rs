use crate::series::round::{round1, round2};
use crate::types::{InflationPoint, SummaryStats};

/// Summary statistics for the given (already filtered) window.
///
/// All figures are relative to the window's own first point, not the
/// dataset's global base year: they answer "what happened to money within
/// this window" regardless of where the window starts.
///
/// Returns `None` on an empty slice — a valid state before data has
/// loaded. A single-point window yields the degenerate result
/// (`current_value` 100.0, `percent_lost` 0.0, `multiplier` 1.0,
/// `years_span` 0).
#[must_use]
pub fn compute_stats(filtered: &[InflationPoint]) -> Option<SummaryStats> {
    let first = filtered.first()?;
    let last = filtered.last()?;

    let relative_value = last.purchasing_power / first.purchasing_power * 100.0;
    let current_value = round2(relative_value);
    let multiplier = if current_value == 0.0 {
        0.0
    } else {
        round1(100.0 / current_value)
    };

    Some(SummaryStats {
        start_year: first.year,
        end_year: last.year,
        current_value,
        percent_lost: round1(100.0 - relative_value),
        years_span: last.year - first.year,
        multiplier,
    })
}
