use crate::types::{InflationPoint, YearRange};

/// Filter a series down to the inclusive year window.
///
/// Order is preserved and the per-point fields are untouched: purchasing
/// power and inflation rate stay relative to the global base year.
/// Window-relative figures are the business of
/// [`crate::series::stats::compute_stats`] and
/// [`crate::series::align::rebase`], which work from the filtered slice's
/// own endpoints.
#[must_use]
pub fn select_range(series: &[InflationPoint], range: &YearRange) -> Vec<InflationPoint> {
    series
        .iter()
        .filter(|p| range.contains(p.year))
        .copied()
        .collect()
}

/// The full year window covered by a series, for bounding range controls.
///
/// Returns `None` for series with fewer than two points, where no
/// non-degenerate window exists.
#[must_use]
pub fn available_range(series: &[InflationPoint]) -> Option<YearRange> {
    let first = series.first()?;
    let last = series.last()?;
    YearRange::new(first.year, last.year).ok()
}
