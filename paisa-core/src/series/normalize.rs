use crate::PaisaError;
use crate::series::round::round2;
use crate::types::{InflationPoint, RawObservation};

/// Normalize raw observations into the derived purchasing-power series.
///
/// - Observations without a value are discarded.
/// - The remainder is stable-sorted ascending by year; duplicate years
///   collapse to the first occurrence after the sort, so the output
///   carries exactly one point per year.
/// - Purchasing power is computed against the chronologically first
///   surviving observation (`round2(base / v * 100)`), which makes the
///   first point exactly `100.0`.
/// - The inflation rate of a point is the percent change against the
///   immediately preceding surviving observation — not necessarily the
///   previous calendar year when a year is missing — and exactly `0.0`
///   for the first point.
///
/// # Errors
/// Returns `Err(PaisaError::EmptyData)` when no observation carries a
/// value, including the empty-input case.
pub fn normalize(observations: Vec<RawObservation>) -> Result<Vec<InflationPoint>, PaisaError> {
    let mut valid: Vec<(i32, f64)> = observations
        .into_iter()
        .filter_map(|o| o.value.map(|v| (o.year, v)))
        .collect();
    valid.sort_by_key(|&(year, _)| year);
    valid.dedup_by_key(|&mut (year, _)| year);

    let Some(&(_, base)) = valid.first() else {
        return Err(PaisaError::EmptyData);
    };

    let mut points = Vec::with_capacity(valid.len());
    let mut prev: Option<f64> = None;
    for (year, cpi) in valid {
        let inflation_rate = match prev {
            Some(p) => round2((cpi - p) / p * 100.0),
            None => 0.0,
        };
        points.push(InflationPoint {
            year,
            cpi,
            purchasing_power: round2(base / cpi * 100.0),
            inflation_rate,
        });
        prev = Some(cpi);
    }

    Ok(points)
}
