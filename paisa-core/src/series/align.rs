use crate::types::{AnnotatedEvent, HistoricalEvent, InflationPoint};

/// Align historical events against a filtered series.
///
/// An event survives only when its year falls inside the filtered window
/// and a point with exactly that year exists — no interpolation for
/// missing years; misses are silently dropped. Each survivor carries a
/// `normalized_y` in the same rebased scale [`rebase`] produces, so
/// markers land on the plotted line.
#[must_use]
pub fn align_events(
    events: &[HistoricalEvent],
    filtered: &[InflationPoint],
) -> Vec<AnnotatedEvent> {
    let Some(first) = filtered.first() else {
        return Vec::new();
    };

    events
        .iter()
        .filter(|e| e.year >= first.year && e.year <= filtered[filtered.len() - 1].year)
        .filter_map(|e| {
            let point = filtered.iter().find(|p| p.year == e.year)?;
            Some(AnnotatedEvent {
                event: e.clone(),
                point: *point,
                normalized_y: point.purchasing_power / first.purchasing_power * 100.0,
            })
        })
        .collect()
}

/// The display series a chart plots for a window: every point's purchasing
/// power rescaled so the window's first point is 100.
///
/// Empty input yields an empty series.
#[must_use]
pub fn rebase(filtered: &[InflationPoint]) -> Vec<f64> {
    let Some(first) = filtered.first() else {
        return Vec::new();
    };
    filtered
        .iter()
        .map(|p| p.purchasing_power / first.purchasing_power * 100.0)
        .collect()
}
