use paisa_core::{PaisaError, RawObservation, compute_stats, normalize, rebase};
use proptest::prelude::*;

fn arb_observation() -> impl Strategy<Value = RawObservation> {
    // Positive CPI values only; a statistical index is never zero or
    // negative.
    (1900i32..2100, prop::option::of(0.5f64..50_000.0))
        .prop_map(|(year, value)| RawObservation { year, value })
}

proptest! {
    #[test]
    fn normalization_invariants_hold(
        observations in proptest::collection::vec(arb_observation(), 0..80)
    ) {
        match normalize(observations.clone()) {
            Ok(points) => {
                // Strictly ascending, one point per year.
                prop_assert!(points.windows(2).all(|w| w[0].year < w[1].year));

                // The base year is the fixed reference.
                prop_assert_eq!(points[0].purchasing_power, 100.0);
                prop_assert_eq!(points[0].inflation_rate, 0.0);

                // Exactly the distinct non-null input years survive.
                let mut years: Vec<i32> = observations
                    .iter()
                    .filter(|o| o.value.is_some())
                    .map(|o| o.year)
                    .collect();
                years.sort_unstable();
                years.dedup();
                prop_assert_eq!(points.iter().map(|p| p.year).collect::<Vec<_>>(), years);

                // Purchasing power never goes negative for positive CPI.
                prop_assert!(points.iter().all(|p| p.purchasing_power >= 0.0));
            }
            Err(e) => {
                // Normalization only fails when nothing survives filtering.
                prop_assert!(observations.iter().all(|o| o.value.is_none()));
                prop_assert!(matches!(e, PaisaError::EmptyData));
            }
        }
    }

    #[test]
    fn windowed_views_are_consistent(
        observations in proptest::collection::vec(arb_observation(), 2..60)
    ) {
        let Ok(points) = normalize(observations) else {
            return Ok(());
        };

        let rebased = rebase(&points);
        prop_assert_eq!(rebased.len(), points.len());
        prop_assert_eq!(rebased[0], 100.0);

        if let Some(stats) = compute_stats(&points) {
            prop_assert_eq!(stats.start_year, points[0].year);
            prop_assert_eq!(stats.end_year, points[points.len() - 1].year);
            prop_assert_eq!(stats.years_span, stats.end_year - stats.start_year);
        }
    }
}
