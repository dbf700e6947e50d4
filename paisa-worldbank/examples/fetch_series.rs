//! Fetch the live Indian CPI series and print a window summary.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p paisa-worldbank --example fetch_series
//! ```

use paisa_core::{InflationSource, YearRange, align_events, compute_stats, events, select_range};
use paisa_worldbank::WorldBankConnector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let connector = WorldBankConnector::new_default();
    let series = connector.fetch_inflation_series().await?;
    println!(
        "{} points, {} through {}",
        series.len(),
        series[0].year,
        series[series.len() - 1].year
    );

    let range = YearRange::new(1991, 2020)?;
    let window = select_range(&series, &range);

    if let Some(stats) = compute_stats(&window) {
        println!(
            "Rs 100 from {} bought Rs {:.2} worth of goods in {} \
             ({:.1}% of purchasing power lost over {} years; {:.1}x more money for the same basket)",
            stats.start_year,
            stats.current_value,
            stats.end_year,
            stats.percent_lost,
            stats.years_span,
            stats.multiplier,
        );
    }

    for annotated in align_events(&events::india(), &window) {
        println!(
            "{}  {:<24} y={:>6.2}  {}",
            annotated.event.year, annotated.event.label, annotated.normalized_y, annotated.event.description
        );
    }

    Ok(())
}
