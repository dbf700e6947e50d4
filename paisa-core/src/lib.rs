//! paisa-core
//!
//! Core types and transformations shared across the paisa ecosystem.
//!
//! - `types`: common data structures (observations, series points, ranges,
//!   events, summary statistics).
//! - `error`: the unified `PaisaError` taxonomy.
//! - `source`: the `InflationSource` trait connectors implement.
//! - `series`: pure transformations from raw observations to the derived
//!   purchasing-power series, plus windowing, statistics, and event
//!   alignment.
//!
//! Every transformation in `series` is a pure function of its inputs: the
//! fetched series is computed once per fetch, and all downstream views
//! (chart windows, summary statistics, event annotations) are recomputed
//! from borrowed slices on each input change. Nothing here holds state.
#![warn(missing_docs)]

/// The unified error type for the paisa workspace.
pub mod error;
/// Built-in historical-event reference data.
pub mod events;
/// Series transformations: normalization, windowing, statistics, alignment.
pub mod series;
/// The async source trait connectors implement.
pub mod source;
pub mod types;

pub use error::PaisaError;
pub use series::align::{align_events, rebase};
pub use series::normalize::normalize;
pub use series::stats::compute_stats;
pub use series::window::{available_range, select_range};
pub use source::InflationSource;
pub use types::*;
