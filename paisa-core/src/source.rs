use async_trait::async_trait;

use crate::PaisaError;
use crate::types::InflationPoint;

/// The single async entry point the dashboard layer programs against.
///
/// Implementations fetch raw observations from their upstream, run them
/// through [`crate::series::normalize::normalize`], and return the derived
/// series. One call is one attempt: retry, caching, and deduplication of
/// concurrent identical requests are the caller's concern. A superseded
/// call's late result may simply be dropped, since the computation is pure
/// and idempotent.
#[async_trait]
pub trait InflationSource: Send + Sync {
    /// Fetch and normalize the full inflation series for the configured
    /// country.
    ///
    /// # Errors
    /// Fails with a fetch-class [`PaisaError`] (`Status`, `Transport`,
    /// `Envelope`) when the upstream cannot be read, and with
    /// `PaisaError::EmptyData` when no usable observations remain after
    /// filtering. No partial series is ever returned.
    async fn fetch_inflation_series(&self) -> Result<Vec<InflationPoint>, PaisaError>;
}
