//! Built-in annotation ledgers.
//!
//! Events are static reference data: they are not derived from fetched
//! observations and are merged with a series only by year-equality lookup
//! at render time. Year-based lookup keeps the ledger robust against
//! upstream revisions that add or drop years.

use crate::types::HistoricalEvent;

/// The built-in ledger for the default country: major Indian macroeconomic
/// events, each with a vertical offset hint so neighbouring labels do not
/// overlap.
#[must_use]
pub fn india() -> Vec<HistoricalEvent> {
    vec![
        HistoricalEvent::new(
            1969,
            "Bank Nationalisation",
            "Nationalisation of 14 major commercial banks by Indira Gandhi",
            0.0,
        ),
        HistoricalEvent::new(
            1971,
            "Economic Liberalisation",
            "Beginning of economic reforms and Indo-Soviet Treaty",
            40.0,
        ),
        HistoricalEvent::new(
            1991,
            "LPG Reforms",
            "Liberalisation, Privatisation, and Globalisation reforms",
            0.0,
        ),
        HistoricalEvent::new(
            2008,
            "Global Financial Crisis",
            "Worldwide economic downturn following US subprime crisis",
            40.0,
        ),
        HistoricalEvent::new(
            2016,
            "Demonetisation & GST",
            "Currency demonetisation and Goods & Services Tax introduction",
            0.0,
        ),
        HistoricalEvent::new(
            2020,
            "COVID-19",
            "Global pandemic causing economic disruption",
            40.0,
        ),
    ]
}
