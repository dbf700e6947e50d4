//! Wire types for the World Bank response envelope.
//!
//! A successful response is a two-element JSON array `[pagination,
//! records]`, where `records` may be `null`. Error responses carry a
//! single-element array with a message object instead, which fails the
//! positional decode and surfaces as an envelope error.

use serde::{Deserialize, Deserializer};

use paisa_core::{PaisaError, RawObservation};

#[derive(Debug, Deserialize)]
pub(crate) struct Pagination {
    pub pages: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireRecord {
    pub date: String,
    pub value: Option<f64>,
}

impl WireRecord {
    pub(crate) fn to_observation(&self) -> Result<RawObservation, PaisaError> {
        let year = self.date.trim().parse::<i32>().map_err(|_| {
            PaisaError::envelope(format!("unparsable observation year '{}'", self.date))
        })?;
        Ok(RawObservation {
            year,
            value: self.value,
        })
    }
}

#[derive(Debug)]
pub(crate) struct ObservationsPage {
    pub pagination: Pagination,
    pub records: Vec<WireRecord>,
}

impl<'de> Deserialize<'de> for ObservationsPage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (pagination, records) =
            <(Pagination, Option<Vec<WireRecord>>)>::deserialize(deserializer)?;
        Ok(Self {
            pagination,
            records: records.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_the_two_element_envelope() {
        let body = serde_json::json!([
            { "page": 1, "pages": 3, "per_page": "100", "total": 260 },
            [
                { "date": "1960", "value": 100.0, "unit": "", "obs_status": "", "decimal": 0 },
                { "date": "1961", "value": null }
            ]
        ]);

        let page: ObservationsPage = serde_json::from_value(body).unwrap();
        assert_eq!(page.pagination.pages, 3);
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.records[1].value, None);
    }

    #[test]
    fn null_record_array_decodes_as_empty() {
        let body = serde_json::json!([{ "page": 1, "pages": 1, "total": 0 }, null]);
        let page: ObservationsPage = serde_json::from_value(body).unwrap();
        assert!(page.records.is_empty());
    }

    #[test]
    fn error_envelope_fails_the_positional_decode() {
        let body = serde_json::json!([
            { "message": [{ "id": "120", "key": "Invalid value", "value": "indicator" }] }
        ]);
        assert!(serde_json::from_value::<ObservationsPage>(body).is_err());
    }

    #[test]
    fn unparsable_year_is_an_envelope_error() {
        let record = WireRecord {
            date: "not-a-year".into(),
            value: Some(1.0),
        };
        assert!(matches!(
            record.to_observation(),
            Err(PaisaError::Envelope(_))
        ));
    }
}
