use paisa_core::{HistoricalEvent, InflationPoint, YearRange};
use serde_json::json;

#[test]
fn inflation_point_round_trips() {
    let point = InflationPoint {
        year: 1991,
        cpi: 55.3,
        purchasing_power: 18.08,
        inflation_rate: 13.87,
    };

    let value = serde_json::to_value(point).unwrap();
    assert_eq!(
        value,
        json!({
            "year": 1991,
            "cpi": 55.3,
            "purchasing_power": 18.08,
            "inflation_rate": 13.87
        })
    );
    let back: InflationPoint = serde_json::from_value(value).unwrap();
    assert_eq!(back, point);
}

#[test]
fn year_range_round_trips_and_keeps_its_invariant_fields() {
    let range = YearRange::new(1960, 2020).unwrap();
    let value = serde_json::to_value(range).unwrap();
    assert_eq!(value, json!({ "start_year": 1960, "end_year": 2020 }));

    let back: YearRange = serde_json::from_value(value).unwrap();
    assert_eq!(back, range);
}

#[test]
fn historical_event_round_trips() {
    let event = HistoricalEvent::new(1991, "LPG Reforms", "Liberalisation reforms", 40.0);
    let back: HistoricalEvent =
        serde_json::from_value(serde_json::to_value(&event).unwrap()).unwrap();
    assert_eq!(back, event);
}
