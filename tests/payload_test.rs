use flight_fare_client::models::flight_query::{self, FlightQuery};
use flight_fare_client::models::prediction::PredictionPayload;
use flight_fare_client::utils::format;
use serde_json::Value;

#[test]
fn sample_payload_normalizes_only_the_date() {
    let query = FlightQuery::sample();
    let payload = PredictionPayload::from_query(&query);

    assert_eq!(payload.date_of_journey, "24/03/2019");

    assert_eq!(payload.airline, query.airline);
    assert_eq!(payload.source, query.source);
    assert_eq!(payload.destination, query.destination);
    assert_eq!(payload.route, query.route);
    assert_eq!(payload.dep_time, query.dep_time);
    assert_eq!(payload.arrival_time, query.arrival_time);
    assert_eq!(payload.duration, query.duration);
    assert_eq!(payload.total_stops, query.total_stops);
    assert_eq!(payload.additional_info, query.additional_info);
}

#[test]
fn payload_serializes_under_the_form_field_names() {
    let payload = PredictionPayload::from_query(&FlightQuery::sample());
    let json = serde_json::to_value(&payload).unwrap();

    let object = json.as_object().unwrap();
    for key in [
        "Airline",
        "Source",
        "Destination",
        "Route",
        "Date_of_Journey",
        "Dep_Time",
        "Arrival_Time",
        "Duration",
        "Total_Stops",
        "Additional_Info",
    ] {
        assert!(object.contains_key(key), "missing wire key {}", key);
    }

    assert_eq!(json["Date_of_Journey"], Value::from("24/03/2019"));
    assert_eq!(json["Airline"], Value::from("IndiGo"));
    assert_eq!(json["Total_Stops"], Value::from("non-stop"));
}

#[test]
fn date_transform_is_positional_reordering() {
    assert_eq!(format::journey_date_to_wire("2019-03-24"), "24/03/2019");
    // Not calendar-aware: syntactically valid but impossible dates still reorder
    assert_eq!(format::journey_date_to_wire("2019-13-40"), "40/13/2019");
}

#[test]
fn date_transform_round_trips_through_its_inverse() {
    let original = "2019-03-24";
    let wire = format::journey_date_to_wire(original);

    let parts: Vec<&str> = wire.split('/').collect();
    let recovered = format!("{}-{}-{}", parts[2], parts[1], parts[0]);
    assert_eq!(recovered, original);
}

#[test]
fn route_derivation_uses_known_airport_codes() {
    assert_eq!(
        flight_query::derive_route("Banglore", "New Delhi"),
        "BLR → DEL"
    );
    assert_eq!(flight_query::derive_route("Kolkata", "Cochin"), "CCU → COK");
}

#[test]
fn route_derivation_falls_back_to_city_prefix() {
    assert_eq!(flight_query::airport_code("Goa"), "GOA");
    assert_eq!(flight_query::derive_route("Goa", "Mumbai"), "GOA → BOM");
}

#[test]
fn form_defaults_prefill_times_and_tomorrow() {
    let defaults = FlightQuery::form_defaults();
    assert_eq!(defaults.dep_time, "10:00");
    assert_eq!(defaults.arrival_time, "12:30");
    assert_eq!(defaults.additional_info, "No info");
    assert_eq!(
        defaults.date_of_journey,
        flight_query::default_journey_date()
    );
    assert!(defaults.airline.is_empty());
}
