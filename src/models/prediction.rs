use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::models::flight_query::FlightQuery;
use crate::utils::format;

/// Wire payload for `POST /predict`. Field names match the prediction
/// service contract; `Date_of_Journey` is normalized to `DD/MM/YYYY`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionPayload {
    #[serde(rename = "Airline")]
    pub airline: String,
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Destination")]
    pub destination: String,
    #[serde(rename = "Route")]
    pub route: String,
    #[serde(rename = "Date_of_Journey")]
    pub date_of_journey: String,
    #[serde(rename = "Dep_Time")]
    pub dep_time: String,
    #[serde(rename = "Arrival_Time")]
    pub arrival_time: String,
    #[serde(rename = "Duration")]
    pub duration: String,
    #[serde(rename = "Total_Stops")]
    pub total_stops: String,
    #[serde(rename = "Additional_Info")]
    pub additional_info: String,
}

impl PredictionPayload {
    /// Build the wire payload from a validated query. Every field is
    /// copied verbatim; only the journey date is rewritten.
    pub fn from_query(query: &FlightQuery) -> Self {
        PredictionPayload {
            airline: query.airline.clone(),
            source: query.source.clone(),
            destination: query.destination.clone(),
            route: query.route.clone(),
            date_of_journey: format::journey_date_to_wire(&query.date_of_journey),
            dep_time: query.dep_time.clone(),
            arrival_time: query.arrival_time.clone(),
            duration: query.duration.clone(),
            total_stops: query.total_stops.clone(),
            additional_info: query.additional_info.clone(),
        }
    }

    // Labeled field echo for the result summary, in display order
    pub fn summary(&self) -> IndexMap<&'static str, &str> {
        let mut items = IndexMap::new();
        items.insert("Airline", self.airline.as_str());
        items.insert("Route", self.route.as_str());
        items.insert("Journey Date", self.date_of_journey.as_str());
        items.insert("Departure Time", self.dep_time.as_str());
        items.insert("Arrival Time", self.arrival_time.as_str());
        items.insert("Duration", self.duration.as_str());
        items.insert("Total Stops", self.total_stops.as_str());
        items.insert("Additional Info", self.additional_info.as_str());
        items
    }
}

/// A predicted price together with the payload it was predicted for.
/// Exists only to be rendered; a new submission discards it.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub price: f64,
    pub payload: PredictionPayload,
}

/// Per-submission state machine. Rendering is a pure function of this
/// state; a new submission starts over from `Validating`.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting,
    Success(PredictionResult),
    Failure(String),
}

/// Outcome of probing the API base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ApiStatus {
    Connected,
    Unavailable,
}
