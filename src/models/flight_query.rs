use chrono::{Duration, Local};

/// Required form fields as (payload key, display label), in form order.
pub const FIELDS: [(&str, &str); 10] = [
    ("Airline", "Airline"),
    ("Source", "Source"),
    ("Destination", "Destination"),
    ("Route", "Route"),
    ("Date_of_Journey", "Date of Journey"),
    ("Dep_Time", "Departure Time"),
    ("Arrival_Time", "Arrival Time"),
    ("Duration", "Duration"),
    ("Total_Stops", "Total Stops"),
    ("Additional_Info", "Additional Info"),
];

/// One flight-fare query as entered on the form. All fields are text at
/// this boundary; `date_of_journey` is in `YYYY-MM-DD` form until the
/// payload is built.
#[derive(Debug, Clone)]
pub struct FlightQuery {
    pub airline: String,
    pub source: String,
    pub destination: String,
    pub route: String,
    pub date_of_journey: String,
    pub dep_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub total_stops: String,
    pub additional_info: String,
}

impl FlightQuery {
    // Look up a field value by its payload key
    pub fn field(&self, key: &str) -> &str {
        match key {
            "Airline" => &self.airline,
            "Source" => &self.source,
            "Destination" => &self.destination,
            "Route" => &self.route,
            "Date_of_Journey" => &self.date_of_journey,
            "Dep_Time" => &self.dep_time,
            "Arrival_Time" => &self.arrival_time,
            "Duration" => &self.duration,
            "Total_Stops" => &self.total_stops,
            "Additional_Info" => &self.additional_info,
            _ => "",
        }
    }

    /// The documented sample flight.
    pub fn sample() -> Self {
        FlightQuery {
            airline: "IndiGo".to_string(),
            source: "Banglore".to_string(),
            destination: "New Delhi".to_string(),
            route: "BLR → DEL".to_string(),
            date_of_journey: "2019-03-24".to_string(),
            dep_time: "22:20".to_string(),
            arrival_time: "01:10".to_string(),
            duration: "2h 50m".to_string(),
            total_stops: "non-stop".to_string(),
            additional_info: "No info".to_string(),
        }
    }

    /// An empty query carrying the form's initial defaults: journey date
    /// tomorrow, departure 10:00, arrival 12:30.
    pub fn form_defaults() -> Self {
        FlightQuery {
            airline: String::new(),
            source: String::new(),
            destination: String::new(),
            route: String::new(),
            date_of_journey: default_journey_date(),
            dep_time: "10:00".to_string(),
            arrival_time: "12:30".to_string(),
            duration: String::new(),
            total_stops: String::new(),
            additional_info: "No info".to_string(),
        }
    }
}

// Tomorrow, in the form's YYYY-MM-DD representation
pub fn default_journey_date() -> String {
    (Local::now().date_naive() + Duration::days(1))
        .format("%Y-%m-%d")
        .to_string()
}

// Airport codes for the cities the form offers; anything else falls back
// to the first three letters uppercased
pub fn airport_code(city: &str) -> String {
    match city {
        "Banglore" => "BLR".to_string(),
        "New Delhi" | "Delhi" => "DEL".to_string(),
        "Kolkata" => "CCU".to_string(),
        "Chennai" => "MAA".to_string(),
        "Mumbai" => "BOM".to_string(),
        "Hyderabad" => "HYD".to_string(),
        "Cochin" => "COK".to_string(),
        other => other.chars().take(3).collect::<String>().to_uppercase(),
    }
}

/// Route leg string derived from source and destination.
pub fn derive_route(source: &str, destination: &str) -> String {
    format!("{} → {}", airport_code(source), airport_code(destination))
}
