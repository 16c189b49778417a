pub mod flight_query;
pub mod prediction;
