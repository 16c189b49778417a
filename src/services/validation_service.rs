use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::flight_query::{FlightQuery, FIELDS};
use crate::utils::error::{AppError, AppResult};

static DURATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+h\s\d+m$").unwrap());

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct ValidationService;

impl ValidationService {
    pub fn new() -> Self {
        ValidationService
    }

    /// Check a query before it is submitted. Checks run in form order and
    /// stop at the first failure; the error names the failing field.
    /// `today` is the caller's calendar date, injected so the past-date
    /// check is deterministic under test.
    pub fn validate(&self, query: &FlightQuery, today: NaiveDate) -> AppResult<()> {
        // Every field is required
        for (key, label) in FIELDS {
            if query.field(key).trim().is_empty() {
                return Err(AppError::Validation {
                    field: key,
                    message: format!("Please fill in the \"{}\" field", label),
                });
            }
        }

        // Journey date must not be in the past (calendar-day granularity)
        let journey = NaiveDate::parse_from_str(&query.date_of_journey, DATE_FORMAT)
            .map_err(|_| AppError::Validation {
                field: "Date_of_Journey",
                message: "Date of journey must be in YYYY-MM-DD format".to_string(),
            })?;
        if journey < today {
            return Err(AppError::Validation {
                field: "Date_of_Journey",
                message: "Date of journey cannot be in the past".to_string(),
            });
        }

        if !DURATION_RE.is_match(&query.duration) {
            return Err(AppError::Validation {
                field: "Duration",
                message: r#"Duration must be in format "Xh Ym" (e.g., "2h 50m")"#.to_string(),
            });
        }

        Ok(())
    }
}

impl Default for ValidationService {
    fn default() -> Self {
        Self::new()
    }
}
