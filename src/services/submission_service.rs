use chrono::Local;
use tracing::info;

use crate::models::flight_query::FlightQuery;
use crate::models::prediction::{PredictionPayload, PredictionResult, SubmissionState};
use crate::services::prediction_service::PricePredictor;
use crate::services::validation_service::ValidationService;

/// Drives one submission through the state machine:
/// `Validating → (Failure | Submitting → (Success | Failure))`.
pub struct SubmissionService<P: PricePredictor> {
    validator: ValidationService,
    predictor: P,
}

impl<P: PricePredictor> SubmissionService<P> {
    pub fn new(validator: ValidationService, predictor: P) -> Self {
        SubmissionService {
            validator,
            predictor,
        }
    }

    /// Run one submission from the given query. Every state is reported
    /// through `observe` as it is entered, and the terminal state is
    /// returned. A failed submission is terminal; retrying means calling
    /// `submit` again with the same query.
    pub async fn submit<F>(&self, query: &FlightQuery, mut observe: F) -> SubmissionState
    where
        F: FnMut(&SubmissionState),
    {
        let state = SubmissionState::Validating;
        observe(&state);

        if let Err(err) = self.validator.validate(query, Local::now().date_naive()) {
            info!(field = err.field().unwrap_or(""), "query rejected by validation");
            let state = SubmissionState::Failure(err.to_string());
            observe(&state);
            return state;
        }

        // Validation passed; the payload build cannot fail from here
        let payload = PredictionPayload::from_query(query);

        let state = SubmissionState::Submitting;
        observe(&state);

        let state = match self.predictor.predict(&payload).await {
            Ok(price) => {
                info!(price, "prediction received");
                SubmissionState::Success(PredictionResult { price, payload })
            }
            Err(err) => SubmissionState::Failure(err.to_string()),
        };
        observe(&state);
        state
    }
}
