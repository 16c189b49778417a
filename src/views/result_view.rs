use crate::models::prediction::{PredictionResult, SubmissionState};
use crate::utils::format;

pub const PRICE_LABEL: &str = "Predicted Flight Price: ";

pub const FALLBACK_ERROR: &str =
    "There was an error processing your request. Please try again.";

/// Render a submission state for the terminal. Pure; the caller decides
/// when and where to print.
pub fn render(state: &SubmissionState) -> String {
    match state {
        SubmissionState::Idle => String::new(),
        SubmissionState::Validating => "Validating flight details...".to_string(),
        SubmissionState::Submitting => "Requesting price prediction...".to_string(),
        SubmissionState::Success(result) => render_success(result),
        SubmissionState::Failure(message) => render_failure(message),
    }
}

pub fn render_success(result: &PredictionResult) -> String {
    format!(
        "{}{}\n\n{}",
        PRICE_LABEL,
        format::group_price(result.price),
        summary_block(&result.payload.summary())
    )
}

/// The error text, or the generic fallback when there is none.
pub fn render_failure(message: &str) -> String {
    let message = if message.trim().is_empty() {
        FALLBACK_ERROR
    } else {
        message
    };
    format!("Prediction failed: {}", message)
}

// Labeled field echo, aligned on the widest label
pub fn summary_block(items: &indexmap::IndexMap<&'static str, &str>) -> String {
    let width = items.keys().map(|label| label.len()).max().unwrap_or(0);
    items
        .iter()
        .map(|(label, value)| format!("  {:<width$}  {}", label, value, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::flight_query::FlightQuery;
    use crate::models::prediction::PredictionPayload;

    fn sample_result() -> PredictionResult {
        PredictionResult {
            price: 4500.0,
            payload: PredictionPayload::from_query(&FlightQuery::sample()),
        }
    }

    #[test]
    fn success_view_leads_with_grouped_price() {
        let view = render_success(&sample_result());
        assert!(view.starts_with("Predicted Flight Price: 4,500\n"));
    }

    #[test]
    fn success_view_echoes_fields_in_fixed_order() {
        let view = render_success(&sample_result());
        let labels = [
            "Airline",
            "Route",
            "Journey Date",
            "Departure Time",
            "Arrival Time",
            "Duration",
            "Total Stops",
            "Additional Info",
        ];
        let positions: Vec<usize> = labels
            .iter()
            .map(|label| view.find(label).expect("label missing from summary"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(view.contains("24/03/2019"));
    }

    #[test]
    fn failure_view_falls_back_when_message_is_empty() {
        assert_eq!(
            render_failure(""),
            format!("Prediction failed: {}", FALLBACK_ERROR)
        );
        assert_eq!(
            render_failure("model unavailable"),
            "Prediction failed: model unavailable"
        );
    }

    #[test]
    fn idle_renders_nothing() {
        assert_eq!(render(&SubmissionState::Idle), "");
    }
}
