use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use tracing::{info, warn};

use crate::config::ApiConfig;
use crate::models::prediction::{ApiStatus, PredictionPayload};
use crate::utils::error::{AppError, AppResult};

pub const INVALID_RESPONSE_FORMAT: &str = "Invalid response format from API";

/// Seam between the submission flow and the remote service, so the flow
/// can be driven without a network in tests.
#[async_trait]
pub trait PricePredictor {
    async fn predict(&self, payload: &PredictionPayload) -> AppResult<f64>;
}

pub struct PredictionService {
    http: Client,
    config: ApiConfig,
}

impl PredictionService {
    pub fn new(config: ApiConfig) -> Self {
        PredictionService {
            http: Client::new(),
            config,
        }
    }

    // Probe the API root; any success status means the service is up
    pub async fn check_status(&self) -> ApiStatus {
        match self.http.get(self.config.status_url()).send().await {
            Ok(resp) if resp.status().is_success() => ApiStatus::Connected,
            Ok(resp) => {
                warn!(status = %resp.status(), "API status probe returned non-success");
                ApiStatus::Unavailable
            }
            Err(err) => {
                warn!(error = %err, "API status probe failed");
                ApiStatus::Unavailable
            }
        }
    }
}

#[async_trait]
impl PricePredictor for PredictionService {
    // One POST per submission; no retries, platform-default timeout
    async fn predict(&self, payload: &PredictionPayload) -> AppResult<f64> {
        let url = self.config.predict_url();
        info!(%url, route = %payload.route, "requesting price prediction");

        let resp = self.http.post(&url).json(payload).send().await?;
        read_price(resp).await
    }
}

/// Map a `/predict` response to a price.
///
/// On a success status the body must be JSON carrying `predicted_price`
/// or, failing that, `price`; a body with neither is a format error even
/// though the request succeeded. On a non-success status the message is
/// taken from the body's `error` field, then the HTTP canonical reason,
/// then a generic code-only message.
pub async fn read_price(resp: Response) -> AppResult<f64> {
    let status = resp.status();
    if !status.is_success() {
        return Err(error_from_response(status, resp).await);
    }

    let body: Value = resp
        .json()
        .await
        .map_err(|_| AppError::Format(INVALID_RESPONSE_FORMAT.to_string()))?;

    price_from_body(&body).ok_or_else(|| AppError::Format(INVALID_RESPONSE_FORMAT.to_string()))
}

// `predicted_price` takes precedence over `price` when both are present
fn price_from_body(body: &Value) -> Option<f64> {
    body.get("predicted_price")
        .or_else(|| body.get("price"))
        .and_then(Value::as_f64)
}

async fn error_from_response(status: StatusCode, resp: Response) -> AppError {
    let from_body = match resp.json::<Value>().await {
        Ok(body) => body
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_string),
        Err(_) => None,
    };

    let message = from_body
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| format!("API Error: {}", status.as_u16()));

    AppError::Api {
        status: status.as_u16(),
        message,
    }
}
