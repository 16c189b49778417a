pub const DEFAULT_API_BASE_URL: &str = "https://flight-price-api-wiu9.onrender.com";
pub const PREDICT_ENDPOINT: &str = "/predict";

// Prediction API endpoint configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    // Read the base URL from the environment, falling back to the public API
    pub fn from_env() -> Self {
        let base_url = std::env::var("PREDICTION_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        Self::with_base_url(&base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    // The base URL doubles as the status-probe URL
    pub fn status_url(&self) -> &str {
        &self.base_url
    }

    pub fn predict_url(&self) -> String {
        format!("{}{}", self.base_url, PREDICT_ENDPOINT)
    }
}
