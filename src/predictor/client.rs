// client.rs
use crate::predictor::{PredictError, PredictionRequest, PredictionResponse};
use reqwest::blocking::Client;
use std::sync::Arc;
use std::time::{Duration, Instant};

const USER_AGENT: &str = concat!("price_predictor/", env!("CARGO_PKG_VERSION"));

// Error bodies are logged, so keep them short.
const MAX_ERROR_BODY: usize = 512;

/// Anything that can turn a request into a price prediction.
pub trait Predictor {
    fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, PredictError>;
}

impl<P: Predictor + ?Sized> Predictor for Arc<P> {
    fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, PredictError> {
        (**self).predict(request)
    }
}

pub struct PredictionClient {
    client: Client,
    base_url: String,
}

impl PredictionClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PredictError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| PredictError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/predict", self.base_url)
    }
}

impl Predictor for PredictionClient {
    fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, PredictError> {
        let url = self.endpoint();
        let start = Instant::now();
        log::debug!("POST {url} {request:?}");

        let resp = self
            .client
            .post(&url)
            .json(request)
            .send()
            .map_err(|e| {
                log::warn!("Prediction request to {url} failed: {e}");
                PredictError::Network(e.to_string())
            })?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| PredictError::Network(e.to_string()))?;

        if !status.is_success() {
            let body = truncate(&text, MAX_ERROR_BODY);
            log::warn!("Prediction backend returned {status} in {:?}: {body}", start.elapsed());
            return Err(PredictError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: PredictionResponse = serde_json::from_str(&text).map_err(|e| {
            log::warn!("Prediction backend sent an unexpected body: {e}");
            PredictError::Parse(e.to_string())
        })?;

        log::info!(
            "Prediction received in {:?}: {} ({} similar listings)",
            start.elapsed(),
            parsed.predicted_price,
            parsed.similar_listings.len()
        );

        Ok(parsed)
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}
