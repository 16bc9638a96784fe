use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Prediction backend returned HTTP {status}: {body}")]
    Server { status: u16, body: String },
    #[error("Unexpected response body: {0}")]
    Parse(String),
    #[error("Client configuration error: {0}")]
    Config(String),
}
