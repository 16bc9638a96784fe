mod client;
mod models;
mod predictor_error;

pub use client::{PredictionClient, Predictor};
pub use models::{Listing, PredictionRequest, PredictionResponse};
pub use predictor_error::PredictError;
