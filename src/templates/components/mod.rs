pub mod error;
pub mod listing_card;
pub mod prediction;
pub mod predictor_form;

pub use error::html_error_response;
pub use listing_card::listing_card;
pub use prediction::{notice_box, prediction_result, result_panel};
pub use predictor_form::predictor_form;
