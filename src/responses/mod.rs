pub mod asset;
pub mod html;

pub use crate::errors::ResultResp;

pub use asset::{asset_response, text_response};
pub use html::html_response;
