// responses/asset.rs
use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use mime::Mime;

/// Serve a bundled file with the given content type.
pub fn asset_response(content: &'static str, content_type: &Mime) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type.as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(content))
        .map_err(|_| ServerError::InternalError)
}

pub fn text_response(content: &'static str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_PLAIN_UTF_8.as_ref())
        .body(Body::from(content))
        .map_err(|_| ServerError::InternalError)
}
