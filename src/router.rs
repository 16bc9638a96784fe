use crate::controller::Controller;
use crate::domain::{FormInput, PredictorState};
use crate::errors::ServerError;
use crate::responses::{asset_response, html_response, text_response, ResultResp};
use crate::templates;
use astra::Request;
use std::io::Read;

const MAIN_CSS: &str = include_str!("../static/main.css");

// The form has seven short fields.
const MAX_FORM_BYTES: u64 = 16 * 1024;

pub fn handle(req: Request, controller: &Controller) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::pages::home_page(
            &controller.reference,
            &PredictorState::default(),
        )),
        ("POST", "/predict") => predict(req, controller),
        ("GET", "/static/main.css") => asset_response(MAIN_CSS, &mime::TEXT_CSS_UTF_8),
        ("GET", "/health") => text_response("ok"),
        _ => Err(ServerError::NotFound),
    }
}

fn predict(mut req: Request, controller: &Controller) -> ResultResp {
    let is_htmx = req.headers().contains_key("HX-Request");
    let form = read_form(&mut req)?;

    let state = controller.submit(form);

    if is_htmx {
        html_response(templates::result_panel(&state))
    } else {
        html_response(templates::pages::home_page(&controller.reference, &state))
    }
}

/// Decode an `application/x-www-form-urlencoded` body into the form record.
fn read_form(req: &mut Request) -> Result<FormInput, ServerError> {
    if let Some(content_type) = req.headers().get("Content-Type") {
        let content_type = content_type.to_str().unwrap_or_default();
        let essence = content_type.split(';').next().unwrap_or_default().trim();
        if !essence.eq_ignore_ascii_case(mime::APPLICATION_WWW_FORM_URLENCODED.essence_str()) {
            return Err(ServerError::BadRequest(format!(
                "Unsupported content type: {content_type}"
            )));
        }
    }

    let mut bytes = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| ServerError::BadRequest(format!("Failed to read form body: {e}")))?;

    if bytes.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("Form body too large".into()));
    }

    Ok(FormInput::from_pairs(url::form_urlencoded::parse(&bytes)))
}
