use crate::controller::Controller;
use crate::domain::state::FAILURE_MESSAGE;
use crate::domain::ReferenceData;
use crate::errors::ServerError;
use crate::predictor::PredictionClient;
use crate::router::handle;
use crate::tests::utils::{
    example_response, read_body, spawn_backend, test_controller, StubPredictor, EXAMPLE_FORM,
};
use astra::{Body, ResponseBuilder};
use http::{Method, Request};
use std::time::Duration;

fn post_form(body: &str, htmx: bool) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/predict")
        .header("Content-Type", "application/x-www-form-urlencoded");
    if htmx {
        builder = builder.header("HX-Request", "true");
    }
    builder.body(Body::from(body.as_bytes().to_vec())).unwrap()
}

#[test]
fn htmx_submission_returns_result_partial() {
    let stub = StubPredictor::succeeding(example_response());
    let controller = test_controller(stub.clone());

    let resp = handle(post_form(EXAMPLE_FORM, true), &controller).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("2,500,000"));
    assert!(body.contains("Apartment"));
    assert!(body.contains("Maadi, Cairo"));
    assert!(body.contains("118 sqm"));
    assert!(body.contains("🛏️ 3 | 🛁 2"));
    assert!(body.contains("2,400,000"));

    // Partial only, so htmx can swap it into #prediction-result
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<form"));

    assert_eq!(stub.call_count(), 1);
    let calls = stub.calls.lock().unwrap();
    assert_eq!(calls[0].area, 120);
    assert_eq!(calls[0].rooms, 3);
    assert_eq!(calls[0].baths, 2);
    assert_eq!(calls[0].region, "Cairo");
    assert_eq!(calls[0].locality, "Maadi");
    assert_eq!(calls[0].property_type, "Apartment");
    assert_eq!(calls[0].is_new, 1);
}

#[test]
fn plain_submission_renders_full_page_with_values_kept() {
    let stub = StubPredictor::succeeding(example_response());
    let controller = test_controller(stub.clone());

    let body = read_body(handle(post_form(EXAMPLE_FORM, false), &controller).unwrap());

    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains(r#"value="120""#));
    assert!(body.contains(r#"<option value="Maadi" selected>"#));
    assert!(body.contains("2,500,000"));
    // Submission finished, so the button is enabled again
    assert!(!body.contains(r#"class="primary" disabled"#));
}

#[test]
fn missing_selection_shows_validation_notice_without_calling_backend() {
    let stub = StubPredictor::succeeding(example_response());
    let controller = test_controller(stub.clone());

    let form = "area=120&rooms=3&baths=2&region=&locality=Maadi&type=Apartment";
    let body = read_body(handle(post_form(form, true), &controller).unwrap());

    assert!(body.contains(r#"role="alert""#));
    assert!(body.contains("Please fill in: Region, Is it new?."));
    assert_eq!(stub.call_count(), 0);
}

#[test]
fn backend_failure_shows_failure_notice() {
    let stub = StubPredictor::failing();
    let controller = test_controller(stub.clone());

    let resp = handle(post_form(EXAMPLE_FORM, true), &controller).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains(FAILURE_MESSAGE));
    assert!(!body.contains("Predicted Price:"));
    assert_eq!(stub.call_count(), 1);
}

#[test]
fn json_body_is_rejected() {
    let stub = StubPredictor::succeeding(example_response());
    let controller = test_controller(stub.clone());

    let req = Request::builder()
        .method(Method::POST)
        .uri("/predict")
        .header("Content-Type", "application/json")
        .body(Body::from(r#"{"area": 120}"#.as_bytes().to_vec()))
        .unwrap();

    let result = handle(req, &controller);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
    assert_eq!(stub.call_count(), 0);
}

#[test]
fn submission_round_trips_through_a_real_backend() {
    let base_url = spawn_backend(|_req| {
        ResponseBuilder::new()
            .status(200)
            .header("Content-Type", "application/json")
            .body(Body::from(
                r#"{"predicted_price": 1234567.5, "similar_listings": null}"#,
            ))
            .unwrap()
    });
    let client = PredictionClient::new(&base_url, Duration::from_secs(5)).unwrap();
    let controller = Controller::new(ReferenceData::bundled().unwrap(), Box::new(client));

    let body = read_body(handle(post_form(EXAMPLE_FORM, true), &controller).unwrap());

    assert!(body.contains("1,234,567.5"));
    assert!(!body.contains("Similar Listings"));
}
