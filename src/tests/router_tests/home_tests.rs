use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{example_response, read_body, test_controller, StubPredictor};
use astra::Body;
use http::{Method, Request};

fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn home_page_loads_with_empty_form() {
    let controller = test_controller(StubPredictor::succeeding(example_response()));

    let resp = handle(get("/"), &controller).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Predict My Price"));
    assert!(body.contains("Select Region"));
    assert!(!body.contains("Predicted Price:"));
}

#[test]
fn stylesheet_is_served_as_css() {
    let controller = test_controller(StubPredictor::succeeding(example_response()));

    let resp = handle(get("/static/main.css"), &controller).unwrap();
    assert_eq!(resp.status(), 200);
    let content_type = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(content_type.starts_with("text/css"));
}

#[test]
fn health_check_answers_ok() {
    let controller = test_controller(StubPredictor::succeeding(example_response()));

    let resp = handle(get("/health"), &controller).unwrap();
    assert_eq!(read_body(resp), "ok");
}

#[test]
fn unknown_path_is_not_found() {
    let controller = test_controller(StubPredictor::succeeding(example_response()));

    let result = handle(get("/admin"), &controller);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn get_on_predict_is_not_found() {
    let controller = test_controller(StubPredictor::succeeding(example_response()));

    let result = handle(get("/predict"), &controller);
    assert!(matches!(result, Err(ServerError::NotFound)));
}
