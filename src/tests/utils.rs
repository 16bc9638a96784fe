use crate::controller::Controller;
use crate::domain::ReferenceData;
use crate::predictor::{Listing, PredictError, PredictionRequest, PredictionResponse, Predictor};
use astra::{Request, Response, Server};
use std::io::Read;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Records every request and replies with a canned outcome.
pub struct StubPredictor {
    pub calls: Mutex<Vec<PredictionRequest>>,
    response: Option<PredictionResponse>,
}

impl StubPredictor {
    pub fn succeeding(response: PredictionResponse) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            response: Some(response),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            response: None,
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Predictor for StubPredictor {
    fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, PredictError> {
        self.calls.lock().unwrap().push(request.clone());
        self.response
            .clone()
            .ok_or_else(|| PredictError::Network("connection refused".into()))
    }
}

pub fn test_controller(predictor: Arc<StubPredictor>) -> Controller {
    Controller::new(ReferenceData::bundled().unwrap(), Box::new(predictor))
}

/// The response from the example scenario: one comparable apartment in Maadi.
pub fn example_response() -> PredictionResponse {
    PredictionResponse {
        predicted_price: 2_500_000.0,
        similar_listings: vec![Listing {
            property_type: "Apartment".into(),
            region: "Cairo".into(),
            locality: "Maadi".into(),
            area: 118.0,
            rooms: 3.0,
            baths: 2.0,
            price: 2_400_000.0,
            cover_image: None,
            latitude: None,
            longitude: None,
        }],
    }
}

pub const EXAMPLE_FORM: &str =
    "area=120&rooms=3&baths=2&region=Cairo&locality=Maadi&type=Apartment&is_new=1";

pub fn read_body(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}

/// A local port with nothing listening on it.
pub fn free_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

/// Runs `service` as a stand-in prediction backend and returns its base URL.
/// The server thread lives until the test process exits.
pub fn spawn_backend<F>(service: F) -> String
where
    F: Fn(Request) -> Response + Send + Sync + 'static,
{
    let addr = free_addr();

    std::thread::spawn(move || {
        let _ = Server::bind(addr).serve(move |req, _info| service(req));
    });

    for _ in 0..200 {
        if TcpStream::connect(addr).is_ok() {
            return format!("http://{addr}");
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    panic!("stub backend on {addr} never started");
}
