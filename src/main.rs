use crate::config::Config;
use crate::controller::Controller;
use crate::domain::ReferenceData;
use crate::predictor::PredictionClient;
use crate::router::handle;
use astra::Server;

mod config;
mod controller;
mod domain;
mod errors;
mod predictor;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Load configuration and start logging
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };
    config.init_logging();

    // 2️⃣ Load reference data and build the prediction client
    let reference = match ReferenceData::load(config.reference_data_dir.as_deref()) {
        Ok(reference) => reference,
        Err(e) => {
            log::error!("Reference data failed to load: {e}");
            std::process::exit(1);
        }
    };

    let client = match PredictionClient::new(&config.prediction_api_url, config.prediction_timeout) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Prediction client failed to initialize: {e}");
            std::process::exit(1);
        }
    };
    log::info!("Forwarding predictions to {}", client.endpoint());

    let controller = Controller::new(reference, Box::new(client));

    // 3️⃣ Start the server
    let addr = config.bind_addr;
    log::info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.max_workers);

    // 4️⃣ Serve requests, passing the controller into the closure
    let result = server.serve(move |req, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_owned();

        match handle(req, &controller) {
            Ok(resp) => {
                log::debug!("{method} {path} -> {}", resp.status());
                resp
            }
            Err(err) => {
                log::warn!("{method} {path} failed: {err}");
                templates::html_error_response(err)
            }
        }
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
    }

    log::info!("Server shut down cleanly.");
}
