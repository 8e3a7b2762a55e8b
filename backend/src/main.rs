pub mod config;
pub mod error;
pub mod inference;
pub mod models;
pub mod routes;

use actix_cors::Cors;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use log::info;

use config::ServerConfig;
use inference::Neuron;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .format_module_path(false)
        .init();

    let config = ServerConfig::from_env();
    let neuron = Neuron::default();
    let bind_address = config.bind_address();

    info!("Starting neuron API");
    info!("Neuron: weight={} bias={}", neuron.weight, neuron.bias);
    info!("Listening on http://{}", bind_address);
    info!("Workers: {}", config.workers);
    info!("Endpoints:");
    info!("   GET  /py-data?input=<number>  - single-neuron sigmoid");
    info!("   GET  /model-info              - neuron parameters");
    info!("   GET  /health                  - liveness");

    let neuron_data = web::Data::new(neuron);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET"])
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("X-Content-Type-Options", "nosniff")))
            .wrap(cors)
            .app_data(neuron_data.clone())
            .configure(routes::configure)
    })
    .workers(config.workers)
    .bind(&bind_address)
    .with_context(|| format!("failed to bind {}", bind_address))?
    .run()
    .await
    .context("server terminated with an error")?;

    Ok(())
}
