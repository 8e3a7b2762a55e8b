use actix_web::{get, web, HttpResponse, Responder};
use log::{info, warn};

use crate::error::ProcessingError;
use crate::inference::Neuron;
use crate::models::{ApiResponse, NeuronQuery, NeuronResponse};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(py_data)
        .service(health_check)
        .service(model_info)
        .default_service(web::route().to(not_found));
}

fn process(neuron: &Neuron, query: &NeuronQuery) -> Result<f64, ProcessingError> {
    let x = query.parse_input()?;
    let output = neuron.compute(x);
    if output.is_nan() {
        return Err(ProcessingError::Unexpected(format!(
            "neuron output for input {} is not a number",
            x
        )));
    }
    Ok(output)
}

/// Always answers 200; failures are reported in the `error` field.
#[get("/py-data")]
pub async fn py_data(
    neuron: web::Data<Neuron>,
    query: web::Query<NeuronQuery>,
) -> impl Responder {
    let query = query.into_inner();
    let result = process(&neuron, &query);

    match &result {
        Ok(output) => info!("input={:?} processed_output={}", query.input, output),
        Err(e) => warn!("input={:?} rejected: {}", query.input, e),
    }

    HttpResponse::Ok().json(NeuronResponse::new(query.input, result))
}

#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::success("Neuron API is up"))
}

#[get("/model-info")]
pub async fn model_info(neuron: web::Data<Neuron>) -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::success(neuron.info()))
}

async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(ApiResponse::<String>::error("Endpoint not found"))
}
