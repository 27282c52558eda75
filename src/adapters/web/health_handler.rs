use actix_web::{HttpResponse, Responder, get};

use crate::adapters::web::schema::HealthResponse;

#[get("/health")]
pub async fn health() -> impl Responder {
	HttpResponse::Ok().json(HealthResponse::ok())
}
