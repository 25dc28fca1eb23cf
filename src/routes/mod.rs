use actix_web::{get, web::ServiceConfig, HttpResponse, Responder};

pub mod coin;
pub mod list;

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().body("Crypto Tracker")
}

pub fn init(config: &mut ServiceConfig) {
    config.service(health);
    list::init(config);
    coin::init(config);
}
