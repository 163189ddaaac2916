use crate::config::config::Config;
use crate::repository::cache::Cache;
use crate::repository::database::Database;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder, Result};
use serde::Serialize;

mod config;
mod controller;
mod models;
mod repository;
mod service;
mod util;

#[derive(Serialize)]
pub struct Response {
    status: String,
    message: String,
}

#[get("/health")]
async fn health_check() -> impl Responder {
    let response = Response {
        status: "Success".to_string(),
        message: "Everything is working as expected".to_string(),
    };
    HttpResponse::Ok().json(response)
}

async fn not_found() -> Result<HttpResponse> {
    Ok(HttpResponse::NotFound().json(models::response::ErrorResponse {
        error: "Resource not found".to_string(),
    }))
}

pub struct AppState {
    db: Database,
    cache: Cache,
    config: Config,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    log4rs::init_file("./log-config.yml", Default::default()).expect("Log config file not found.");
    let config = Config::init();
    let bind_addr = (config.bind_host.clone(), config.bind_port);
    let db = Database::new(&config);
    let cache = Cache::new();
    let app_data = web::Data::new(AppState { db, cache, config });

    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10)
        .burst_size(20)
        .finish()
        .unwrap();

    HttpServer::new(move || {
        App::new()
            .app_data(app_data.clone())
            .configure(controller::handler::config)
            .service(health_check)
            .default_service(web::route().to(not_found))
            .wrap(actix_web::middleware::Logger::default())
            .wrap(Governor::new(&governor_conf))
    })
    .bind(bind_addr)?
    .run()
    .await
}
