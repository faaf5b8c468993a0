mod config;
mod db;
mod error;
mod models;
mod routes;
mod tests;
mod utils;
use actix_cors::Cors;
use actix_web::{get, middleware::Logger, web::Data, App, HttpResponse, HttpServer, Responder};
use config::Config;
use db::MemStore;
use dotenv::dotenv;
use log::{error, info};
use std::io;
use utils::{rate_table, token_registry::validate_registry};

#[get("/")]
async fn home() -> impl Responder {
    HttpResponse::Ok().body("Conecta Backend Server")
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|err| {
        error!("Invalid configuration: {}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err)
    })?;
    validate_registry().map_err(|err| {
        error!("Invalid token registry: {}", err);
        io::Error::new(io::ErrorKind::InvalidData, err)
    })?;

    let store_data = Data::new(MemStore::init().await);
    let config_data = Data::new(config.clone());
    info!(
        "Listening on {}:{} (networks {:?}, default {})",
        config.host,
        config.port,
        rate_table::networks(),
        config.default_network_id
    );

    HttpServer::new(move || {
        App::new()
            .app_data(store_data.clone())
            .app_data(config_data.clone())
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(home)
            .configure(routes::init)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
