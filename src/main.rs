use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use std::io;

use employee_service::config::Config;
use employee_service::configure_app;
use employee_service::db;
use employee_service::services::employee::EmployeeService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(|err| {
        error!("Invalid configuration: {}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
    })?;

    let store = db::create_store(&config).await.map_err(|err| {
        error!("Failed to initialize employee store: {}", err);
        io::Error::new(io::ErrorKind::Other, err.to_string())
    })?;
    let service = EmployeeService::new(store);
    let paging = config.paging;

    info!("Starting server at {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::trim())
            .wrap(Logger::default())
            .configure(configure_app(service.clone(), paging))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
