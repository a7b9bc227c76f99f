pub mod config;
pub mod db;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod mapper;
pub mod models;
pub mod services;
pub mod utils;

use actix_web::web;

use crate::config::PageSettings;
use crate::services::employee::EmployeeService;

/// Registers shared state and routes; used by `main` and by the HTTP tests.
pub fn configure_app(
    service: EmployeeService,
    paging: PageSettings,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(service))
            .app_data(web::Data::new(paging));
        handlers::configure(cfg);
    }
}
