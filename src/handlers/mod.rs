pub mod employee;

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::errors::AppError;

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "UP" }))
}

/// Route table for the service. Expects `web::Data<EmployeeService>` and
/// `web::Data<PageSettings>` to be registered by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::PathConfig::default().error_handler(path_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .route("/health", web::get().to(health))
        .service(
            web::scope("/api/v1/employees")
                .service(
                    web::resource("")
                        .route(web::post().to(employee::create_employee))
                        .route(web::get().to(employee::get_employees)),
                )
                .service(
                    web::resource("/department/{department_id}")
                        .route(web::get().to(employee::get_employees_by_department)),
                )
                .service(
                    web::resource("/organization/{organization_id}")
                        .route(web::get().to(employee::get_employees_by_organization)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(employee::get_employee))
                        .route(web::put().to(employee::update_employee))
                        .route(web::delete().to(employee::delete_employee)),
                ),
        );
}
