use actix_web::{web, HttpResponse};
use log::info;

use crate::config::PageSettings;
use crate::dto::employee::EmployeeRequest;
use crate::services::employee::EmployeeService;
use crate::utils::pagination::PageParams;

pub async fn create_employee(
    service: web::Data<EmployeeService>,
    new_employee: web::Json<EmployeeRequest>,
) -> Result<HttpResponse, actix_web::Error> {
    let new_employee = new_employee.into_inner();
    info!("Employee create: {:?}", new_employee);
    let new_employee = new_employee.into_dto()?;

    let created = service.create(new_employee).await?;
    Ok(HttpResponse::Ok().json(created))
}

pub async fn update_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<String>,
    updates: web::Json<EmployeeRequest>,
) -> Result<HttpResponse, actix_web::Error> {
    let id = id.into_inner();
    let updates = updates.into_inner();
    info!("Employee update: id={} value={:?}", id, updates);
    let updates = updates.into_dto()?;

    let updated = service.update(&id, updates).await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn get_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let id = id.into_inner();
    info!("Employee find: id={}", id);

    let employee = service.find_by_id(&id).await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn delete_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let id = id.into_inner();
    info!("Employee delete: id={}", id);

    service.delete(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub async fn get_employees(
    service: web::Data<EmployeeService>,
    paging: web::Data<PageSettings>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, actix_web::Error> {
    let request = PageParams::from_pairs(query.into_inner())?.into_request(&paging)?;

    let page = service.find_all(&request).await?;
    Ok(HttpResponse::Ok().json(page))
}

pub async fn get_employees_by_department(
    service: web::Data<EmployeeService>,
    paging: web::Data<PageSettings>,
    department_id: web::Path<i64>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, actix_web::Error> {
    let request = PageParams::from_pairs(query.into_inner())?.into_request(&paging)?;

    let page = service
        .find_by_department(department_id.into_inner(), &request)
        .await?;
    Ok(HttpResponse::Ok().json(page))
}

pub async fn get_employees_by_organization(
    service: web::Data<EmployeeService>,
    paging: web::Data<PageSettings>,
    organization_id: web::Path<i64>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, actix_web::Error> {
    let request = PageParams::from_pairs(query.into_inner())?.into_request(&paging)?;

    let page = service
        .find_by_organization(organization_id.into_inner(), &request)
        .await?;
    Ok(HttpResponse::Ok().json(page))
}
