use log::{info, warn};
use std::sync::Arc;

use crate::db::employee_repository::EmployeeStore;
use crate::dto::employee::EmployeeDto;
use crate::errors::AppError;
use crate::mapper;
use crate::models::employee::{Employee, EmployeeFilter};
use crate::models::page::{Page, PageRequest};

/// Business rules for employee records. Update and delete require the record to exist.
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        EmployeeService { store }
    }

    pub async fn create(&self, mut dto: EmployeeDto) -> Result<EmployeeDto, AppError> {
        dto.id = None;
        let created = self.store.insert(&mapper::to_entity(dto)).await?;
        info!("Employee created: id={}", created.id.as_deref().unwrap_or_default());
        Ok(mapper::to_dto(created))
    }

    pub async fn update(&self, id: &str, mut dto: EmployeeDto) -> Result<EmployeeDto, AppError> {
        self.verify_exists(id).await?;
        dto.id = Some(id.to_string());
        let saved = self.store.save(&mapper::to_entity(dto)).await?;
        info!("Employee updated: id={}", id);
        Ok(mapper::to_dto(saved))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<EmployeeDto, AppError> {
        let employee = self.verify_exists(id).await?;
        Ok(mapper::to_dto(employee))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let employee = self.verify_exists(id).await?;
        self.store.delete(&employee).await?;
        info!("Employee deleted: id={}", id);
        Ok(())
    }

    pub async fn find_all(&self, request: &PageRequest) -> Result<Page<EmployeeDto>, AppError> {
        info!("Employee find all: {}", request);
        self.find_page(None, request).await
    }

    pub async fn find_by_department(
        &self,
        department_id: i64,
        request: &PageRequest,
    ) -> Result<Page<EmployeeDto>, AppError> {
        info!("Employee find by department: id={} {}", department_id, request);
        self.find_page(Some(EmployeeFilter::Department(department_id)), request)
            .await
    }

    pub async fn find_by_organization(
        &self,
        organization_id: i64,
        request: &PageRequest,
    ) -> Result<Page<EmployeeDto>, AppError> {
        info!("Employee find by organization: id={} {}", organization_id, request);
        self.find_page(Some(EmployeeFilter::Organization(organization_id)), request)
            .await
    }

    async fn find_page(
        &self,
        filter: Option<EmployeeFilter>,
        request: &PageRequest,
    ) -> Result<Page<EmployeeDto>, AppError> {
        let page = self.store.find_page(filter, request).await?;
        Ok(page.map(mapper::to_dto))
    }

    async fn verify_exists(&self, id: &str) -> Result<Employee, AppError> {
        self.store.find_by_id(id).await?.ok_or_else(|| {
            warn!("Employee not found: id={}", id);
            AppError::employee_not_found(id)
        })
    }
}
