use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::db::employee_repository::EmployeeStore;
use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeFilter};
use crate::models::page::{Page, PageRequest};

/// Process-local store with the same semantics as the Postgres adapter.
#[derive(Default)]
pub struct InMemoryEmployeeStore {
    records: RwLock<HashMap<String, Employee>>,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn insert(&self, employee: &Employee) -> Result<Employee, AppError> {
        let id = Uuid::new_v4().to_string();
        let created = Employee {
            id: Some(id.clone()),
            ..employee.clone()
        };
        self.records.write().await.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, AppError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, AppError> {
        match employee.id.clone() {
            Some(id) => {
                self.records.write().await.insert(id, employee.clone());
                Ok(employee.clone())
            }
            None => self.insert(employee).await,
        }
    }

    async fn delete(&self, employee: &Employee) -> Result<(), AppError> {
        if let Some(id) = employee.id.as_deref() {
            self.records.write().await.remove(id);
        }
        Ok(())
    }

    async fn find_page(
        &self,
        filter: Option<EmployeeFilter>,
        request: &PageRequest,
    ) -> Result<Page<Employee>, AppError> {
        let records = self.records.read().await;
        let mut matching: Vec<&Employee> = records
            .values()
            .filter(|e| filter.map_or(true, |f| f.matches(e)))
            .collect();
        matching.sort_by(|a, b| request.sort.compare(a, b));

        let total = matching.len() as u64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let content = matching
            .into_iter()
            .skip(offset)
            .take(request.size as usize)
            .cloned()
            .collect();

        Ok(Page::new(content, request, total))
    }
}
