use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Persisted shape of an employee record. `id` is `None` until the store assigns one.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: Option<String>,
    pub organization_id: i64,
    pub department_id: i64,
    pub name: String,
    pub birthdate: NaiveDate,
    pub position: String,
}

/// Secondary key a listing can be narrowed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeFilter {
    Department(i64),
    Organization(i64),
}

impl EmployeeFilter {
    pub fn column(&self) -> &'static str {
        match self {
            EmployeeFilter::Department(_) => "department_id",
            EmployeeFilter::Organization(_) => "organization_id",
        }
    }

    pub fn value(&self) -> i64 {
        match self {
            EmployeeFilter::Department(id) | EmployeeFilter::Organization(id) => *id,
        }
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        match self {
            EmployeeFilter::Department(id) => employee.department_id == *id,
            EmployeeFilter::Organization(id) => employee.organization_id == *id,
        }
    }
}
