use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::AppError;
use crate::utils::validation::validate_payload;

/// Wire representation of a stored employee, as returned to clients and passed to the service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub organization_id: i64,
    pub department_id: i64,
    pub name: String,
    pub birthdate: NaiveDate,
    pub position: String,
}

/// Create/update request body. Every field is optional at the JSON layer so that
/// missing and `null` values surface as per-field validation errors.
#[derive(Deserialize, Validate, Debug, Clone, Default)]
pub struct EmployeeRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "organizationId")]
    #[validate(required)]
    pub organization_id: Option<i64>,
    #[serde(rename = "departmentId")]
    #[validate(required)]
    pub department_id: Option<i64>,
    #[validate(required, custom = "validate_not_blank")]
    pub name: Option<String>,
    #[validate(required)]
    pub birthdate: Option<NaiveDate>,
    #[validate(required)]
    pub position: Option<String>,
}

impl EmployeeRequest {
    pub fn into_dto(self) -> Result<EmployeeDto, AppError> {
        validate_payload(&self)?;

        match self {
            EmployeeRequest {
                id,
                organization_id: Some(organization_id),
                department_id: Some(department_id),
                name: Some(name),
                birthdate: Some(birthdate),
                position: Some(position),
            } => Ok(EmployeeDto {
                id,
                organization_id,
                department_id,
                name,
                birthdate,
                position,
            }),
            _ => Err(AppError::BadRequest("Incomplete employee payload".to_string())),
        }
    }
}

fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        let mut err = validator::ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}
