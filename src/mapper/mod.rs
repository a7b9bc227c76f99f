//! Field-for-field conversion between the wire and persisted employee shapes.

use crate::dto::employee::EmployeeDto;
use crate::models::employee::Employee;

pub fn to_entity(source: EmployeeDto) -> Employee {
    Employee {
        id: source.id,
        organization_id: source.organization_id,
        department_id: source.department_id,
        name: source.name,
        birthdate: source.birthdate,
        position: source.position,
    }
}

pub fn to_dto(source: Employee) -> EmployeeDto {
    EmployeeDto {
        id: source.id,
        organization_id: source.organization_id,
        department_id: source.department_id,
        name: source.name,
        birthdate: source.birthdate,
        position: source.position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn conversion_is_lossless_both_ways() {
        let dto = EmployeeDto {
            id: Some("e-1".to_string()),
            organization_id: 7,
            department_id: 3,
            name: "Alice".to_string(),
            birthdate: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            position: "Engineer".to_string(),
        };
        let entity = to_entity(dto.clone());
        assert_eq!(entity.id.as_deref(), Some("e-1"));
        assert_eq!(entity.organization_id, 7);
        assert_eq!(entity.department_id, 3);
        assert_eq!(to_dto(entity), dto);
    }

    #[test]
    fn missing_id_stays_missing() {
        let entity = Employee {
            id: None,
            organization_id: 1,
            department_id: 1,
            name: "Bob".to_string(),
            birthdate: NaiveDate::from_ymd_opt(1985, 6, 30).unwrap(),
            position: String::new(),
        };
        assert_eq!(to_entity(to_dto(entity.clone())), entity);
    }
}
