use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeFilter};
use crate::models::page::{Page, PageRequest};

const EMPLOYEE_COLUMNS: &str = "id, organization_id, department_id, name, birthdate, position";

/// Persistence boundary for employee records.
///
/// Absence is reported as `None`, never as an error; errors are reserved
/// for infrastructure failures.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Persists a new record under a freshly assigned id. Any id on `employee` is ignored.
    async fn insert(&self, employee: &Employee) -> Result<Employee, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, AppError>;

    /// Upsert by id; a record without an id is inserted.
    async fn save(&self, employee: &Employee) -> Result<Employee, AppError>;

    async fn delete(&self, employee: &Employee) -> Result<(), AppError>;

    async fn find_page(
        &self,
        filter: Option<EmployeeFilter>,
        request: &PageRequest,
    ) -> Result<Page<Employee>, AppError>;
}

pub struct PostgresEmployeeStore {
    pool: PgPool,
}

impl PostgresEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresEmployeeStore { pool }
    }

    fn push_filter(query: &mut QueryBuilder<'_, Postgres>, filter: Option<EmployeeFilter>) {
        if let Some(filter) = filter {
            query.push(" WHERE ");
            query.push(filter.column());
            query.push(" = ");
            query.push_bind(filter.value());
        }
    }
}

#[async_trait]
impl EmployeeStore for PostgresEmployeeStore {
    async fn insert(&self, employee: &Employee) -> Result<Employee, AppError> {
        let id = Uuid::new_v4().to_string();

        let created = sqlx::query_as::<_, Employee>(&format!(
            "INSERT INTO employees ({EMPLOYEE_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6) RETURNING {EMPLOYEE_COLUMNS}"
        ))
        .bind(&id)
        .bind(employee.organization_id)
        .bind(employee.department_id)
        .bind(&employee.name)
        .bind(employee.birthdate)
        .bind(&employee.position)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, AppError> {
        let employee = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, AppError> {
        let Some(id) = employee.id.as_deref() else {
            return self.insert(employee).await;
        };

        let saved = sqlx::query_as::<_, Employee>(&format!(
            r#"
            INSERT INTO employees ({EMPLOYEE_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                organization_id = EXCLUDED.organization_id,
                department_id = EXCLUDED.department_id,
                name = EXCLUDED.name,
                birthdate = EXCLUDED.birthdate,
                position = EXCLUDED.position
            RETURNING {EMPLOYEE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(employee.organization_id)
        .bind(employee.department_id)
        .bind(&employee.name)
        .bind(employee.birthdate)
        .bind(&employee.position)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }

    async fn delete(&self, employee: &Employee) -> Result<(), AppError> {
        if let Some(id) = employee.id.as_deref() {
            sqlx::query("DELETE FROM employees WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await?;
        }
        Ok(())
    }

    async fn find_page(
        &self,
        filter: Option<EmployeeFilter>,
        request: &PageRequest,
    ) -> Result<Page<Employee>, AppError> {
        let total: i64 = match filter {
            Some(filter) => {
                sqlx::query_scalar(&format!(
                    "SELECT COUNT(*) FROM employees WHERE {} = $1",
                    filter.column()
                ))
                .bind(filter.value())
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_scalar("SELECT COUNT(*) FROM employees")
                    .fetch_one(&self.pool)
                    .await?
            }
        };

        let mut query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new(format!("SELECT {EMPLOYEE_COLUMNS} FROM employees"));
        Self::push_filter(&mut query, filter);
        query.push(" ORDER BY ");
        query.push(request.sort.to_sql());
        query.push(" LIMIT ");
        query.push_bind(i64::from(request.size));
        query.push(" OFFSET ");
        query.push_bind(i64::try_from(request.offset()).unwrap_or(i64::MAX));

        let content = query
            .build_query_as::<Employee>()
            .fetch_all(&self.pool)
            .await?;

        Ok(Page::new(content, request, u64::try_from(total).unwrap_or(0)))
    }
}
