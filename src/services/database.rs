//! SQLite data-access layer.
//!
//! Every operation is a single statement; the storage engine serializes
//! concurrent writes, so no application-level locking is needed.

use chrono::Utc;
use sqlx::sqlite::SqlitePool;

use crate::error::AppError;
use crate::models::{DepartmentStat, Employee, NewEmployee, NewUser, User};

/// SQLite database wrapper.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database wrapper from a connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Health check - ping the database.
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Database health check failed: {}", e);
                AppError::Database(e)
            })?;
        Ok(())
    }

    // ==================== User Operations ====================

    /// Find a user whose username or email matches the identifier.
    pub async fn find_user_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ? OR email = ?")
            .bind(identifier)
            .bind(identifier)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    /// Find a user by exact username.
    pub async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    /// Insert a new user and return the generated id.
    ///
    /// A unique-constraint hit on username or email surfaces as a conflict.
    pub async fn insert_user(&self, user: &NewUser) -> Result<i64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (username, email, password_hash, role, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("Username or email already exists".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(result.last_insert_rowid())
    }

    /// Count all users.
    pub async fn count_users(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    // ==================== Employee Operations ====================

    /// List all employees, most recently created first.
    ///
    /// Id is the tie-break so records created within the same timestamp
    /// keep a stable order.
    pub async fn list_employees(&self) -> Result<Vec<Employee>, AppError> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employees ORDER BY created_at DESC, id DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    /// Find an employee by id.
    pub async fn find_employee_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    /// Find an employee by email.
    pub async fn find_employee_by_email(&self, email: &str) -> Result<Option<Employee>, AppError> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    /// Insert a new employee and return the generated id.
    pub async fn insert_employee(&self, employee: &NewEmployee) -> Result<i64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO employees (name, email, position, department, salary, hire_date, phone, address, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.position)
        .bind(&employee.department)
        .bind(employee.salary)
        .bind(employee.hire_date)
        .bind(&employee.phone)
        .bind(&employee.address)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("Email already exists".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(result.last_insert_rowid())
    }

    /// Overwrite an employee record in full and return the rows-changed
    /// count (0 when the id matched nothing).
    pub async fn update_employee(
        &self,
        id: i64,
        employee: &NewEmployee,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET name = ?, email = ?, position = ?, department = ?, salary = ?, hire_date = ?, phone = ?, address = ?
            WHERE id = ?
            "#,
        )
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.position)
        .bind(&employee.department)
        .bind(employee.salary)
        .bind(employee.hire_date)
        .bind(&employee.phone)
        .bind(&employee.address)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("Email already exists".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(result.rows_affected())
    }

    /// Delete an employee and return the rows-changed count.
    pub async fn delete_employee(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(result.rows_affected())
    }

    // ==================== Statistics Operations ====================

    /// Count all employees.
    pub async fn count_employees(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    /// Count distinct departments.
    pub async fn count_departments(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(DISTINCT department) FROM employees")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    /// Average salary over all employees; `None` when the table is empty.
    pub async fn average_salary(&self) -> Result<Option<f64>, AppError> {
        sqlx::query_scalar::<_, Option<f64>>("SELECT AVG(salary) FROM employees")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    /// Per-department headcount and average salary.
    pub async fn department_stats(&self) -> Result<Vec<DepartmentStat>, AppError> {
        sqlx::query_as::<_, DepartmentStat>(
            r#"
            SELECT department, COUNT(*) AS count, AVG(salary) AS avg_salary
            FROM employees
            GROUP BY department
            ORDER BY department
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
