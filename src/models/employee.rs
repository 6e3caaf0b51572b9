//! Employee record model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Employee entity as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
    pub hire_date: NaiveDate,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields for inserting or overwriting an employee record.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
    pub hire_date: NaiveDate,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Per-department aggregate row for the statistics report.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DepartmentStat {
    pub department: String,
    pub count: i64,
    pub avg_salary: f64,
}
