use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Employee, NewEmployee};

/// Request body shared by create and update; both perform a full-record
/// write with the same required fields.
#[derive(Debug, Deserialize, Validate)]
pub struct EmployeePayload {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Position is required"))]
    pub position: String,

    #[validate(length(min = 1, message = "Department is required"))]
    pub department: String,

    #[validate(range(min = 0.0, message = "Salary must be non-negative"))]
    pub salary: f64,

    pub hire_date: NaiveDate,

    pub phone: Option<String>,
    pub address: Option<String>,
}

impl From<EmployeePayload> for NewEmployee {
    fn from(p: EmployeePayload) -> Self {
        Self {
            name: p.name,
            email: p.email,
            position: p.position,
            department: p.department,
            salary: p.salary,
            hire_date: p.hire_date,
            phone: p.phone,
            address: p.address,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EmployeeListResponse {
    pub message: String,
    pub data: Vec<Employee>,
}

/// Single-record fetch: an unmatched id yields `data: null` with status
/// 200 rather than a 404.
#[derive(Debug, Serialize)]
pub struct EmployeeGetResponse {
    pub message: String,
    pub data: Option<Employee>,
}

#[derive(Debug, Serialize)]
pub struct IdPayload {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct CreateEmployeeResponse {
    pub message: String,
    pub data: IdPayload,
    pub id: i64,
}

/// Response for update and delete: the count of rows changed (0 when the
/// id matched nothing, which is not an error).
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub message: String,
    pub changes: u64,
}
