use serde::Serialize;

use crate::models::DepartmentStat;

#[derive(Debug, Serialize)]
pub struct CountStat {
    pub count: i64,
}

/// `average` is null when the table is empty.
#[derive(Debug, Serialize)]
pub struct AvgStat {
    pub average: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResponse {
    pub total_employees: CountStat,
    pub total_departments: CountStat,
    pub avg_salary: AvgStat,
    pub department_stats: Vec<DepartmentStat>,
}
