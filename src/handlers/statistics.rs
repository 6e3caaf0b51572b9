use axum::{extract::State, Json};

use crate::{
    dtos::statistics::{AvgStat, CountStat, StatisticsResponse},
    error::AppError,
    AppState,
};

/// Aggregate statistics over the employee table.
pub async fn statistics(
    State(state): State<AppState>,
) -> Result<Json<StatisticsResponse>, AppError> {
    let total_employees = state.db.count_employees().await?;
    let total_departments = state.db.count_departments().await?;
    let avg_salary = state.db.average_salary().await?;
    let department_stats = state.db.department_stats().await?;

    Ok(Json(StatisticsResponse {
        total_employees: CountStat {
            count: total_employees,
        },
        total_departments: CountStat {
            count: total_departments,
        },
        avg_salary: AvgStat {
            average: avg_salary,
        },
        department_stats,
    }))
}
