use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use super::dashboard::DashboardState;
use crate::version::GIT_VERSION;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    git_version: &'static str,
    workouts: Option<i64>,
}

/// Reports whether the database answers, along with the build version.
pub async fn health_check(
    State(state): State<DashboardState>,
) -> (StatusCode, Json<HealthResponse>) {
    match state.workout_repo.aggregate().await {
        Ok(aggregate) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                git_version: GIT_VERSION,
                workouts: Some(aggregate.count),
            }),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable",
                    git_version: GIT_VERSION,
                    workouts: None,
                }),
            )
        }
    }
}
