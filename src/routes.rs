use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{dashboard, health, theme, workouts};

pub fn create_router(
    dashboard_state: dashboard::DashboardState,
    workouts_state: workouts::WorkoutsState,
) -> Router {
    Router::new()
        // Dashboard
        .route("/", get(dashboard::index))
        .route("/health", get(health::health_check))
        .with_state(dashboard_state)
        // Workout routes
        .route("/workouts", post(workouts::create))
        .route("/workouts/delete", post(workouts::confirm_delete))
        .route("/workouts/{id}/delete", post(workouts::delete))
        .with_state(workouts_state)
        // Presentation
        .route("/theme", post(theme::toggle))
}
