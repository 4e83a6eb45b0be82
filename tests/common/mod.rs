#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use http_body_util::BodyExt;

use fittrack::db::{create_memory_pool, DbPool};
use fittrack::migrations::run_migrations_for_tests;
use fittrack::models::{Amount, NewWorkoutRecord, RecordId};
use fittrack::repositories::WorkoutRepository;

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_for_tests(&pool).expect("Failed to run migrations");
    pool
}

pub fn create_test_app(pool: DbPool) -> Router {
    use fittrack::handlers::{dashboard, workouts};

    let workout_repo = WorkoutRepository::new(pool);

    let dashboard_state = dashboard::DashboardState {
        workout_repo: workout_repo.clone(),
    };
    let workouts_state = workouts::WorkoutsState {
        workout_repo: workout_repo.clone(),
    };

    fittrack::routes::create_router(dashboard_state, workouts_state)
}

// Test data creation helpers
pub async fn create_test_workout(
    pool: &DbPool,
    date: &str,
    calories: &str,
    distance: &str,
    description: &str,
) -> RecordId {
    let workout_repo = WorkoutRepository::new(pool.clone());
    workout_repo
        .create(NewWorkoutRecord {
            date: date.to_string(),
            calories: Amount::parse(calories),
            distance: Amount::parse(distance),
            description: description.to_string(),
        })
        .await
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_string(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&body).into_owned()
}
