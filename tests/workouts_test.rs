mod common;

use axum::http::StatusCode;
use fittrack::models::{Amount, ListOrder};
use fittrack::repositories::WorkoutRepository;
use tower::ServiceExt;

#[tokio::test]
async fn test_add_workout_redirects_with_feedback() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());

    let response = app
        .oneshot(common::form_request(
            "/workouts",
            "date=2024-01-01&calories=300&distance=1%2C000&description=swim",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/?added=1");

    let records = WorkoutRepository::new(pool)
        .list_all(ListOrder::default())
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].date, "2024-01-01");
    assert_eq!(records[0].calories, Amount::Number(300.0));
    assert_eq!(records[0].distance, Amount::Number(1000.0));
    assert_eq!(records[0].description, "swim");
}

#[tokio::test]
async fn test_add_workout_without_description() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());

    let response = app
        .oneshot(common::form_request(
            "/workouts",
            "date=2024-01-01&calories=300&distance=1000",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let records = WorkoutRepository::new(pool)
        .list_all(ListOrder::default())
        .await
        .unwrap();
    assert_eq!(records[0].description, "");
}

#[tokio::test]
async fn test_add_workout_missing_fields_warns_without_saving() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());

    let response = app
        .oneshot(common::form_request(
            "/workouts",
            "date=2024-01-01&calories=&distance=1000&description=kept",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    assert!(body.contains("Missing Data"));
    assert!(body.contains("Please enter both calories and distance."));
    // the rest of the entry is kept in the form
    assert!(body.contains(r#"value="kept""#));

    let aggregate = WorkoutRepository::new(pool).aggregate().await.unwrap();
    assert_eq!(aggregate.count, 0);
}

#[tokio::test]
async fn test_add_workout_non_numeric_warns_without_saving() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());

    let response = app
        .oneshot(common::form_request(
            "/workouts",
            "date=2024-01-01&calories=300&distance=far",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    assert!(body.contains("Invalid Input"));
    assert!(body.contains("Distance must be a number."));

    let aggregate = WorkoutRepository::new(pool).aggregate().await.unwrap();
    assert_eq!(aggregate.count, 0);
}

#[tokio::test]
async fn test_delete_without_selection_warns() {
    let pool = common::setup_test_db();
    common::create_test_workout(&pool, "2024-01-01", "300", "1000", "").await;
    let app = common::create_test_app(pool.clone());

    let response = app
        .oneshot(common::form_request("/workouts/delete", ""))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    assert!(body.contains("No Selection"));
    assert!(body.contains("Please select a row to delete."));

    let aggregate = WorkoutRepository::new(pool).aggregate().await.unwrap();
    assert_eq!(aggregate.count, 1);
}

#[tokio::test]
async fn test_delete_selection_asks_for_confirmation() {
    let pool = common::setup_test_db();
    let id = common::create_test_workout(&pool, "2024-01-01", "300", "1000", "swim").await;
    let app = common::create_test_app(pool.clone());

    let response = app
        .oneshot(common::form_request(
            "/workouts/delete",
            &format!("id={}", id),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    assert!(body.contains("Are you sure you want to delete this workout?"));
    assert!(body.contains(&format!("/workouts/{}/delete", id)));

    // nothing removed until confirmed
    let aggregate = WorkoutRepository::new(pool).aggregate().await.unwrap();
    assert_eq!(aggregate.count, 1);
}

#[tokio::test]
async fn test_delete_selection_of_missing_row_is_not_found() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let response = app
        .oneshot(common::form_request("/workouts/delete", "id=42"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_confirmed_delete_removes_row() {
    let pool = common::setup_test_db();
    let id = common::create_test_workout(&pool, "2024-01-01", "300", "1000", "swim").await;
    let keep = common::create_test_workout(&pool, "2024-01-02", "200", "800", "run").await;
    let app = common::create_test_app(pool.clone());

    let response = app
        .oneshot(common::form_request(&format!("/workouts/{}/delete", id), ""))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/");

    let records = WorkoutRepository::new(pool)
        .list_all(ListOrder::default())
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, keep);
}

#[tokio::test]
async fn test_confirmed_delete_of_unknown_id_is_harmless() {
    let pool = common::setup_test_db();
    common::create_test_workout(&pool, "2024-01-01", "300", "1000", "").await;
    let app = common::create_test_app(pool.clone());

    let response = app
        .oneshot(common::form_request("/workouts/999/delete", ""))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let aggregate = WorkoutRepository::new(pool).aggregate().await.unwrap();
    assert_eq!(aggregate.count, 1);
}
