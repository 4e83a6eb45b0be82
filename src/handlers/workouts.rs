use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use super::dashboard::{render_dashboard, DashboardOptions, FormValues, Notice};
use crate::error::{AppError, Result};
use crate::models::{CreateWorkoutForm, RecordId, WorkoutRecord};
use crate::repositories::WorkoutRepository;
use crate::theme::{get_theme, Theme};

#[derive(Clone)]
pub struct WorkoutsState {
    pub workout_repo: WorkoutRepository,
}

#[derive(Template)]
#[template(path = "workouts/confirm_delete.html")]
struct ConfirmDeleteTemplate {
    theme: Theme,
    record: WorkoutRecord,
}

#[derive(Debug, Deserialize)]
pub struct DeleteSelection {
    pub id: Option<RecordId>,
}

pub async fn create(
    State(state): State<WorkoutsState>,
    jar: CookieJar,
    Form(form): Form<CreateWorkoutForm>,
) -> Result<Response> {
    let values = FormValues::from(&form);

    let record = match form.into_new_record() {
        Ok(record) => record,
        Err(AppError::Validation(message)) => {
            tracing::warn!("Rejected workout entry: {}", message);
            let title = if message.starts_with("Please enter") {
                "Missing Data"
            } else {
                "Invalid Input"
            };
            let options = DashboardOptions {
                warning: Some(Notice::new(title, message)),
                form: values,
                ..Default::default()
            };
            return render_dashboard(&state.workout_repo, get_theme(&jar), options).await;
        }
        Err(e) => return Err(e),
    };

    state.workout_repo.create(record).await?;

    Ok(Redirect::to("/?added=1").into_response())
}

/// Asks for confirmation before deleting the selected row.
pub async fn confirm_delete(
    State(state): State<WorkoutsState>,
    jar: CookieJar,
    Form(selection): Form<DeleteSelection>,
) -> Result<Response> {
    let theme = get_theme(&jar);

    let Some(id) = selection.id else {
        tracing::warn!("Delete requested without a selected row");
        return render_dashboard(
            &state.workout_repo,
            theme,
            DashboardOptions::with_warning(Notice::no_selection()),
        )
        .await;
    };

    let record = state
        .workout_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Workout not found".to_string()))?;

    let template = ConfirmDeleteTemplate { theme, record };

    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}

pub async fn delete(
    State(state): State<WorkoutsState>,
    Path(id): Path<RecordId>,
) -> Result<Response> {
    state.workout_repo.delete(id).await?;

    Ok(Redirect::to("/").into_response())
}
