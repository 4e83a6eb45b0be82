use askama::Template;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::chart::ChartView;
use crate::error::{AppError, Result};
use crate::models::workout_record::DATE_FORMAT;
use crate::models::{
    CreateWorkoutForm, HeaderStats, ListOrder, SortDirection, SortField, WorkoutRecord,
};
use crate::repositories::WorkoutRepository;
use crate::stats::{compute_chart_series, compute_header_stats, StatsError};
use crate::theme::{get_theme, Theme};

#[derive(Clone)]
pub struct DashboardState {
    pub workout_repo: WorkoutRepository,
}

/// A modal warning shown over the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: &str, message: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            message: message.into(),
        }
    }

    pub fn no_data() -> Self {
        Self::new("No Data", "Please add some workouts first!")
    }

    pub fn no_selection() -> Self {
        Self::new("No Selection", "Please select a row to delete.")
    }
}

/// What the add-workout form shows. Kept after a rejected submission so the
/// user can correct it.
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    pub date: String,
    pub calories: String,
    pub distance: String,
    pub description: String,
}

impl FormValues {
    fn blank() -> Self {
        Self {
            date: chrono::Local::now().date_naive().format(DATE_FORMAT).to_string(),
            ..Default::default()
        }
    }
}

impl From<&CreateWorkoutForm> for FormValues {
    fn from(form: &CreateWorkoutForm) -> Self {
        Self {
            date: form.date.clone(),
            calories: form.calories.clone(),
            distance: form.distance.clone(),
            description: form.description.clone().unwrap_or_default(),
        }
    }
}

pub struct SortLinks {
    pub id: String,
    pub date: String,
    pub calories: String,
    pub distance: String,
}

impl SortLinks {
    fn for_order(current: ListOrder) -> Self {
        let link = |field: SortField| {
            let direction = if current.field == field {
                current.direction.reversed()
            } else {
                SortDirection::Descending
            };
            format!("/?sort={}&dir={}", field.column(), direction.as_param())
        };
        Self {
            id: link(SortField::Id),
            date: link(SortField::Date),
            calories: link(SortField::Calories),
            distance: link(SortField::Distance),
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard/index.html")]
struct DashboardTemplate {
    theme: Theme,
    stats: HeaderStats,
    records: Vec<WorkoutRecord>,
    form: FormValues,
    chart: Option<ChartView>,
    show_chart: bool,
    warning: Option<Notice>,
    added: bool,
    sort_links: SortLinks,
}

/// Everything about a dashboard render that is not read from the store.
pub struct DashboardOptions {
    pub show_chart: bool,
    pub added: bool,
    pub order: ListOrder,
    pub warning: Option<Notice>,
    pub form: FormValues,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            show_chart: false,
            added: false,
            order: ListOrder::default(),
            warning: None,
            form: FormValues::blank(),
        }
    }
}

impl DashboardOptions {
    pub fn with_warning(warning: Notice) -> Self {
        Self {
            warning: Some(warning),
            ..Default::default()
        }
    }
}

pub async fn render_dashboard(
    repo: &WorkoutRepository,
    theme: Theme,
    options: DashboardOptions,
) -> Result<Response> {
    let aggregate = repo.aggregate().await?;
    let stats = compute_header_stats(&aggregate);
    let records = repo.list_all(options.order).await?;

    let mut warning = options.warning;
    let chart = if options.show_chart {
        let scan = repo
            .list_distance_calorie_pairs(ListOrder::by_distance_asc())
            .await?;
        match compute_chart_series(&scan.pairs) {
            Ok(series) => Some(ChartView::build(&series, theme, scan.skipped)?),
            Err(StatsError::NoData) => {
                tracing::warn!("Chart requested with no chartable workouts");
                warning.get_or_insert_with(Notice::no_data);
                None
            }
        }
    } else {
        None
    };

    let template = DashboardTemplate {
        theme,
        stats,
        records,
        form: options.form,
        show_chart: chart.is_some(),
        chart,
        warning,
        added: options.added,
        sort_links: SortLinks::for_order(options.order),
    };

    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    chart: Option<u8>,
    added: Option<u8>,
    sort: Option<SortField>,
    dir: Option<SortDirection>,
}

pub async fn index(
    State(state): State<DashboardState>,
    jar: CookieJar,
    Query(query): Query<DashboardQuery>,
) -> Result<Response> {
    let order = ListOrder::new(
        query.sort.unwrap_or_default(),
        query.dir.unwrap_or_default(),
    );

    let options = DashboardOptions {
        show_chart: query.chart.unwrap_or(0) != 0,
        added: query.added.unwrap_or(0) != 0,
        order,
        ..Default::default()
    };

    render_dashboard(&state.workout_repo, get_theme(&jar), options).await
}
