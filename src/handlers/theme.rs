use axum::{
    response::{IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::theme::{create_theme_cookie, get_theme};

#[derive(Debug, Deserialize)]
pub struct ToggleThemeForm {
    pub chart: Option<String>,
}

/// Flips the theme cookie and goes back to the dashboard, redrawing the
/// chart if it was on screen.
pub async fn toggle(jar: CookieJar, Form(form): Form<ToggleThemeForm>) -> Response {
    let theme = get_theme(&jar).toggled();
    tracing::debug!("Switching to {} theme", theme.as_str());

    let target = match form.chart.as_deref() {
        Some(flag) if !flag.is_empty() => "/?chart=1",
        _ => "/",
    };

    (jar.add(create_theme_cookie(theme)), Redirect::to(target)).into_response()
}
