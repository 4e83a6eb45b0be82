//! Light/dark presentation theme, remembered in a cookie.
//!
//! The theme only picks colors for the page and the chart; it never touches
//! workout data.

use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use plotters::style::RGBColor;

pub const THEME_COOKIE_NAME: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colors handed to the chart renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPalette {
    pub background: RGBColor,
    pub text: RGBColor,
    pub grid: RGBColor,
}

const LIGHT_PALETTE: ChartPalette = ChartPalette {
    background: RGBColor(0xff, 0xff, 0xff),
    text: RGBColor(0x2d, 0x37, 0x48),
    grid: RGBColor(0xe1, 0xe8, 0xed),
};

const DARK_PALETTE: ChartPalette = ChartPalette {
    background: RGBColor(0x2d, 0x37, 0x48),
    text: RGBColor(0xe2, 0xe8, 0xf0),
    grid: RGBColor(0x4a, 0x55, 0x68),
};

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn chart_palette(&self) -> ChartPalette {
        match self {
            Theme::Light => LIGHT_PALETTE,
            Theme::Dark => DARK_PALETTE,
        }
    }

    /// Label for the toggle button.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }
}

pub fn create_theme_cookie(theme: Theme) -> Cookie<'static> {
    Cookie::build((THEME_COOKIE_NAME, theme.as_str()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::days(365))
        .build()
}

pub fn get_theme(jar: &CookieJar) -> Theme {
    jar.get(THEME_COOKIE_NAME)
        .map(|cookie| Theme::parse(cookie.value()))
        .unwrap_or_default()
}
