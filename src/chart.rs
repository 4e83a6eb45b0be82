//! Scatter chart for the dashboard, drawn with `plotters` into an SVG string
//! that the template embeds inline.

use std::error::Error;
use std::ops::Range;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::colors::colormaps::{ColorMap, ViridisRGB};

use crate::error::{AppError, Result};
use crate::models::ChartSeries;
use crate::stats::FLAT_COLOR;
use crate::theme::{ChartPalette, Theme};

pub const TITLE: &str = "Distance vs. Calories Burned";
pub const X_LABEL: &str = "Distance (yards)";
pub const Y_LABEL: &str = "Calories Burned";
pub const COLORBAR_LABEL: &str = "Normalized Calories";

const WIDTH: u32 = 720;
const HEIGHT: u32 = 420;
const COLORBAR_WIDTH: u32 = 110;
const POINT_RADIUS: i32 = 6;
const COLORBAR_STEPS: usize = 64;
const FONT: &str = "sans-serif";

type DrawResult<T> = std::result::Result<T, Box<dyn Error>>;

/// A rendered chart plus the number of rows that could not be plotted.
#[derive(Debug, Clone)]
pub struct ChartView {
    pub svg: String,
    pub skipped: usize,
}

impl ChartView {
    pub fn build(series: &ChartSeries, theme: Theme, skipped: usize) -> Result<Self> {
        let svg = render_svg(series, theme.chart_palette())
            .map_err(|e| AppError::Internal(format!("chart rendering failed: {}", e)))?;

        Ok(Self { svg, skipped })
    }
}

/// Maps `t` in `[0, 1]` onto the viridis color map.
pub fn viridis(t: f64) -> RGBColor {
    let t = if t.is_finite() {
        t.clamp(0.0, 1.0)
    } else {
        FLAT_COLOR
    };
    ViridisRGB.get_color(t as f32)
}

fn render_svg(series: &ChartSeries, palette: ChartPalette) -> DrawResult<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&palette.background)?;

        let (plot_area, bar_area) = root.split_horizontally((WIDTH - COLORBAR_WIDTH) as i32);
        draw_scatter(&plot_area, series, palette)?;
        draw_colorbar(&bar_area, palette)?;

        root.present()?;
    }
    Ok(svg)
}

fn draw_scatter(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    series: &ChartSeries,
    palette: ChartPalette,
) -> DrawResult<()> {
    let mut chart = ChartBuilder::on(area)
        .caption(TITLE, (FONT, 18).into_font().color(&palette.text))
        .margin(16)
        .x_label_area_size(44)
        .y_label_area_size(64)
        .build_cartesian_2d(axis_range(&series.x), axis_range(&series.y))?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .x_label_formatter(&tick_label)
        .y_label_formatter(&tick_label)
        .axis_style(palette.text)
        .bold_line_style(palette.grid)
        .light_line_style(palette.grid.mix(0.3))
        .label_style((FONT, 11).into_font().color(&palette.text))
        .axis_desc_style((FONT, 13).into_font().color(&palette.text))
        .draw()?;

    chart.draw_series(
        series
            .x
            .iter()
            .zip(&series.y)
            .zip(&series.color_scale)
            .flat_map(|((&x, &y), &c)| {
                [
                    Circle::new((x, y), POINT_RADIUS, viridis(c).mix(0.7).filled()),
                    Circle::new((x, y), POINT_RADIUS, WHITE.stroke_width(1)),
                ]
            }),
    )?;

    Ok(())
}

fn draw_colorbar(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    palette: ChartPalette,
) -> DrawResult<()> {
    let mut bar = ChartBuilder::on(area)
        .margin_top(60)
        .margin_bottom(60)
        .margin_left(8)
        .margin_right(8)
        .set_label_area_size(LabelAreaPosition::Right, 64)
        .build_cartesian_2d(0.0..1.0, 0.0..1.0)?;

    bar.configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_labels(3)
        .y_desc(COLORBAR_LABEL)
        .y_label_formatter(&|v| format!("{:.1}", v))
        .axis_style(palette.text)
        .label_style((FONT, 11).into_font().color(&palette.text))
        .axis_desc_style((FONT, 13).into_font().color(&palette.text))
        .draw()?;

    let step = 1.0 / COLORBAR_STEPS as f64;
    bar.draw_series((0..COLORBAR_STEPS).map(|i| {
        let lo = i as f64 * step;
        let hi = lo + step;
        Rectangle::new([(0.0, lo), (1.0, hi)], viridis(lo + step / 2.0).filled())
    }))?;

    Ok(())
}

/// Data range padded by a tenth of the half-span on each side. The bounds
/// and their difference stay finite for any finite input.
fn axis_range(values: &[f64]) -> Range<f64> {
    let (min, max) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if min > max {
        return 0.0..1.0;
    }

    let half_span = max / 2.0 - min / 2.0;
    let pad = if half_span > 0.0 {
        half_span * 0.1
    } else if min != 0.0 {
        min.abs() * 0.1
    } else {
        1.0
    };

    let lo = if (min - pad).is_finite() { min - pad } else { min };
    let hi = if (max + pad).is_finite() { max + pad } else { max };

    if lo < hi && (hi - lo).is_finite() {
        lo..hi
    } else if lo < hi {
        // span wider than f64 can hold; keep the upper half of the data
        (hi - f64::MAX)..hi
    } else {
        0.0..1.0
    }
}

fn tick_label(v: &f64) -> String {
    let v = *v;
    if v.abs() >= 1e6 {
        format!("{:.1e}", v)
    } else if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        let label = format!("{:.2}", v);
        label.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(points: &[(f64, f64, f64)]) -> ChartSeries {
        ChartSeries {
            x: points.iter().map(|p| p.0).collect(),
            y: points.iter().map(|p| p.1).collect(),
            color_scale: points.iter().map(|p| p.2).collect(),
        }
    }

    fn assert_usable(range: &Range<f64>) {
        assert!(range.start.is_finite());
        assert!(range.end.is_finite());
        assert!(range.start < range.end);
        assert!((range.end - range.start).is_finite());
    }

    #[test]
    fn test_axis_range_pads_data() {
        let range = axis_range(&[120.0, 980.0]);
        assert!(range.start < 120.0);
        assert!(range.end > 980.0);
    }

    #[test]
    fn test_axis_range_single_value() {
        let range = axis_range(&[50.0]);
        assert!(range.start < 50.0 && range.end > 50.0);

        let range = axis_range(&[0.0]);
        assert_eq!(range, -1.0..1.0);
    }

    #[test]
    fn test_axis_range_extreme_values() {
        assert_usable(&axis_range(&[0.0, 1.7e308]));
        assert_usable(&axis_range(&[1.7e308]));
        assert_usable(&axis_range(&[-1.7e308]));
        assert_usable(&axis_range(&[-1.7e308, 1.7e308]));
        assert_usable(&axis_range(&[f64::MIN_POSITIVE]));
    }

    #[test]
    fn test_viridis_runs_dark_to_light() {
        let low = viridis(0.0);
        let high = viridis(1.0);
        assert_ne!(low, high);
        assert!(low.0 as u32 + low.1 as u32 + (low.2 as u32) < high.0 as u32 + high.1 as u32 + high.2 as u32);
        assert_eq!(viridis(2.0), high);
        assert_eq!(viridis(f64::NAN), viridis(FLAT_COLOR));
    }

    #[test]
    fn test_tick_label() {
        assert_eq!(tick_label(&200.0), "200");
        assert_eq!(tick_label(&0.25), "0.25");
        assert_eq!(tick_label(&1.5), "1.5");
        assert_eq!(tick_label(&2e8), "2.0e8");
    }

    #[test]
    fn test_build_draws_every_point() {
        let view = ChartView::build(
            &series(&[(10.0, 10.0, 0.0), (20.0, 20.0, 0.5), (30.0, 30.0, 1.0)]),
            Theme::Light,
            2,
        )
        .unwrap();

        assert!(view.svg.starts_with("<svg"));
        assert!(view.svg.contains(TITLE));
        assert!(view.svg.contains(X_LABEL));
        assert!(view.svg.contains(Y_LABEL));
        assert!(view.svg.contains(COLORBAR_LABEL));
        // filled marker plus white edge per point
        assert_eq!(view.svg.matches("<circle").count(), 6);
        assert_eq!(view.skipped, 2);
    }

    #[test]
    fn test_build_survives_extreme_values() {
        let view = ChartView::build(
            &series(&[(0.0, 100.0, 0.0), (1.7e308, 200.0, 1.0)]),
            Theme::Dark,
            0,
        )
        .unwrap();

        assert_eq!(view.svg.matches("<circle").count(), 4);
    }
}
