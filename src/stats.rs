//! Derived figures for the header and the scatter chart. Pure functions
//! over record store output.

use thiserror::Error;

use crate::models::{Aggregate, ChartSeries, DistanceCaloriePair, HeaderStats};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StatsError {
    #[error("no chartable workouts")]
    NoData,
}

/// Color value used for every point when all calories are equal.
pub const FLAT_COLOR: f64 = 0.5;

/// Truncates the aggregate sums to whole numbers. If either sum is not a
/// finite number the whole result falls back to zeros.
pub fn compute_header_stats(aggregate: &Aggregate) -> HeaderStats {
    let sums = [aggregate.total_calories, aggregate.total_distance];
    if sums.iter().any(|v| !v.is_finite()) || aggregate.count < 0 {
        tracing::warn!("Discarding unusable aggregate: {:?}", aggregate);
        return HeaderStats::default();
    }

    HeaderStats {
        workouts: aggregate.count,
        total_calories: aggregate.total_calories.trunc() as i64,
        total_distance: aggregate.total_distance.trunc() as i64,
    }
}

/// Builds the scatter series, keeping the input order.
///
/// Each point's color is its calories rescaled to `[0, 1]` between the
/// smallest and largest calories in the set. When they are all equal every
/// point gets [`FLAT_COLOR`].
pub fn compute_chart_series(pairs: &[DistanceCaloriePair]) -> Result<ChartSeries, StatsError> {
    if pairs.is_empty() {
        return Err(StatsError::NoData);
    }

    let (min, max) = pairs.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p.calories), hi.max(p.calories))
    });
    let span = max - min;

    let color_scale = pairs
        .iter()
        .map(|p| {
            if max > min {
                (p.calories - min) / span
            } else {
                FLAT_COLOR
            }
        })
        .collect();

    Ok(ChartSeries {
        x: pairs.iter().map(|p| p.distance).collect(),
        y: pairs.iter().map(|p| p.calories).collect(),
        color_scale,
    })
}
