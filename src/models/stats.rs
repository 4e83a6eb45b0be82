/// Raw totals over the whole `fitness` table.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aggregate {
    pub count: i64,
    pub total_calories: f64,
    pub total_distance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceCaloriePair {
    pub distance: f64,
    pub calories: f64,
}

impl DistanceCaloriePair {
    pub fn new(distance: f64, calories: f64) -> Self {
        Self { distance, calories }
    }
}

/// Chartable pairs plus the number of rows that were dropped because their
/// distance or calories did not parse.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PairScan {
    pub pairs: Vec<DistanceCaloriePair>,
    pub skipped: usize,
}

/// Header figures, truncated to whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderStats {
    pub workouts: i64,
    pub total_calories: i64,
    pub total_distance: i64,
}

impl HeaderStats {
    pub fn workouts_label(&self) -> String {
        format_thousands(self.workouts)
    }

    pub fn calories_label(&self) -> String {
        format_thousands(self.total_calories)
    }

    pub fn distance_label(&self) -> String {
        format_thousands(self.total_distance)
    }
}

/// Scatter series: `x` is distance, `y` is calories and `color_scale` holds
/// each point's calories normalized to `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub color_scale: Vec<f64>,
}

/// Formats an integer with `,` between thousands groups.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
