use chrono::NaiveDate;
use rusqlite::Row;
use serde::Deserialize;

use super::{Amount, FromSqliteRow};
use crate::error::{AppError, Result};

pub type RecordId = i64;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRecord {
    pub id: RecordId,
    pub date: String,
    pub calories: Amount,
    pub distance: Amount,
    pub description: String,
}

impl FromSqliteRow for WorkoutRecord {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            date: row.get::<_, Option<String>>("date")?.unwrap_or_default(),
            calories: row.get("calories")?,
            distance: row.get("distance")?,
            description: row
                .get::<_, Option<String>>("description")?
                .unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkoutRecord {
    pub date: String,
    pub calories: Amount,
    pub distance: Amount,
    pub description: String,
}

/// Raw add-workout form input, before presence checks and numeric coercion.
#[derive(Debug, Default, Deserialize)]
pub struct CreateWorkoutForm {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub calories: String,
    #[serde(default)]
    pub distance: String,
    pub description: Option<String>,
}

impl CreateWorkoutForm {
    pub fn into_new_record(self) -> Result<NewWorkoutRecord> {
        let date = self.date.trim();
        if date.is_empty() {
            return Err(AppError::Validation("Please enter a date.".to_string()));
        }
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| {
            AppError::Validation("Date must be in YYYY-MM-DD format.".to_string())
        })?;

        if self.calories.trim().is_empty() || self.distance.trim().is_empty() {
            return Err(AppError::Validation(
                "Please enter both calories and distance.".to_string(),
            ));
        }

        let calories = numeric_field(&self.calories, "Calories")?;
        let distance = numeric_field(&self.distance, "Distance")?;

        Ok(NewWorkoutRecord {
            date: date.format(DATE_FORMAT).to_string(),
            calories,
            distance,
            description: self.description.unwrap_or_default().trim().to_string(),
        })
    }
}

fn numeric_field(raw: &str, label: &str) -> Result<Amount> {
    match Amount::parse(raw) {
        amount @ Amount::Number(_) => Ok(amount),
        _ => Err(AppError::Validation(format!("{} must be a number.", label))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Date,
    Calories,
    Distance,
    Id,
}

impl SortField {
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Date => "date",
            SortField::Calories => "calories",
            SortField::Distance => "distance",
            SortField::Id => "id",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn keyword(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl ListOrder {
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Newest entries first; the records table default.
    pub const fn by_date_desc() -> Self {
        Self::new(SortField::Date, SortDirection::Descending)
    }

    /// Shortest distance first; the chart default.
    pub const fn by_distance_asc() -> Self {
        Self::new(SortField::Distance, SortDirection::Ascending)
    }

    pub fn order_by_clause(&self) -> String {
        format!("ORDER BY {} {}", self.field.column(), self.direction.keyword())
    }
}

impl Default for ListOrder {
    fn default() -> Self {
        Self::by_date_desc()
    }
}
