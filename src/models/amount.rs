//! Numeric workout values as they sit in the `fitness` table.
//!
//! The `calories` and `distance` columns have REAL affinity, but rows written
//! from raw form text may still hold TEXT (e.g. `"1,000"` or `"abc"`) or NULL.
//! [`Amount`] keeps whatever was stored and coerces on demand.

use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef};

#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    Number(f64),
    Text(String),
    Missing,
}

/// Parses a user-entered number, ignoring surrounding whitespace and `,`
/// thousands separators. Only finite values are accepted.
pub fn parse_number(input: &str) -> Option<f64> {
    input
        .trim()
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

impl Amount {
    /// Wraps raw input text. Blank input is `Missing`, numeric input becomes
    /// `Number`, anything else is kept verbatim as `Text`.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Amount::Missing;
        }
        match parse_number(trimmed) {
            Some(v) => Amount::Number(v),
            None => Amount::Text(input.to_string()),
        }
    }

    /// The finite numeric value, if there is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Amount::Number(v) if v.is_finite() => Some(*v),
            Amount::Number(_) => None,
            Amount::Text(s) => parse_number(s),
            Amount::Missing => None,
        }
    }

    pub fn value_or_zero(&self) -> f64 {
        self.as_number().unwrap_or(0.0)
    }

    /// Whole-number rendering used by the records table.
    pub fn display_whole(&self) -> String {
        format!("{}", self.value_or_zero().trunc() as i64)
    }
}

impl FromSql for Amount {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Ok(match value {
            ValueRef::Null => Amount::Missing,
            ValueRef::Integer(i) => Amount::Number(i as f64),
            ValueRef::Real(f) => Amount::Number(f),
            ValueRef::Text(t) | ValueRef::Blob(t) => {
                Amount::Text(String::from_utf8_lossy(t).into_owned())
            }
        })
    }
}

impl ToSql for Amount {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Amount::Number(v) => ToSqlOutput::from(*v),
            Amount::Text(s) => ToSqlOutput::from(s.as_str()),
            Amount::Missing => ToSqlOutput::Owned(Value::Null),
        })
    }
}
