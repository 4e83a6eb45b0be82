//! Synchronous access to the `fitness` table.
//!
//! Every method runs on the borrowed connection and blocks until SQLite is
//! done. Async callers go through [`super::WorkoutRepository`].

use rusqlite::{Connection, OptionalExtension};

use crate::error::Result;
use crate::models::{
    Aggregate, Amount, DistanceCaloriePair, FromSqliteRow, ListOrder, PairScan, RecordId,
    SortDirection, SortField, WorkoutRecord,
};

const RECORD_COLUMNS: &str = "id, date, calories, distance, description";

pub struct RecordStore<'c> {
    conn: &'c Connection,
}

impl<'c> RecordStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    pub fn insert(
        &self,
        date: &str,
        calories: &Amount,
        distance: &Amount,
        description: &str,
    ) -> Result<RecordId> {
        self.conn.execute(
            "INSERT INTO fitness (date, calories, distance, description) VALUES (?, ?, ?, ?)",
            rusqlite::params![date, calories, distance, description],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Returns whether a row was removed. Unknown ids are not an error.
    pub fn delete(&self, id: RecordId) -> Result<bool> {
        let rows = self
            .conn
            .execute("DELETE FROM fitness WHERE id = ?", [id])?;
        Ok(rows > 0)
    }

    pub fn find_by_id(&self, id: RecordId) -> Result<Option<WorkoutRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM fitness WHERE id = ?", RECORD_COLUMNS))?;
        let record = stmt.query_row([id], WorkoutRecord::from_row).optional()?;
        Ok(record)
    }

    pub fn list_all(&self, order: ListOrder) -> Result<Vec<WorkoutRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM fitness {}",
            RECORD_COLUMNS,
            order.order_by_clause()
        ))?;
        let records = stmt
            .query_map([], WorkoutRecord::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    pub fn count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM fitness", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Count and sums over every record. Values that do not coerce to a
    /// number contribute 0, so an empty table yields all zeros.
    pub fn aggregate(&self) -> Result<Aggregate> {
        let mut stmt = self.conn.prepare("SELECT calories, distance FROM fitness")?;
        let mut rows = stmt.query([])?;

        let mut aggregate = Aggregate::default();
        while let Some(row) = rows.next()? {
            let calories: Amount = row.get(0)?;
            let distance: Amount = row.get(1)?;
            aggregate.count += 1;
            aggregate.total_calories += calories.value_or_zero();
            aggregate.total_distance += distance.value_or_zero();
        }
        Ok(aggregate)
    }

    /// Distance/calorie pairs for the scatter chart.
    ///
    /// Rows whose distance or calories do not parse as finite numbers are
    /// left out and counted in [`PairScan::skipped`]. Sorting on distance or
    /// calories uses the parsed values, so text rows such as `"1,000"` land
    /// in numeric order.
    pub fn list_distance_calorie_pairs(&self, order: ListOrder) -> Result<PairScan> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT distance, calories FROM fitness {}",
            order.order_by_clause()
        ))?;
        let mut rows = stmt.query([])?;

        let mut scan = PairScan::default();
        while let Some(row) = rows.next()? {
            let distance: Amount = row.get(0)?;
            let calories: Amount = row.get(1)?;
            match (distance.as_number(), calories.as_number()) {
                (Some(d), Some(c)) => scan.pairs.push(DistanceCaloriePair::new(d, c)),
                _ => scan.skipped += 1,
            }
        }

        if matches!(order.field, SortField::Distance | SortField::Calories) {
            let key = |p: &DistanceCaloriePair| match order.field {
                SortField::Calories => p.calories,
                _ => p.distance,
            };
            scan.pairs.sort_by(|a, b| {
                let ord = key(a).total_cmp(&key(b));
                match order.direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }

        if scan.skipped > 0 {
            tracing::debug!("Skipped {} unparseable rows for chart", scan.skipped);
        }

        Ok(scan)
    }
}
