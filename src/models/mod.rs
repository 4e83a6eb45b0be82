pub mod amount;
pub mod from_row;
pub mod stats;
pub mod workout_record;

pub use amount::Amount;
pub use from_row::FromSqliteRow;
pub use stats::{Aggregate, ChartSeries, DistanceCaloriePair, HeaderStats, PairScan};
pub use workout_record::{
    CreateWorkoutForm, ListOrder, NewWorkoutRecord, RecordId, SortDirection, SortField,
    WorkoutRecord,
};
