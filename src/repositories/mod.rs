pub mod record_store;
pub mod workout_repo;

pub use record_store::RecordStore;
pub use workout_repo::WorkoutRepository;
