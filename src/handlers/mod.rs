pub mod dashboard;
pub mod health;
pub mod theme;
pub mod workouts;
