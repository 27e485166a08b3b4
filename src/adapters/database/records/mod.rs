pub mod exercise;
pub mod user;

pub use exercise::ExerciseRecord;
pub use user::UserRecord;
