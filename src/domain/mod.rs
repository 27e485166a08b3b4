pub mod day;
pub mod exercise;
pub mod user;
