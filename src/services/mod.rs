pub mod exercise_service;
pub mod health_service;
pub mod user_service;
