use crate::domain::exercise::Exercise;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
pub struct ExerciseRecord {
    pub(crate) id: Uuid,
    pub(crate) user_id: Uuid,
    pub(crate) description: String,
    pub(crate) duration: i32,
    pub(crate) date: Date,
    pub(crate) created_at: OffsetDateTime,
}

impl From<ExerciseRecord> for Exercise {
    fn from(record: ExerciseRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            description: record.description,
            duration: record.duration,
            date: record.date,
            created_at: record.created_at,
        }
    }
}
