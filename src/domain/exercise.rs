use crate::domain::user::User;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

pub const MAX_DESCRIPTION_LEN: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    /// Minutes.
    pub duration: i32,
    pub date: Date,
    pub created_at: OffsetDateTime,
}

/// A validated exercise ready to be stored. `date` is resolved by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExercise {
    pub description: String,
    pub duration: i32,
    pub date: Date,
}

/// An exercise joined with the user it was logged for.
#[derive(Debug, Clone)]
pub struct LoggedExercise {
    pub user: User,
    pub exercise: Exercise,
}

#[derive(Debug, Clone)]
pub struct ExerciseLog {
    pub user: User,
    pub entries: Vec<Exercise>,
}

impl ExerciseLog {
    #[must_use]
    pub const fn count(&self) -> usize {
        self.entries.len()
    }
}

/// Inclusive date bounds. Either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<Date>,
    pub to: Option<Date>,
}

impl DateRange {
    #[must_use]
    pub const fn with_upper(mut self, to: Date) -> Self {
        self.to = Some(to);
        self
    }

    #[must_use]
    pub const fn with_lower(mut self, from: Date) -> Self {
        self.from = Some(from);
        self
    }
}

/// Selects the exercises returned by a log query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub user_id: Uuid,
    pub date: Option<DateRange>,
    pub limit: Option<u32>,
}

impl ExerciseFilter {
    #[must_use]
    pub const fn for_user(user_id: Uuid) -> Self {
        Self { user_id, date: None, limit: None }
    }

    /// Adds `date <= to`, keeping any lower bound already present.
    #[must_use]
    pub fn until(mut self, to: Date) -> Self {
        self.date = Some(self.date.unwrap_or_default().with_upper(to));
        self
    }

    /// Adds `date >= from`, keeping any upper bound already present.
    #[must_use]
    pub fn since(mut self, from: Date) -> Self {
        self.date = Some(self.date.unwrap_or_default().with_lower(from));
        self
    }

    /// Caps the number of entries. Zero means uncapped.
    #[must_use]
    pub const fn limit(mut self, limit: Option<u32>) -> Self {
        self.limit = match limit {
            Some(0) | None => None,
            Some(n) => Some(n),
        };
        self
    }

    #[must_use]
    pub fn build(user_id: Uuid, from: Option<Date>, to: Option<Date>, limit: Option<u32>) -> Self {
        let mut filter = Self::for_user(user_id).limit(limit);
        if let Some(to) = to {
            filter = filter.until(to);
        }
        if let Some(from) = from {
            filter = filter.since(from);
        }
        filter
    }

    #[must_use]
    pub fn lower_bound(&self) -> Option<Date> {
        self.date.and_then(|range| range.from)
    }

    #[must_use]
    pub fn upper_bound(&self) -> Option<Date> {
        self.date.and_then(|range| range.to)
    }
}
