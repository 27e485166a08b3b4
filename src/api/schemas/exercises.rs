use crate::domain::day::{format_day, parse_day};
use crate::domain::exercise::{Exercise, ExerciseFilter, ExerciseLog, LoggedExercise, MAX_DESCRIPTION_LEN, NewExercise};
use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

/// HTML forms submit untouched inputs as empty strings.
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize)]
pub struct CreateExerciseForm {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl CreateExerciseForm {
    /// Builds the exercise to store. A missing date resolves to `today`.
    ///
    /// # Errors
    /// Returns an error if the description is blank, the duration is not a non-negative integer,
    /// or the date cannot be parsed.
    pub fn validate(&self, today: Date) -> Result<NewExercise, String> {
        let description = present(self.description.as_deref()).ok_or("description is required")?;
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(format!("description is too long (max {MAX_DESCRIPTION_LEN} characters)"));
        }

        let raw_duration = present(self.duration.as_deref()).ok_or("duration is required")?;
        let duration: i32 = raw_duration.parse().map_err(|_| format!("duration must be an integer: {raw_duration}"))?;
        if duration < 0 {
            return Err("duration must not be negative".into());
        }

        let date = match present(self.date.as_deref()) {
            Some(raw) => parse_day(raw)?,
            None => today,
        };

        Ok(NewExercise { description: description.to_string(), duration, date })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

impl LogQuery {
    /// # Errors
    /// Returns an error if a bound is not a valid date or the limit is not a non-negative integer.
    pub fn to_filter(&self, user_id: Uuid) -> Result<ExerciseFilter, String> {
        let from = present(self.from.as_deref()).map(parse_day).transpose()?;
        let to = present(self.to.as_deref()).map(parse_day).transpose()?;
        let limit = present(self.limit.as_deref())
            .map(|raw| raw.parse::<u32>().map_err(|_| format!("limit must be a non-negative integer: {raw}")))
            .transpose()?;

        Ok(ExerciseFilter::build(user_id, from, to, limit))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseResponse {
    pub username: String,
    pub description: String,
    pub duration: i32,
    pub date: String,
    #[serde(rename = "_id")]
    pub id: Uuid,
}

impl From<LoggedExercise> for ExerciseResponse {
    fn from(logged: LoggedExercise) -> Self {
        Self {
            username: logged.user.username,
            description: logged.exercise.description,
            duration: logged.exercise.duration,
            date: format_day(logged.exercise.date),
            id: logged.user.id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i32,
    pub date: String,
}

impl From<Exercise> for LogEntry {
    fn from(exercise: Exercise) -> Self {
        Self { description: exercise.description, duration: exercise.duration, date: format_day(exercise.date) }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogResponse {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

impl From<ExerciseLog> for LogResponse {
    fn from(log: ExerciseLog) -> Self {
        let count = log.count();
        Self {
            username: log.user.username,
            id: log.user.id,
            count,
            log: log.entries.into_iter().map(Into::into).collect(),
        }
    }
}
