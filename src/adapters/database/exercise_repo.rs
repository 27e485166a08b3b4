use crate::adapters::database::records::ExerciseRecord;
use crate::domain::exercise::{Exercise, ExerciseFilter, NewExercise};
use crate::error::{AppError, Result};
use sqlx::PgConnection;
use uuid::Uuid;

#[derive(Clone, Debug, Default)]
pub struct ExerciseRepository {}

impl ExerciseRepository {
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Records an exercise for a user.
    ///
    /// # Errors
    /// Returns `AppError::NotFound` if the user does not exist.
    /// Returns `AppError::Database` if the insert fails.
    #[tracing::instrument(level = "debug", skip(self, conn, exercise), err)]
    pub(crate) async fn create(
        &self,
        conn: &mut PgConnection,
        user_id: Uuid,
        exercise: &NewExercise,
    ) -> Result<Exercise> {
        let result = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            INSERT INTO exercises (user_id, description, duration, date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, description, duration, date, created_at
            "#,
        )
        .bind(user_id)
        .bind(&exercise.description)
        .bind(exercise.duration)
        .bind(exercise.date)
        .fetch_one(conn)
        .await;

        match result {
            Ok(record) => Ok(record.into()),
            Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some("23503") => {
                // Foreign key violation: user_id does not exist
                Err(AppError::NotFound)
            }
            Err(e) => Err(AppError::Database(e)),
        }
    }

    /// Fetches the exercises selected by `filter`, oldest day first.
    /// Unset bounds and an unset limit bind as NULL, which Postgres treats as "no constraint".
    ///
    /// # Errors
    /// Returns `AppError::Database` if the query fails.
    #[tracing::instrument(level = "debug", skip(self, conn), err)]
    pub(crate) async fn find(&self, conn: &mut PgConnection, filter: &ExerciseFilter) -> Result<Vec<Exercise>> {
        let records = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            SELECT id, user_id, description, duration, date, created_at
            FROM exercises
            WHERE user_id = $1
              AND ($2::date IS NULL OR date >= $2)
              AND ($3::date IS NULL OR date <= $3)
            ORDER BY date ASC, created_at ASC, id ASC
            LIMIT $4
            "#,
        )
        .bind(filter.user_id)
        .bind(filter.lower_bound())
        .bind(filter.upper_bound())
        .bind(filter.limit.map(i64::from))
        .fetch_all(conn)
        .await?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    /// # Errors
    /// Returns `AppError::Database` if the delete fails.
    #[tracing::instrument(level = "debug", skip(self, conn), err)]
    pub(crate) async fn delete_all(&self, conn: &mut PgConnection) -> Result<u64> {
        let result = sqlx::query("DELETE FROM exercises").execute(conn).await?;
        Ok(result.rows_affected())
    }
}
