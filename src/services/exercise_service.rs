use crate::adapters::database::DbPool;
use crate::adapters::database::exercise_repo::ExerciseRepository;
use crate::adapters::database::user_repo::UserRepository;
use crate::domain::exercise::{Exercise, ExerciseFilter, ExerciseLog, LoggedExercise, NewExercise};
use crate::error::Result;
use crate::services::user_service::UserService;
use crate::telemetry::SERVICE;
use opentelemetry::{global, metrics::Counter};
use uuid::Uuid;

#[derive(Clone, Debug)]
struct ExerciseMetrics {
    exercises_logged_total: Counter<u64>,
}

impl ExerciseMetrics {
    fn new() -> Self {
        let meter = global::meter(SERVICE);
        Self {
            exercises_logged_total: meter
                .u64_counter("exercises_logged_total")
                .with_description("Total number of exercises logged")
                .build(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ExerciseService {
    pool: DbPool,
    repo: ExerciseRepository,
    user_repo: UserRepository,
    user_service: UserService,
    metrics: ExerciseMetrics,
}

impl ExerciseService {
    #[must_use]
    pub fn new(pool: DbPool, repo: ExerciseRepository, user_repo: UserRepository, user_service: UserService) -> Self {
        Self { pool, repo, user_repo, user_service, metrics: ExerciseMetrics::new() }
    }

    /// Stores an exercise and fetches its owner concurrently.
    ///
    /// # Errors
    /// Returns `AppError::NotFound` if the user does not exist.
    /// Returns `AppError::Database` if either store operation fails.
    #[tracing::instrument(skip(self, exercise), err(level = "warn"))]
    pub async fn log_exercise(&self, user_id: Uuid, exercise: NewExercise) -> Result<LoggedExercise> {
        let (exercise, user) = tokio::try_join!(self.insert(user_id, &exercise), self.user_service.get(user_id))?;

        tracing::debug!(exercise_id = %exercise.id, "Exercise logged");
        self.metrics.exercises_logged_total.add(1, &[]);

        Ok(LoggedExercise { user, exercise })
    }

    /// Runs a log query and fetches the owner concurrently.
    ///
    /// # Errors
    /// Returns `AppError::NotFound` if the user does not exist.
    /// Returns `AppError::Database` if either store operation fails.
    #[tracing::instrument(skip(self), fields(user_id = %filter.user_id), err(level = "warn"))]
    pub async fn query_logs(&self, filter: ExerciseFilter) -> Result<ExerciseLog> {
        let (entries, user) = tokio::try_join!(self.find(&filter), self.user_service.get(filter.user_id))?;

        Ok(ExerciseLog { user, entries })
    }

    /// Deletes every exercise and user.
    ///
    /// # Errors
    /// Returns `AppError::Database` if the deletes fail; nothing is removed in that case.
    #[tracing::instrument(skip(self), err)]
    pub async fn reset(&self) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        let exercises = self.repo.delete_all(&mut tx).await?;
        let users = self.user_repo.delete_all(&mut tx).await?;
        tx.commit().await?;

        tracing::warn!(users, exercises, "Store reset");
        Ok(())
    }

    async fn insert(&self, user_id: Uuid, exercise: &NewExercise) -> Result<Exercise> {
        let mut conn = self.pool.acquire().await?;
        self.repo.create(&mut conn, user_id, exercise).await
    }

    async fn find(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>> {
        let mut conn = self.pool.acquire().await?;
        self.repo.find(&mut conn, filter).await
    }
}
