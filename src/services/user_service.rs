use crate::adapters::database::DbPool;
use crate::adapters::database::user_repo::UserRepository;
use crate::domain::user::User;
use crate::error::{AppError, Result};
use crate::telemetry::SERVICE;
use opentelemetry::{global, metrics::Counter};
use uuid::Uuid;

#[derive(Clone, Debug)]
struct UserMetrics {
    users_created_total: Counter<u64>,
}

impl UserMetrics {
    fn new() -> Self {
        let meter = global::meter(SERVICE);
        Self {
            users_created_total: meter
                .u64_counter("users_created_total")
                .with_description("Total number of users created")
                .build(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct UserService {
    pool: DbPool,
    repo: UserRepository,
    metrics: UserMetrics,
}

impl UserService {
    #[must_use]
    pub fn new(pool: DbPool, repo: UserRepository) -> Self {
        Self { pool, repo, metrics: UserMetrics::new() }
    }

    /// Stores a new user. Usernames are not unique.
    ///
    /// # Errors
    /// Returns `AppError::Database` if the insert fails.
    #[tracing::instrument(skip(self, username), fields(user_id = tracing::field::Empty), err(level = "warn"))]
    pub async fn create(&self, username: &str) -> Result<User> {
        let mut conn = self.pool.acquire().await?;
        let user = self.repo.create(&mut conn, username).await?;

        tracing::Span::current().record("user_id", tracing::field::display(user.id));
        tracing::info!("User created");
        self.metrics.users_created_total.add(1, &[]);

        Ok(user)
    }

    /// # Errors
    /// Returns `AppError::Database` if the query fails.
    #[tracing::instrument(skip(self), err(level = "warn"))]
    pub async fn list_all(&self) -> Result<Vec<User>> {
        let mut conn = self.pool.acquire().await?;
        self.repo.list_all(&mut conn).await
    }

    /// Looks up a user by id.
    ///
    /// # Errors
    /// Returns `AppError::NotFound` if no such user exists.
    /// Returns `AppError::Database` if the query fails.
    #[tracing::instrument(skip(self), err(level = "debug"))]
    pub async fn get(&self, user_id: Uuid) -> Result<User> {
        let mut conn = self.pool.acquire().await?;
        self.repo.find_by_id(&mut conn, user_id).await?.ok_or(AppError::NotFound)
    }
}
