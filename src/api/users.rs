use crate::api::AppState;
use crate::api::middleware::FormBody;
use crate::api::schemas::users::{CreateUserForm, UserResponse};
use crate::error::{AppError, Result};
use axum::{Json, extract::State, response::IntoResponse};

/// Creates a user from a form-encoded `username`.
///
/// # Errors
/// Returns `AppError::BadRequest` if the body is not a form or the username is missing or blank.
/// Returns `AppError::Database` if the insert fails.
pub async fn create_user(
    State(state): State<AppState>,
    FormBody(form): FormBody<CreateUserForm>,
) -> Result<impl IntoResponse> {
    let username = form.validate().map_err(AppError::BadRequest)?;
    let user = state.user_service.create(&username).await?;
    Ok(Json(UserResponse::from(user)))
}

/// # Errors
/// Returns `AppError::Database` if the query fails.
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = state.user_service.list_all().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect::<Vec<_>>()))
}
