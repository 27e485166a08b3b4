use crate::api::AppState;
use crate::api::middleware::{FormBody, QueryParams};
use crate::api::schemas::exercises::{CreateExerciseForm, ExerciseResponse, LogQuery, LogResponse};
use crate::api::schemas::users::parse_user_id;
use crate::domain::day::today;
use crate::error::{AppError, Result};
use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

/// Logs an exercise for the user in the path.
///
/// # Errors
/// Returns `AppError::BadRequest` if the id or any form field is invalid.
/// Returns `AppError::NotFound` if the user does not exist.
pub async fn log_exercise(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    FormBody(form): FormBody<CreateExerciseForm>,
) -> Result<impl IntoResponse> {
    let user_id = parse_user_id(&user_id).map_err(AppError::BadRequest)?;
    let exercise = form.validate(today()).map_err(AppError::BadRequest)?;

    let logged = state.exercise_service.log_exercise(user_id, exercise).await?;
    Ok(Json(ExerciseResponse::from(logged)))
}

/// Returns the user's exercise log, optionally bounded by `from`/`to` and capped by `limit`.
///
/// # Errors
/// Returns `AppError::BadRequest` if the id or any query parameter is invalid.
/// Returns `AppError::NotFound` if the user does not exist.
pub async fn get_logs(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    QueryParams(query): QueryParams<LogQuery>,
) -> Result<impl IntoResponse> {
    let user_id = parse_user_id(&user_id).map_err(AppError::BadRequest)?;
    let filter = query.to_filter(user_id).map_err(AppError::BadRequest)?;

    let log = state.exercise_service.query_logs(filter).await?;
    Ok(Json(LogResponse::from(log)))
}
