use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::error::AppError;
use crate::state::AppState;

/// Profile lookup with bounded retries behind it: a freshly provisioned
/// profile may not be visible yet, so the loader walks its schedule before
/// reporting the recoverable not-found state.
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = state.profile_loader.load(&user_id).await?;

    match outcome.profile {
        Some(profile) => Ok(Json(profile).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "Profile not found",
                "errorCode": "PROFILE_NOT_FOUND",
                "recoverable": true,
                "attempts": outcome.attempts,
            })),
        )
            .into_response()),
    }
}
