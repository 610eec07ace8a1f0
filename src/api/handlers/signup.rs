use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::warn;

use crate::api::dtos::requests::{RecoveryRequest, SignupRequest};
use crate::api::dtos::responses::{RecoveryResponse, SignupResponse};
use crate::domain::services::provisioning::{RecoveryError, SignupParams};
use crate::state::AppState;

pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SignupRequest>,
) -> impl IntoResponse {
    let result = state
        .provisioning
        .signup(SignupParams {
            email: payload.email,
            password: payload.password,
            full_name: payload.full_name,
            role: payload.role,
            workspace_name: payload.workspace_name,
        })
        .await;

    match result {
        Ok(account) => (
            StatusCode::OK,
            Json(SignupResponse {
                success: true,
                user_id: Some(account.user_id),
                workspace_id: account.workspace_id,
                profile_id: Some(account.profile_id),
                error: None,
                error_code: None,
                step: None,
            }),
        ),
        Err(failure) => {
            let status = match failure.error_code {
                "MISSING_FIELDS" | "MISSING_WORKSPACE_NAME" | "AUTH_CREATION_FAILED" => {
                    StatusCode::BAD_REQUEST
                }
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (
                status,
                Json(SignupResponse {
                    success: false,
                    user_id: None,
                    workspace_id: None,
                    profile_id: None,
                    error: Some(failure.error),
                    error_code: Some(failure.error_code.to_string()),
                    step: failure.step.map(str::to_string),
                }),
            )
        }
    }
}

/// Development/staging recovery for identities that lost their profile rows
/// to a partial signup. Refused outright in production.
pub async fn recover_profile(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RecoveryRequest>,
) -> impl IntoResponse {
    if state.config.is_production() {
        warn!("Profile recovery rejected: production environment");
        return (
            StatusCode::FORBIDDEN,
            Json(RecoveryResponse {
                success: false,
                message: "This endpoint is only available in development/staging".to_string(),
                profile_created: None,
                workspace_created: None,
                profile_id: None,
                workspace_id: None,
                error: Some("PRODUCTION_DISABLED".to_string()),
            }),
        );
    }

    if payload.user_id.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(RecoveryResponse {
                success: false,
                message: "Missing userId".to_string(),
                profile_created: None,
                workspace_created: None,
                profile_id: None,
                workspace_id: None,
                error: Some("MISSING_USER_ID".to_string()),
            }),
        );
    }

    match state.provisioning.recover(&payload.user_id).await {
        Ok(outcome) => {
            let message = if outcome.profile_created {
                "Profile created successfully"
            } else {
                "Profile already exists"
            };
            (
                StatusCode::OK,
                Json(RecoveryResponse {
                    success: true,
                    message: message.to_string(),
                    profile_created: Some(outcome.profile_created),
                    workspace_created: Some(outcome.workspace_created),
                    profile_id: Some(outcome.profile_id),
                    workspace_id: outcome.workspace_id,
                    error: None,
                }),
            )
        }
        Err(RecoveryError::UserNotFound) => (
            StatusCode::NOT_FOUND,
            Json(RecoveryResponse {
                success: false,
                message: "Auth user not found".to_string(),
                profile_created: None,
                workspace_created: None,
                profile_id: None,
                workspace_id: None,
                error: Some("USER_NOT_FOUND".to_string()),
            }),
        ),
        Err(RecoveryError::Internal(e)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(RecoveryResponse {
                success: false,
                message: e.to_string(),
                profile_created: None,
                workspace_created: None,
                profile_id: None,
                workspace_id: None,
                error: Some("INTERNAL_ERROR".to_string()),
            }),
        ),
    }
}
