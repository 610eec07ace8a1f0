use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::UpdateWorkspaceRequest;
use crate::api::extractors::workspace::WorkspaceId;
use crate::error::AppError;
use crate::state::AppState;

pub async fn get_workspace(
    State(state): State<Arc<AppState>>,
    WorkspaceId(workspace_id): WorkspaceId,
) -> Result<impl IntoResponse, AppError> {
    let workspace = state
        .workspace_repo
        .find_by_id(&workspace_id)
        .await?
        .ok_or(AppError::NotFound("Workspace not found".into()))?;
    Ok(Json(workspace))
}

pub async fn update_workspace(
    State(state): State<Arc<AppState>>,
    WorkspaceId(workspace_id): WorkspaceId,
    Json(payload): Json<UpdateWorkspaceRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut workspace = state
        .workspace_repo
        .find_by_id(&workspace_id)
        .await?
        .ok_or(AppError::NotFound("Workspace not found".into()))?;

    if let Some(name) = payload.name {
        workspace.name = name;
    }
    if let Some(logo) = payload.logo_url {
        workspace.logo_url = Some(logo);
    }
    if let Some(primary) = payload.primary_color {
        workspace.primary_color = primary;
    }
    if let Some(secondary) = payload.secondary_color {
        workspace.secondary_color = secondary;
    }
    if let Some(tagline) = payload.tagline {
        workspace.tagline = tagline;
    }
    if let Some(about) = payload.about_text {
        workspace.about_text = about;
    }
    if let Some(domain) = payload.custom_domain {
        workspace.custom_domain = if domain.is_empty() {
            None
        } else {
            Some(domain.to_ascii_lowercase())
        };
    }

    let updated = state.workspace_repo.update(&workspace).await?;
    info!("Workspace updated: {}", workspace_id);
    Ok(Json(updated))
}

/// Marks an onboarding wizard step complete. Steps only ever move to true;
/// repeating a step is a no-op.
pub async fn complete_onboarding_step(
    State(state): State<Arc<AppState>>,
    WorkspaceId(workspace_id): WorkspaceId,
    Path((_, step)): Path<(String, u8)>,
) -> Result<impl IntoResponse, AppError> {
    let mut workspace = state
        .workspace_repo
        .find_by_id(&workspace_id)
        .await?
        .ok_or(AppError::NotFound("Workspace not found".into()))?;

    if !workspace.onboarding_steps.0.mark_complete(step) {
        return Err(AppError::Validation(format!("Unknown onboarding step: {}", step)));
    }

    let updated = state.workspace_repo.update(&workspace).await?;
    info!("Onboarding step {} completed for workspace {}", step, workspace_id);
    Ok(Json(updated))
}

pub async fn get_subscription(
    State(state): State<Arc<AppState>>,
    WorkspaceId(workspace_id): WorkspaceId,
) -> Result<impl IntoResponse, AppError> {
    let subscription = state
        .subscription_repo
        .find_by_workspace(&workspace_id)
        .await?
        .ok_or(AppError::NotFound("Subscription not found".into()))?;
    Ok(Json(subscription))
}

pub async fn get_features(
    State(state): State<Arc<AppState>>,
    WorkspaceId(workspace_id): WorkspaceId,
) -> Result<impl IntoResponse, AppError> {
    let features = state
        .feature_repo
        .find_by_workspace(&workspace_id)
        .await?
        .ok_or(AppError::NotFound("Features not found".into()))?;
    Ok(Json(features))
}

pub async fn list_testimonials(
    State(state): State<Arc<AppState>>,
    WorkspaceId(workspace_id): WorkspaceId,
) -> Result<impl IntoResponse, AppError> {
    let testimonials = state.testimonial_repo.list_by_workspace(&workspace_id).await?;
    Ok(Json(testimonials))
}
