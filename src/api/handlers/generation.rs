use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use sqlx::types::Json as SqlxJson;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::GenerateLandingRequest;
use crate::api::extractors::workspace::WorkspaceId;
use crate::domain::models::generation::LandingPagePrompt;
use crate::domain::models::landing::LandingPageConfig;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct GenerateLandingResponse {
    pub config: LandingPageConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_id: Option<String>,
}

/// Generates a landing page configuration from a business description.
/// Generation itself never fails; with `save` set the result is persisted
/// as the workspace's config along with an audit row (prior audit rows are
/// deactivated, never deleted).
pub async fn generate_landing_page(
    State(state): State<Arc<AppState>>,
    WorkspaceId(workspace_id): WorkspaceId,
    Json(payload): Json<GenerateLandingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let config = state
        .generator
        .generate(&payload.prompt, payload.niche, payload.tone.as_deref())
        .await;

    if !payload.save.unwrap_or(false) {
        return Ok(Json(GenerateLandingResponse { config, prompt_id: None }));
    }

    let mut workspace = state
        .workspace_repo
        .find_by_id(&workspace_id)
        .await?
        .ok_or(AppError::NotFound("Workspace not found".into()))?;

    state.prompt_repo.deactivate_for_workspace(&workspace_id).await?;

    let prompt_row = LandingPagePrompt::new(
        workspace_id.clone(),
        payload.prompt.clone(),
        config.clone(),
    );
    let saved = state.prompt_repo.create(&prompt_row).await?;

    workspace.landing_page_config = SqlxJson(config.clone());
    state.workspace_repo.update(&workspace).await?;

    info!("Generated landing page saved for workspace {}", workspace_id);
    Ok(Json(GenerateLandingResponse { config, prompt_id: Some(saved.id) }))
}

pub async fn list_prompts(
    State(state): State<Arc<AppState>>,
    WorkspaceId(workspace_id): WorkspaceId,
) -> Result<impl IntoResponse, AppError> {
    let prompts = state.prompt_repo.list_by_workspace(&workspace_id).await?;
    Ok(Json(prompts))
}

/// Replaces the stored config wholesale (landing page builder save).
pub async fn update_landing_config(
    State(state): State<Arc<AppState>>,
    WorkspaceId(workspace_id): WorkspaceId,
    Json(config): Json<LandingPageConfig>,
) -> Result<impl IntoResponse, AppError> {
    let mut workspace = state
        .workspace_repo
        .find_by_id(&workspace_id)
        .await?
        .ok_or(AppError::NotFound("Workspace not found".into()))?;

    workspace.landing_page_config = SqlxJson(config);
    let updated = state.workspace_repo.update(&workspace).await?;
    info!("Landing page config updated for workspace {}", workspace_id);
    Ok(Json(updated))
}
