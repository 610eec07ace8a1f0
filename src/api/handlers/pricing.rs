use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use sqlx::types::Json as SqlxJson;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateTierRequest, UpdateTierRequest};
use crate::api::extractors::workspace::WorkspaceId;
use crate::domain::models::pricing::PricingTier;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_tiers(
    State(state): State<Arc<AppState>>,
    WorkspaceId(workspace_id): WorkspaceId,
) -> Result<impl IntoResponse, AppError> {
    let tiers = state.pricing_repo.list_by_workspace(&workspace_id).await?;
    Ok(Json(tiers))
}

pub async fn create_tier(
    State(state): State<Arc<AppState>>,
    WorkspaceId(workspace_id): WorkspaceId,
    Json(payload): Json<CreateTierRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.price < 0.0 {
        return Err(AppError::Validation("Price must be non-negative".into()));
    }
    if payload.duration_weeks <= 0 {
        return Err(AppError::Validation("Duration must be a positive number of weeks".into()));
    }

    let mut tier = PricingTier::new(
        workspace_id.clone(),
        payload.name,
        payload.price,
        payload.duration_weeks,
    );
    if let Some(currency) = payload.currency {
        tier.currency = currency;
    }
    if let Some(features) = payload.features {
        tier.features = SqlxJson(features);
    }
    if let Some(featured) = payload.is_featured {
        tier.is_featured = featured;
    }
    if let Some(order_index) = payload.order_index {
        tier.order_index = order_index;
    }

    let created = state.pricing_repo.create(&tier).await?;

    // Featured is a per-workspace singleton.
    if created.is_featured {
        state.pricing_repo.clear_featured_except(&workspace_id, &created.id).await?;
    }

    info!("Pricing tier created: {} for workspace {}", created.id, workspace_id);
    Ok(Json(created))
}

pub async fn update_tier(
    State(state): State<Arc<AppState>>,
    WorkspaceId(workspace_id): WorkspaceId,
    Path((_, tier_id)): Path<(String, String)>,
    Json(payload): Json<UpdateTierRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut tier = state
        .pricing_repo
        .find_by_id(&workspace_id, &tier_id)
        .await?
        .ok_or(AppError::NotFound("Pricing tier not found".into()))?;

    if let Some(name) = payload.name {
        tier.name = name;
    }
    if let Some(price) = payload.price {
        if price < 0.0 {
            return Err(AppError::Validation("Price must be non-negative".into()));
        }
        tier.price = price;
    }
    if let Some(currency) = payload.currency {
        tier.currency = currency;
    }
    if let Some(duration_weeks) = payload.duration_weeks {
        if duration_weeks <= 0 {
            return Err(AppError::Validation("Duration must be a positive number of weeks".into()));
        }
        tier.duration_weeks = duration_weeks;
    }
    if let Some(features) = payload.features {
        tier.features = SqlxJson(features);
    }
    if let Some(featured) = payload.is_featured {
        tier.is_featured = featured;
    }
    if let Some(order_index) = payload.order_index {
        tier.order_index = order_index;
    }
    if let Some(is_active) = payload.is_active {
        tier.is_active = is_active;
    }

    let updated = state.pricing_repo.update(&tier).await?;

    if updated.is_featured {
        state.pricing_repo.clear_featured_except(&workspace_id, &updated.id).await?;
    }

    Ok(Json(updated))
}

pub async fn delete_tier(
    State(state): State<Arc<AppState>>,
    WorkspaceId(workspace_id): WorkspaceId,
    Path((_, tier_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state
        .pricing_repo
        .find_by_id(&workspace_id, &tier_id)
        .await?
        .ok_or(AppError::NotFound("Pricing tier not found".into()))?;

    state.pricing_repo.delete(&workspace_id, &tier_id).await?;
    info!("Pricing tier deleted: {} for workspace {}", tier_id, workspace_id);
    Ok(Json(serde_json::json!({ "deleted": true })))
}
