use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::api::dtos::requests::SubdomainCheckQuery;
use crate::api::dtos::responses::{LandingResponse, SubdomainCheckResponse};
use crate::api::extractors::workspace::ResolvedWorkspace;
use crate::domain::services::{renderer, subdomain};
use crate::error::AppError;
use crate::state::AppState;

/// Public landing page for the hostname the request came in on. A
/// resolution miss returns the generic experience, never an error.
pub async fn get_landing_page(
    State(state): State<Arc<AppState>>,
    ResolvedWorkspace(workspace): ResolvedWorkspace,
) -> Result<impl IntoResponse, AppError> {
    let Some(workspace) = workspace else {
        return Ok(Json(LandingResponse::generic()));
    };

    let tiers = state.pricing_repo.list_active(&workspace.id).await?;
    let testimonials = state.testimonial_repo.list_approved(&workspace.id).await?;

    let page = renderer::render(&workspace, &tiers, &testimonials);
    Ok(Json(LandingResponse::for_workspace(&workspace, page)))
}

pub async fn check_subdomain(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SubdomainCheckQuery>,
) -> Result<impl IntoResponse, AppError> {
    let slug = subdomain::slugify(&query.name);
    let available = !slug.is_empty()
        && subdomain::is_available(state.workspace_repo.as_ref(), &slug).await?;

    Ok(Json(SubdomainCheckResponse { subdomain: slug, available }))
}
