use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{generation, health, landing, pricing, profile, signup, workspace};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Provisioning
        .route("/api/v1/auth/signup", post(signup::signup))
        .route("/api/v1/admin/recover-profile", post(signup::recover_profile))

        // Public landing (resolved from the Host header)
        .route("/api/v1/landing", get(landing::get_landing_page))
        .route("/api/v1/subdomains/check", get(landing::check_subdomain))

        // Profiles
        .route("/api/v1/profiles/{user_id}", get(profile::get_profile))

        // Workspace admin
        .route("/api/v1/workspaces/{workspace_id}", get(workspace::get_workspace).put(workspace::update_workspace))
        .route("/api/v1/workspaces/{workspace_id}/onboarding/{step}", post(workspace::complete_onboarding_step))
        .route("/api/v1/workspaces/{workspace_id}/subscription", get(workspace::get_subscription))
        .route("/api/v1/workspaces/{workspace_id}/features", get(workspace::get_features))
        .route("/api/v1/workspaces/{workspace_id}/testimonials", get(workspace::list_testimonials))

        // Landing page builder & generation
        .route("/api/v1/workspaces/{workspace_id}/landing-config", put(generation::update_landing_config))
        .route("/api/v1/workspaces/{workspace_id}/landing/generate", post(generation::generate_landing_page))
        .route("/api/v1/workspaces/{workspace_id}/landing/prompts", get(generation::list_prompts))

        // Offers
        .route("/api/v1/workspaces/{workspace_id}/tiers", get(pricing::list_tiers).post(pricing::create_tier))
        .route("/api/v1/workspaces/{workspace_id}/tiers/{tier_id}", put(pricing::update_tier).delete(pricing::delete_tier))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        workspace_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
