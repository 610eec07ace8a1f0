mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use blueprint_backend::domain::ports::IdentityProvider;
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    if bytes.is_empty() {
        panic!("Response body is empty. Status: {}", status);
    }
    match serde_json::from_slice(&bytes) {
        Ok(v) => v,
        Err(e) => panic!("Failed to parse JSON: {:?}. Status: {}. Body: {:?}", e, status, String::from_utf8_lossy(&bytes))
    }
}

async fn post_json(app: &TestApp, uri: &str, payload: Value) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("POST").uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap()
}

fn coach_payload(email: &str) -> Value {
    json!({
        "email": email,
        "password": "password123",
        "fullName": "Casey Coach",
        "role": "coach",
        "workspaceName": "Acme Coaching"
    })
}

#[tokio::test]
async fn test_coach_signup_provisions_full_bundle() {
    let app = TestApp::new().await;

    let response = post_json(&app, "/api/v1/auth/signup", coach_payload("coach@example.com")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;

    assert_eq!(body["success"], true);
    let user_id = body["userId"].as_str().unwrap().to_string();
    let workspace_id = body["workspaceId"].as_str().unwrap().to_string();
    assert_eq!(body["profileId"], Value::String(user_id.clone()));

    // Workspace carries the suffixed slug and a full default config.
    let workspace = app.state.workspace_repo.find_by_id(&workspace_id).await.unwrap().unwrap();
    assert!(workspace.subdomain.starts_with("acme-coaching-"));
    let suffix = workspace.subdomain.rsplit('-').next().unwrap();
    assert_eq!(suffix.len(), 4);
    assert!(workspace.is_active);
    assert!(workspace.landing_page_config.0.hero.is_some());

    // 14-day starter trial.
    let subscription = app.state.subscription_repo.find_by_workspace(&workspace_id).await.unwrap().unwrap();
    assert_eq!(subscription.plan_tier, "starter");
    assert_eq!(subscription.status, "trialing");
    let trial_days = (subscription.trial_ends_at.unwrap() - subscription.created_at).num_days();
    assert!((13..=14).contains(&trial_days));

    // Starter feature limits, premium flags off.
    let features = app.state.feature_repo.find_by_workspace(&workspace_id).await.unwrap().unwrap();
    assert_eq!(features.max_clients, 10);
    assert_eq!(features.ai_generation_credits, 10);
    assert!(!features.custom_domain_enabled);
    assert!(!features.white_label_enabled);
    assert!(!features.api_access_enabled);
    assert!(!features.team_members_enabled);

    // Profile is immediately loadable.
    let profile_res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/profiles/{}", user_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(profile_res.status(), StatusCode::OK);
    let profile = parse_body(profile_res).await;
    assert_eq!(profile["role"], "coach");
    assert_eq!(profile["workspace_id"], Value::String(workspace_id));
    assert_eq!(profile["onboarding_completed"], false);
}

#[tokio::test]
async fn test_client_signup_skips_workspace() {
    let app = TestApp::new().await;

    let response = post_json(&app, "/api/v1/auth/signup", json!({
        "email": "client@example.com",
        "password": "password123",
        "fullName": "Cleo Client",
        "role": "client"
    })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;

    assert_eq!(body["success"], true);
    assert!(body.get("workspaceId").is_none() || body["workspaceId"].is_null());

    let user_id = body["userId"].as_str().unwrap();
    let profile = app.state.profile_repo.find_by_id(user_id).await.unwrap().unwrap();
    assert!(profile.workspace_id.is_none());
    assert!(profile.onboarding_completed);
}

#[tokio::test]
async fn test_missing_fields_rejected() {
    let app = TestApp::new().await;

    let response = post_json(&app, "/api/v1/auth/signup", json!({
        "email": "",
        "password": "password123",
        "fullName": "X",
        "role": "coach",
        "workspaceName": "W"
    })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["errorCode"], "MISSING_FIELDS");

    // No identity was created.
    assert!(app.identity.users.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_coach_without_workspace_name_rejected() {
    let app = TestApp::new().await;

    let response = post_json(&app, "/api/v1/auth/signup", json!({
        "email": "coach@example.com",
        "password": "password123",
        "fullName": "Casey",
        "role": "coach"
    })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(response).await;
    assert_eq!(body["errorCode"], "MISSING_WORKSPACE_NAME");
    assert_eq!(body["step"], "validation");
}

#[tokio::test]
async fn test_duplicate_email_fails_at_identity_creation() {
    let app = TestApp::new().await;

    let first = post_json(&app, "/api/v1/auth/signup", coach_payload("dup@example.com")).await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = post_json(&app, "/api/v1/auth/signup", coach_payload("dup@example.com")).await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(second).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["errorCode"], "AUTH_CREATION_FAILED");
    assert_eq!(body["step"], "auth_user");
}

#[tokio::test]
async fn test_profile_retry_exhaustion_is_recoverable() {
    let app = TestApp::new().await;

    let response = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/profiles/no-such-user")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = parse_body(response).await;
    assert_eq!(body["errorCode"], "PROFILE_NOT_FOUND");
    assert_eq!(body["recoverable"], true);
    assert_eq!(body["attempts"], 5);
}

#[tokio::test]
async fn test_recovery_is_idempotent() {
    let app = TestApp::new().await;

    let response = post_json(&app, "/api/v1/auth/signup", coach_payload("whole@example.com")).await;
    let body = parse_body(response).await;
    let user_id = body["userId"].as_str().unwrap().to_string();

    let recovery = post_json(&app, "/api/v1/admin/recover-profile", json!({ "userId": user_id })).await;
    assert_eq!(recovery.status(), StatusCode::OK);
    let body = parse_body(recovery).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["profileCreated"], false);
    assert_eq!(body["message"], "Profile already exists");
}

#[tokio::test]
async fn test_recovery_rebuilds_missing_profile() {
    let app = TestApp::new().await;

    // Identity exists but no profile rows were ever written.
    let user = app.identity
        .create_user("lost@example.com", "password123", "Lost Coach", "coach")
        .await
        .unwrap();

    let recovery = post_json(&app, "/api/v1/admin/recover-profile", json!({ "userId": user.id })).await;
    assert_eq!(recovery.status(), StatusCode::OK);
    let body = parse_body(recovery).await;
    assert_eq!(body["profileCreated"], true);
    assert_eq!(body["workspaceCreated"], true);

    let workspace_id = body["workspaceId"].as_str().unwrap();
    let workspace = app.state.workspace_repo.find_by_id(workspace_id).await.unwrap().unwrap();
    assert_eq!(workspace.name, "Lost Coach's Workspace");
}

#[tokio::test]
async fn test_recovery_unknown_user() {
    let app = TestApp::new().await;

    let recovery = post_json(&app, "/api/v1/admin/recover-profile", json!({ "userId": "ghost" })).await;
    assert_eq!(recovery.status(), StatusCode::NOT_FOUND);
    let body = parse_body(recovery).await;
    assert_eq!(body["error"], "USER_NOT_FOUND");
}

#[tokio::test]
async fn test_recovery_refused_in_production() {
    let app = TestApp::with_options(common::TestAppOptions {
        environment: "production".to_string(),
        ..Default::default()
    }).await;

    let recovery = post_json(&app, "/api/v1/admin/recover-profile", json!({ "userId": "anything" })).await;
    assert_eq!(recovery.status(), StatusCode::FORBIDDEN);
    let body = parse_body(recovery).await;
    assert_eq!(body["error"], "PRODUCTION_DISABLED");
}
