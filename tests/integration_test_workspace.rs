mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use blueprint_backend::domain::models::landing::LandingPageConfig;
use blueprint_backend::domain::models::workspace::Workspace;
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

async fn seed_workspace(app: &TestApp, subdomain: &str) -> Workspace {
    let workspace = Workspace::new("Brand Co".into(), subdomain.into(), None);
    app.state.workspace_repo.create(&workspace).await.unwrap()
}

#[tokio::test]
async fn test_branding_update() {
    let app = TestApp::new().await;
    let workspace = seed_workspace(&app, "brand-co").await;

    let response = app.router.clone().oneshot(
        Request::builder().method("PUT")
            .uri(format!("/api/v1/workspaces/{}", workspace.id))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "name": "Brand Co Updated",
                "logo_url": "https://cdn.example.com/logo.png",
                "primary_color": "#FF0000",
                "tagline": "Be bold"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    assert_eq!(body["name"], "Brand Co Updated");
    assert_eq!(body["logo_url"], "https://cdn.example.com/logo.png");
    assert_eq!(body["primary_color"], "#FF0000");

    // The tagline now feeds the landing page fallback chain.
    let landing = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/landing")
            .header(header::HOST, "brand-co.blueprintos.com")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let landing_body = parse_body(landing).await;
    assert_eq!(landing_body["workspace"]["tagline"], "Be bold");
}

#[tokio::test]
async fn test_custom_domain_assignment_enables_resolution() {
    let app = TestApp::new().await;
    let workspace = seed_workspace(&app, "domain-co").await;

    let response = app.router.clone().oneshot(
        Request::builder().method("PUT")
            .uri(format!("/api/v1/workspaces/{}", workspace.id))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({ "custom_domain": "Coaching.Example.COM" }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    // Stored lower-cased so hostname comparison is exact.
    assert_eq!(body["custom_domain"], "coaching.example.com");

    let landing = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/landing")
            .header(header::HOST, "coaching.example.com")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let landing_body = parse_body(landing).await;
    assert_eq!(landing_body["workspace"]["id"], Value::String(workspace.id));
}

#[tokio::test]
async fn test_duplicate_subdomain_is_a_conflict() {
    let app = TestApp::new().await;
    seed_workspace(&app, "taken").await;

    let duplicate = Workspace::new("Copycat".into(), "taken".into(), None);
    let err = app.state.workspace_repo.create(&duplicate).await.unwrap_err();
    assert!(err.is_unique_violation());
}

#[tokio::test]
async fn test_onboarding_steps_are_monotonic() {
    let app = TestApp::new().await;
    let workspace = seed_workspace(&app, "steps-co").await;

    for step in [1u8, 3, 4] {
        let response = app.router.clone().oneshot(
            Request::builder().method("POST")
                .uri(format!("/api/v1/workspaces/{}/onboarding/{}", workspace.id, step))
                .body(Body::empty()).unwrap()
        ).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let body = parse_body(app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/workspaces/{}", workspace.id))
            .body(Body::empty()).unwrap()
    ).await.unwrap()).await;

    assert_eq!(body["onboarding_steps"]["step1"], true);
    assert_eq!(body["onboarding_steps"]["step2"], false);
    assert_eq!(body["onboarding_steps"]["step3"], true);
    assert_eq!(body["onboarding_steps"]["step4"], true);

    // Re-completing a step never resets anything.
    let response = app.router.clone().oneshot(
        Request::builder().method("POST")
            .uri(format!("/api/v1/workspaces/{}/onboarding/3", workspace.id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    assert_eq!(body["onboarding_steps"]["step3"], true);

    // Out-of-range steps are rejected.
    let response = app.router.clone().oneshot(
        Request::builder().method("POST")
            .uri(format!("/api/v1/workspaces/{}/onboarding/7", workspace.id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_landing_config_replace() {
    let app = TestApp::new().await;
    let workspace = seed_workspace(&app, "builder-co").await;

    let config = json!({
        "hero": { "headline": "Hand-written" },
        "sections_enabled": ["hero", "cta"]
    });

    let response = app.router.clone().oneshot(
        Request::builder().method("PUT")
            .uri(format!("/api/v1/workspaces/{}/landing-config", workspace.id))
            .header("Content-Type", "application/json")
            .body(Body::from(config.to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let stored = app.state.workspace_repo.find_by_id(&workspace.id).await.unwrap().unwrap();
    let stored_config: &LandingPageConfig = &stored.landing_page_config.0;
    assert_eq!(stored_config.hero.as_ref().unwrap().headline.as_deref(), Some("Hand-written"));
    // The replace is wholesale: untouched sections are simply absent.
    assert!(stored_config.about.is_none());

    let landing = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/landing")
            .header(header::HOST, "builder-co.blueprintos.com")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(landing).await;
    let types: Vec<&str> = body["sections"].as_array().unwrap()
        .iter().map(|s| s["type"].as_str().unwrap()).collect();
    assert_eq!(types, vec!["hero", "cta"]);
}

#[tokio::test]
async fn test_subdomain_check_endpoint() {
    let app = TestApp::new().await;
    seed_workspace(&app, "acme-coaching").await;

    let body = parse_body(app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri("/api/v1/subdomains/check?name=Acme%20Coaching")
            .body(Body::empty()).unwrap()
    ).await.unwrap()).await;
    assert_eq!(body["subdomain"], "acme-coaching");
    assert_eq!(body["available"], false);

    let body = parse_body(app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri("/api/v1/subdomains/check?name=Fresh%20Name")
            .body(Body::empty()).unwrap()
    ).await.unwrap()).await;
    assert_eq!(body["subdomain"], "fresh-name");
    assert_eq!(body["available"], true);
}

#[tokio::test]
async fn test_subscription_and_features_reads() {
    let app = TestApp::new().await;

    // Provision through the real signup flow so the rows exist.
    let response = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/auth/signup")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "email": "coach@example.com",
                "password": "password123",
                "fullName": "Casey Coach",
                "role": "coach",
                "workspaceName": "Read Co"
            }).to_string())).unwrap()
    ).await.unwrap();
    let signup_body = parse_body(response).await;
    let workspace_id = signup_body["workspaceId"].as_str().unwrap();

    let subscription = parse_body(app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/workspaces/{}/subscription", workspace_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap()).await;
    assert_eq!(subscription["plan_tier"], "starter");
    assert_eq!(subscription["status"], "trialing");

    let features = parse_body(app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/workspaces/{}/features", workspace_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap()).await;
    assert_eq!(features["max_clients"], 10);
    assert_eq!(features["ai_generation_credits"], 10);
}
