use serde::Deserialize;

use crate::domain::services::generation::CoachingNiche;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub role: String,
    pub workspace_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryRequest {
    #[serde(default)]
    pub user_id: String,
}

#[derive(Deserialize)]
pub struct UpdateWorkspaceRequest {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub tagline: Option<String>,
    pub about_text: Option<String>,
    pub custom_domain: Option<String>,
}

#[derive(Deserialize)]
pub struct GenerateLandingRequest {
    pub prompt: String,
    pub niche: Option<CoachingNiche>,
    pub tone: Option<String>,
    pub save: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreateTierRequest {
    pub name: String,
    pub price: f64,
    pub currency: Option<String>,
    pub duration_weeks: i32,
    pub features: Option<Vec<String>>,
    pub is_featured: Option<bool>,
    pub order_index: Option<i32>,
}

#[derive(Deserialize)]
pub struct UpdateTierRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub duration_weeks: Option<i32>,
    pub features: Option<Vec<String>>,
    pub is_featured: Option<bool>,
    pub order_index: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct SubdomainCheckQuery {
    pub name: String,
}
