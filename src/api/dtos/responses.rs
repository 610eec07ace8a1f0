use serde::Serialize;

use crate::domain::models::workspace::Workspace;
use crate::domain::services::renderer::{RenderedPage, RenderedSection, ResolvedTheme};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_created: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_created: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct SubdomainCheckResponse {
    pub subdomain: String,
    pub available: bool,
}

/// Public summary of a resolved workspace; branding only, no owner or
/// billing fields.
#[derive(Serialize)]
pub struct WorkspaceSummary {
    pub id: String,
    pub name: String,
    pub subdomain: String,
    pub logo_url: Option<String>,
    pub primary_color: String,
    pub secondary_color: String,
    pub tagline: String,
    pub about_text: String,
}

impl From<&Workspace> for WorkspaceSummary {
    fn from(workspace: &Workspace) -> Self {
        Self {
            id: workspace.id.clone(),
            name: workspace.name.clone(),
            subdomain: workspace.subdomain.clone(),
            logo_url: workspace.logo_url.clone(),
            primary_color: workspace.primary_color.clone(),
            secondary_color: workspace.secondary_color.clone(),
            tagline: workspace.tagline.clone(),
            about_text: workspace.about_text.clone(),
        }
    }
}

/// Body of the public landing endpoint. A resolution miss is a valid
/// outcome: `workspace` is null and the caller falls back to the generic
/// experience.
#[derive(Serialize)]
pub struct LandingResponse {
    pub workspace: Option<WorkspaceSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ResolvedTheme>,
    pub sections: Vec<RenderedSection>,
}

impl LandingResponse {
    pub fn generic() -> Self {
        Self { workspace: None, theme: None, sections: Vec::new() }
    }

    pub fn for_workspace(workspace: &Workspace, page: RenderedPage) -> Self {
        Self {
            workspace: Some(WorkspaceSummary::from(workspace)),
            theme: Some(page.theme),
            sections: page.sections,
        }
    }
}
