use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct WorkspaceFeatures {
    pub id: String,
    pub workspace_id: String,
    pub max_clients: i32,
    pub custom_domain_enabled: bool,
    pub white_label_enabled: bool,
    pub api_access_enabled: bool,
    pub team_members_enabled: bool,
    pub ai_generation_credits: i32,
    pub created_at: DateTime<Utc>,
}

impl WorkspaceFeatures {
    /// Provisioning default: starter limits, all premium flags off.
    pub fn starter(workspace_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            workspace_id,
            max_clients: 10,
            custom_domain_enabled: false,
            white_label_enabled: false,
            api_access_enabled: false,
            team_members_enabled: false,
            ai_generation_credits: 10,
            created_at: Utc::now(),
        }
    }
}
