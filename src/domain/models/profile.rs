use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Account profile keyed by the identity provider's user id.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Profile {
    pub id: String,
    pub role: String,
    pub full_name: String,
    pub workspace_id: Option<String>,
    pub onboarding_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(user_id: String, role: String, full_name: String, workspace_id: Option<String>) -> Self {
        let now = Utc::now();
        let onboarding_completed = role == "client";
        Self {
            id: user_id,
            role,
            full_name,
            workspace_id,
            onboarding_completed,
            created_at: now,
            updated_at: now,
        }
    }
}
