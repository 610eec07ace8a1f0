use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::models::landing::LandingPageConfig;

/// Audit row for a landing page generation. At most one row per workspace
/// is active; saving a new generation deactivates prior rows, never
/// deletes them.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct LandingPagePrompt {
    pub id: String,
    pub workspace_id: String,
    pub prompt_text: String,
    pub generated_config: Json<LandingPageConfig>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl LandingPagePrompt {
    pub fn new(workspace_id: String, prompt_text: String, config: LandingPageConfig) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            workspace_id,
            prompt_text,
            generated_config: Json(config),
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
