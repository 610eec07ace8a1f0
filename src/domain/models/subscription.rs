use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const TRIAL_DAYS: i64 = 14;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct WorkspaceSubscription {
    pub id: String,
    pub workspace_id: String,
    pub plan_tier: String,
    pub status: String,
    pub billing_cycle: String,
    pub trial_ends_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkspaceSubscription {
    /// Provisioning default: starter plan in a 14-day trial.
    pub fn starter_trial(workspace_id: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            workspace_id,
            plan_tier: "starter".to_string(),
            status: "trialing".to_string(),
            billing_cycle: "monthly".to_string(),
            trial_ends_at: Some(now + Duration::days(TRIAL_DAYS)),
            created_at: now,
            updated_at: now,
        }
    }
}
