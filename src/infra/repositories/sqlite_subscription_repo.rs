use crate::domain::{models::subscription::WorkspaceSubscription, ports::SubscriptionRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteSubscriptionRepo {
    pool: SqlitePool,
}

impl SqliteSubscriptionRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for SqliteSubscriptionRepo {
    async fn create(&self, subscription: &WorkspaceSubscription) -> Result<WorkspaceSubscription, AppError> {
        sqlx::query_as::<_, WorkspaceSubscription>(
            "INSERT INTO workspace_subscriptions (id, workspace_id, plan_tier, status, billing_cycle, trial_ends_at, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING *"
        )
            .bind(&subscription.id)
            .bind(&subscription.workspace_id)
            .bind(&subscription.plan_tier)
            .bind(&subscription.status)
            .bind(&subscription.billing_cycle)
            .bind(subscription.trial_ends_at)
            .bind(subscription.created_at)
            .bind(subscription.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_workspace(&self, workspace_id: &str) -> Result<Option<WorkspaceSubscription>, AppError> {
        sqlx::query_as::<_, WorkspaceSubscription>(
            "SELECT * FROM workspace_subscriptions WHERE workspace_id = ? ORDER BY created_at DESC",
        )
            .bind(workspace_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
