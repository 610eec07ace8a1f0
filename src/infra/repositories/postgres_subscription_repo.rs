use crate::domain::{models::subscription::WorkspaceSubscription, ports::SubscriptionRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresSubscriptionRepo {
    pool: PgPool,
}

impl PostgresSubscriptionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepo {
    async fn create(&self, subscription: &WorkspaceSubscription) -> Result<WorkspaceSubscription, AppError> {
        sqlx::query_as::<_, WorkspaceSubscription>(
            "INSERT INTO workspace_subscriptions (id, workspace_id, plan_tier, status, billing_cycle, trial_ends_at, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *"
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
            "SELECT * FROM workspace_subscriptions WHERE workspace_id = $1 ORDER BY created_at DESC",
        )
            .bind(workspace_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
