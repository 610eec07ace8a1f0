use crate::domain::{models::features::WorkspaceFeatures, ports::FeatureRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresFeatureRepo {
    pool: PgPool,
}

impl PostgresFeatureRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeatureRepository for PostgresFeatureRepo {
    async fn create(&self, features: &WorkspaceFeatures) -> Result<WorkspaceFeatures, AppError> {
        sqlx::query_as::<_, WorkspaceFeatures>(
            "INSERT INTO workspace_features (id, workspace_id, max_clients, custom_domain_enabled, white_label_enabled, api_access_enabled, team_members_enabled, ai_generation_credits, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *"
        )
            .bind(&features.id)
            .bind(&features.workspace_id)
            .bind(features.max_clients)
            .bind(features.custom_domain_enabled)
            .bind(features.white_label_enabled)
            .bind(features.api_access_enabled)
            .bind(features.team_members_enabled)
            .bind(features.ai_generation_credits)
            .bind(features.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_workspace(&self, workspace_id: &str) -> Result<Option<WorkspaceFeatures>, AppError> {
        sqlx::query_as::<_, WorkspaceFeatures>(
            "SELECT * FROM workspace_features WHERE workspace_id = $1",
        )
            .bind(workspace_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
