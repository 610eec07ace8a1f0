use crate::domain::{models::workspace::Workspace, ports::WorkspaceRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

pub struct PostgresWorkspaceRepo {
    pool: PgPool,
}

impl PostgresWorkspaceRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkspaceRepository for PostgresWorkspaceRepo {
    async fn create(&self, workspace: &Workspace) -> Result<Workspace, AppError> {
        sqlx::query_as::<_, Workspace>(
            "INSERT INTO workspaces (id, name, subdomain, custom_domain, owner_id, logo_url, primary_color, secondary_color, tagline, about_text, landing_page_config, onboarding_steps, stripe_account_id, is_active, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16) RETURNING *"
        )
            .bind(&workspace.id)
            .bind(&workspace.name)
            .bind(&workspace.subdomain)
            .bind(&workspace.custom_domain)
            .bind(&workspace.owner_id)
            .bind(&workspace.logo_url)
            .bind(&workspace.primary_color)
            .bind(&workspace.secondary_color)
            .bind(&workspace.tagline)
            .bind(&workspace.about_text)
            .bind(&workspace.landing_page_config)
            .bind(&workspace.onboarding_steps)
            .bind(&workspace.stripe_account_id)
            .bind(workspace.is_active)
            .bind(workspace.created_at)
            .bind(workspace.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Workspace>, AppError> {
        sqlx::query_as::<_, Workspace>(
            "SELECT * FROM workspaces WHERE id = $1",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_active_by_subdomain(&self, subdomain: &str) -> Result<Option<Workspace>, AppError> {
        sqlx::query_as::<_, Workspace>(
            "SELECT * FROM workspaces WHERE subdomain = $1 AND is_active = TRUE",
        )
            .bind(subdomain)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_active_by_custom_domain(&self, domain: &str) -> Result<Option<Workspace>, AppError> {
        sqlx::query_as::<_, Workspace>(
            "SELECT * FROM workspaces WHERE custom_domain = $1 AND is_active = TRUE",
        )
            .bind(domain)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn subdomain_taken(&self, subdomain: &str) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM workspaces WHERE subdomain = $1",
        )
            .bind(subdomain)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(count > 0)
    }

    async fn update(&self, workspace: &Workspace) -> Result<Workspace, AppError> {
        sqlx::query_as::<_, Workspace>(
            "UPDATE workspaces SET name=$1, custom_domain=$2, logo_url=$3, primary_color=$4, secondary_color=$5, tagline=$6, about_text=$7, landing_page_config=$8, onboarding_steps=$9, stripe_account_id=$10, is_active=$11, updated_at=$12 WHERE id=$13 RETURNING *"
        )
            .bind(&workspace.name)
            .bind(&workspace.custom_domain)
            .bind(&workspace.logo_url)
            .bind(&workspace.primary_color)
            .bind(&workspace.secondary_color)
            .bind(&workspace.tagline)
            .bind(&workspace.about_text)
            .bind(&workspace.landing_page_config)
            .bind(&workspace.onboarding_steps)
            .bind(&workspace.stripe_account_id)
            .bind(workspace.is_active)
            .bind(Utc::now())
            .bind(&workspace.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
