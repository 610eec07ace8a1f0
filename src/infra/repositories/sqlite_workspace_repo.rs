use crate::domain::{models::workspace::Workspace, ports::WorkspaceRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct SqliteWorkspaceRepo {
    pool: SqlitePool,
}

impl SqliteWorkspaceRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkspaceRepository for SqliteWorkspaceRepo {
    async fn create(&self, workspace: &Workspace) -> Result<Workspace, AppError> {
        sqlx::query_as::<_, Workspace>(
            "INSERT INTO workspaces (id, name, subdomain, custom_domain, owner_id, logo_url, primary_color, secondary_color, tagline, about_text, landing_page_config, onboarding_steps, stripe_account_id, is_active, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *"
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
            "SELECT * FROM workspaces WHERE id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_active_by_subdomain(&self, subdomain: &str) -> Result<Option<Workspace>, AppError> {
        sqlx::query_as::<_, Workspace>(
            "SELECT * FROM workspaces WHERE subdomain = ? AND is_active = 1",
        )
            .bind(subdomain)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_active_by_custom_domain(&self, domain: &str) -> Result<Option<Workspace>, AppError> {
        sqlx::query_as::<_, Workspace>(
            "SELECT * FROM workspaces WHERE custom_domain = ? AND is_active = 1",
        )
            .bind(domain)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn subdomain_taken(&self, subdomain: &str) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM workspaces WHERE subdomain = ?",
        )
            .bind(subdomain)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(count > 0)
    }

    async fn update(&self, workspace: &Workspace) -> Result<Workspace, AppError> {
        sqlx::query_as::<_, Workspace>(
            "UPDATE workspaces SET name=?, custom_domain=?, logo_url=?, primary_color=?, secondary_color=?, tagline=?, about_text=?, landing_page_config=?, onboarding_steps=?, stripe_account_id=?, is_active=?, updated_at=? WHERE id=? RETURNING *"
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
