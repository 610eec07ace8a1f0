use crate::domain::{models::generation::LandingPagePrompt, ports::PromptRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresPromptRepo {
    pool: PgPool,
}

impl PostgresPromptRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PromptRepository for PostgresPromptRepo {
    async fn create(&self, prompt: &LandingPagePrompt) -> Result<LandingPagePrompt, AppError> {
        sqlx::query_as::<_, LandingPagePrompt>(
            "INSERT INTO landing_page_prompts (id, workspace_id, prompt_text, generated_config, is_active, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *"
        )
            .bind(&prompt.id)
            .bind(&prompt.workspace_id)
            .bind(&prompt.prompt_text)
            .bind(&prompt.generated_config)
            .bind(prompt.is_active)
            .bind(prompt.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn deactivate_for_workspace(&self, workspace_id: &str) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE landing_page_prompts SET is_active = FALSE WHERE workspace_id = $1",
        )
            .bind(workspace_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn find_active(&self, workspace_id: &str) -> Result<Option<LandingPagePrompt>, AppError> {
        sqlx::query_as::<_, LandingPagePrompt>(
            "SELECT * FROM landing_page_prompts WHERE workspace_id = $1 AND is_active = TRUE ORDER BY created_at DESC LIMIT 1",
        )
            .bind(workspace_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_workspace(&self, workspace_id: &str) -> Result<Vec<LandingPagePrompt>, AppError> {
        sqlx::query_as::<_, LandingPagePrompt>(
            "SELECT * FROM landing_page_prompts WHERE workspace_id = $1 ORDER BY created_at DESC",
        )
            .bind(workspace_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
