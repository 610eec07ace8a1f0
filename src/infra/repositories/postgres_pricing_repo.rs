use crate::domain::{models::pricing::PricingTier, ports::PricingTierRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresPricingRepo {
    pool: PgPool,
}

impl PostgresPricingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PricingTierRepository for PostgresPricingRepo {
    async fn create(&self, tier: &PricingTier) -> Result<PricingTier, AppError> {
        sqlx::query_as::<_, PricingTier>(
            "INSERT INTO pricing_tiers (id, workspace_id, name, price, currency, duration_weeks, features, is_featured, order_index, stripe_price_id, is_active, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) RETURNING *"
        )
            .bind(&tier.id)
            .bind(&tier.workspace_id)
            .bind(&tier.name)
            .bind(tier.price)
            .bind(&tier.currency)
            .bind(tier.duration_weeks)
            .bind(&tier.features)
            .bind(tier.is_featured)
            .bind(tier.order_index)
            .bind(&tier.stripe_price_id)
            .bind(tier.is_active)
            .bind(tier.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, workspace_id: &str, id: &str) -> Result<Option<PricingTier>, AppError> {
        sqlx::query_as::<_, PricingTier>(
            "SELECT * FROM pricing_tiers WHERE workspace_id = $1 AND id = $2",
        )
            .bind(workspace_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_workspace(&self, workspace_id: &str) -> Result<Vec<PricingTier>, AppError> {
        sqlx::query_as::<_, PricingTier>(
            "SELECT * FROM pricing_tiers WHERE workspace_id = $1 ORDER BY order_index",
        )
            .bind(workspace_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_active(&self, workspace_id: &str) -> Result<Vec<PricingTier>, AppError> {
        sqlx::query_as::<_, PricingTier>(
            "SELECT * FROM pricing_tiers WHERE workspace_id = $1 AND is_active = TRUE ORDER BY order_index",
        )
            .bind(workspace_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, tier: &PricingTier) -> Result<PricingTier, AppError> {
        sqlx::query_as::<_, PricingTier>(
            "UPDATE pricing_tiers SET name=$1, price=$2, currency=$3, duration_weeks=$4, features=$5, is_featured=$6, order_index=$7, stripe_price_id=$8, is_active=$9 WHERE workspace_id=$10 AND id=$11 RETURNING *"
        )
            .bind(&tier.name)
            .bind(tier.price)
            .bind(&tier.currency)
            .bind(tier.duration_weeks)
            .bind(&tier.features)
            .bind(tier.is_featured)
            .bind(tier.order_index)
            .bind(&tier.stripe_price_id)
            .bind(tier.is_active)
            .bind(&tier.workspace_id)
            .bind(&tier.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn clear_featured_except(&self, workspace_id: &str, tier_id: &str) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE pricing_tiers SET is_featured = FALSE WHERE workspace_id = $1 AND id != $2",
        )
            .bind(workspace_id)
            .bind(tier_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn delete(&self, workspace_id: &str, id: &str) -> Result<(), AppError> {
        sqlx::query(
            "DELETE FROM pricing_tiers WHERE workspace_id = $1 AND id = $2",
        )
            .bind(workspace_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
