use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct PricingTier {
    pub id: String,
    pub workspace_id: String,
    pub name: String,
    pub price: f64,
    pub currency: String,
    pub duration_weeks: i32,
    pub features: Json<Vec<String>>,
    pub is_featured: bool,
    pub order_index: i32,
    pub stripe_price_id: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl PricingTier {
    pub fn new(workspace_id: String, name: String, price: f64, duration_weeks: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            workspace_id,
            name,
            price,
            currency: "usd".to_string(),
            duration_weeks,
            features: Json(Vec::new()),
            is_featured: false,
            order_index: 0,
            stripe_price_id: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
