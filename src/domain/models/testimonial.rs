use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Testimonial {
    pub id: String,
    pub workspace_id: String,
    pub client_name: String,
    pub client_title: String,
    pub testimonial_text: String,
    pub rating: i32,
    pub image_url: Option<String>,
    pub is_featured: bool,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

impl Testimonial {
    pub fn new(workspace_id: String, client_name: String, testimonial_text: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            workspace_id,
            client_name,
            client_title: String::new(),
            testimonial_text,
            rating: 5,
            image_url: None,
            is_featured: false,
            is_approved: false,
            created_at: Utc::now(),
        }
    }
}
