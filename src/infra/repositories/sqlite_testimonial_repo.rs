use crate::domain::{models::testimonial::Testimonial, ports::TestimonialRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteTestimonialRepo {
    pool: SqlitePool,
}

impl SqliteTestimonialRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TestimonialRepository for SqliteTestimonialRepo {
    async fn create(&self, testimonial: &Testimonial) -> Result<Testimonial, AppError> {
        sqlx::query_as::<_, Testimonial>(
            "INSERT INTO testimonials (id, workspace_id, client_name, client_title, testimonial_text, rating, image_url, is_featured, is_approved, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *"
        )
            .bind(&testimonial.id)
            .bind(&testimonial.workspace_id)
            .bind(&testimonial.client_name)
            .bind(&testimonial.client_title)
            .bind(&testimonial.testimonial_text)
            .bind(testimonial.rating)
            .bind(&testimonial.image_url)
            .bind(testimonial.is_featured)
            .bind(testimonial.is_approved)
            .bind(testimonial.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_workspace(&self, workspace_id: &str) -> Result<Vec<Testimonial>, AppError> {
        sqlx::query_as::<_, Testimonial>(
            "SELECT * FROM testimonials WHERE workspace_id = ? ORDER BY created_at DESC",
        )
            .bind(workspace_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_approved(&self, workspace_id: &str) -> Result<Vec<Testimonial>, AppError> {
        sqlx::query_as::<_, Testimonial>(
            "SELECT * FROM testimonials WHERE workspace_id = ? AND is_approved = 1 ORDER BY created_at DESC",
        )
            .bind(workspace_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
