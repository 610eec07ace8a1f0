pub mod postgres_feature_repo;
pub mod postgres_pricing_repo;
pub mod postgres_profile_repo;
pub mod postgres_prompt_repo;
pub mod postgres_subscription_repo;
pub mod postgres_testimonial_repo;
pub mod postgres_workspace_repo;
pub mod sqlite_feature_repo;
pub mod sqlite_pricing_repo;
pub mod sqlite_profile_repo;
pub mod sqlite_prompt_repo;
pub mod sqlite_subscription_repo;
pub mod sqlite_testimonial_repo;
pub mod sqlite_workspace_repo;
