use crate::domain::models::{
    features::WorkspaceFeatures, generation::LandingPagePrompt, pricing::PricingTier,
    profile::Profile, subscription::WorkspaceSubscription, testimonial::Testimonial,
    workspace::Workspace,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait WorkspaceRepository: Send + Sync {
    async fn create(&self, workspace: &Workspace) -> Result<Workspace, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Workspace>, AppError>;
    /// Active workspaces only; inactive workspaces are never resolvable.
    async fn find_active_by_subdomain(&self, subdomain: &str) -> Result<Option<Workspace>, AppError>;
    /// Active workspaces only.
    async fn find_active_by_custom_domain(&self, domain: &str) -> Result<Option<Workspace>, AppError>;
    /// Existence check regardless of is_active; advisory only, not a reservation.
    async fn subdomain_taken(&self, subdomain: &str) -> Result<bool, AppError>;
    async fn update(&self, workspace: &Workspace) -> Result<Workspace, AppError>;
}

#[async_trait]
pub trait PricingTierRepository: Send + Sync {
    async fn create(&self, tier: &PricingTier) -> Result<PricingTier, AppError>;
    async fn find_by_id(&self, workspace_id: &str, id: &str) -> Result<Option<PricingTier>, AppError>;
    async fn list_by_workspace(&self, workspace_id: &str) -> Result<Vec<PricingTier>, AppError>;
    /// Active tiers in display order; the public landing page only shows these.
    async fn list_active(&self, workspace_id: &str) -> Result<Vec<PricingTier>, AppError>;
    async fn update(&self, tier: &PricingTier) -> Result<PricingTier, AppError>;
    /// Clears is_featured on every other tier of the workspace, keeping the
    /// featured tier a per-workspace singleton.
    async fn clear_featured_except(&self, workspace_id: &str, tier_id: &str) -> Result<(), AppError>;
    async fn delete(&self, workspace_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    async fn create(&self, testimonial: &Testimonial) -> Result<Testimonial, AppError>;
    async fn list_by_workspace(&self, workspace_id: &str) -> Result<Vec<Testimonial>, AppError>;
    /// Approved testimonials, newest first; the only set shown publicly.
    async fn list_approved(&self, workspace_id: &str) -> Result<Vec<Testimonial>, AppError>;
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn create(&self, profile: &Profile) -> Result<Profile, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Profile>, AppError>;
}

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn create(&self, subscription: &WorkspaceSubscription) -> Result<WorkspaceSubscription, AppError>;
    async fn find_by_workspace(&self, workspace_id: &str) -> Result<Option<WorkspaceSubscription>, AppError>;
}

#[async_trait]
pub trait FeatureRepository: Send + Sync {
    async fn create(&self, features: &WorkspaceFeatures) -> Result<WorkspaceFeatures, AppError>;
    async fn find_by_workspace(&self, workspace_id: &str) -> Result<Option<WorkspaceFeatures>, AppError>;
}

#[async_trait]
pub trait PromptRepository: Send + Sync {
    async fn create(&self, prompt: &LandingPagePrompt) -> Result<LandingPagePrompt, AppError>;
    async fn deactivate_for_workspace(&self, workspace_id: &str) -> Result<(), AppError>;
    async fn find_active(&self, workspace_id: &str) -> Result<Option<LandingPagePrompt>, AppError>;
    async fn list_by_workspace(&self, workspace_id: &str) -> Result<Vec<LandingPagePrompt>, AppError>;
}

/// External text-completion API. The generation engine treats any error as
/// a signal to fall back to its deterministic template path.
#[async_trait]
pub trait LlmService: Send + Sync {
    async fn generate(
        &self,
        api_key: &str,
        prompt: &str,
        system_instruction: &str,
    ) -> Result<String, AppError>;
}

#[derive(Debug, Clone)]
pub struct IdentityUser {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: String,
}

/// Admin surface of the external identity provider. Session handling lives
/// entirely on the provider's side; this service only provisions and
/// removes identities.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn create_user(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
        role: &str,
    ) -> Result<IdentityUser, AppError>;
    async fn get_user(&self, user_id: &str) -> Result<Option<IdentityUser>, AppError>;
    async fn delete_user(&self, user_id: &str) -> Result<(), AppError>;
}
