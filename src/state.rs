use std::sync::Arc;
use crate::config::Config;
use crate::domain::ports::{
    FeatureRepository, IdentityProvider, LlmService, PricingTierRepository, ProfileRepository,
    PromptRepository, SubscriptionRepository, TestimonialRepository, WorkspaceRepository,
};
use crate::domain::services::generation::ContentGenerator;
use crate::domain::services::profile_loader::{Clock, ProfileLoader};
use crate::domain::services::provisioning::ProvisioningService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub workspace_repo: Arc<dyn WorkspaceRepository>,
    pub pricing_repo: Arc<dyn PricingTierRepository>,
    pub testimonial_repo: Arc<dyn TestimonialRepository>,
    pub profile_repo: Arc<dyn ProfileRepository>,
    pub subscription_repo: Arc<dyn SubscriptionRepository>,
    pub feature_repo: Arc<dyn FeatureRepository>,
    pub prompt_repo: Arc<dyn PromptRepository>,
    pub identity: Arc<dyn IdentityProvider>,
    pub llm_service: Arc<dyn LlmService>,
    pub provisioning: Arc<ProvisioningService>,
    pub generator: Arc<ContentGenerator>,
    pub profile_loader: Arc<ProfileLoader>,
}

impl AppState {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: Config,
        workspace_repo: Arc<dyn WorkspaceRepository>,
        pricing_repo: Arc<dyn PricingTierRepository>,
        testimonial_repo: Arc<dyn TestimonialRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        subscription_repo: Arc<dyn SubscriptionRepository>,
        feature_repo: Arc<dyn FeatureRepository>,
        prompt_repo: Arc<dyn PromptRepository>,
        identity: Arc<dyn IdentityProvider>,
        llm_service: Arc<dyn LlmService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let provisioning = Arc::new(ProvisioningService::new(
            identity.clone(),
            workspace_repo.clone(),
            subscription_repo.clone(),
            feature_repo.clone(),
            profile_repo.clone(),
        ));
        let generator = Arc::new(ContentGenerator::new(
            llm_service.clone(),
            config.openai_api_key.clone(),
        ));
        let profile_loader = Arc::new(ProfileLoader::new(profile_repo.clone(), clock));

        Self {
            config,
            workspace_repo,
            pricing_repo,
            testimonial_repo,
            profile_repo,
            subscription_repo,
            feature_repo,
            prompt_repo,
            identity,
            llm_service,
            provisioning,
            generator,
            profile_loader,
        }
    }
}
