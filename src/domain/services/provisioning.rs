use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::models::features::WorkspaceFeatures;
use crate::domain::models::profile::Profile;
use crate::domain::models::subscription::WorkspaceSubscription;
use crate::domain::models::workspace::Workspace;
use crate::domain::ports::{
    FeatureRepository, IdentityProvider, ProfileRepository, SubscriptionRepository,
    WorkspaceRepository,
};
use crate::domain::services::subdomain;
use crate::error::AppError;

pub const STEP_VALIDATION: &str = "validation";
pub const STEP_AUTH_USER: &str = "auth_user";
pub const STEP_WORKSPACE: &str = "workspace";
pub const STEP_PROFILE: &str = "profile";

pub struct SignupParams {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: String,
    pub workspace_name: Option<String>,
}

#[derive(Debug)]
pub struct ProvisionedAccount {
    pub user_id: String,
    pub workspace_id: Option<String>,
    pub profile_id: String,
}

/// Structured signup failure: `error_code` is machine-readable, `step`
/// names the workflow step that failed so callers can tell a validation
/// rejection from a partial setup.
#[derive(Debug)]
pub struct SignupFailure {
    pub error: String,
    pub error_code: &'static str,
    pub step: Option<&'static str>,
}

impl SignupFailure {
    fn validation(error: &str, error_code: &'static str) -> Self {
        Self { error: error.to_string(), error_code, step: Some(STEP_VALIDATION) }
    }
}

#[derive(Debug)]
pub struct RecoveryOutcome {
    pub profile_created: bool,
    pub workspace_created: bool,
    pub profile_id: String,
    pub workspace_id: Option<String>,
}

#[derive(Debug)]
pub enum RecoveryError {
    UserNotFound,
    Internal(AppError),
}

/// All-or-nothing account creation over the external identity provider and
/// the workspace tables. The only compensated step is identity creation:
/// when any later step fails the identity is deleted and the whole signup
/// reported as failed. Workspace, subscription and feature rows written
/// before the failure are left behind (no datastore-level transaction
/// spans the steps).
pub struct ProvisioningService {
    identity: Arc<dyn IdentityProvider>,
    workspace_repo: Arc<dyn WorkspaceRepository>,
    subscription_repo: Arc<dyn SubscriptionRepository>,
    feature_repo: Arc<dyn FeatureRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
}

impl ProvisioningService {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        workspace_repo: Arc<dyn WorkspaceRepository>,
        subscription_repo: Arc<dyn SubscriptionRepository>,
        feature_repo: Arc<dyn FeatureRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self { identity, workspace_repo, subscription_repo, feature_repo, profile_repo }
    }

    pub async fn signup(&self, params: SignupParams) -> Result<ProvisionedAccount, SignupFailure> {
        if params.email.is_empty()
            || params.password.is_empty()
            || params.full_name.is_empty()
            || params.role.is_empty()
        {
            return Err(SignupFailure {
                error: "Missing required fields".to_string(),
                error_code: "MISSING_FIELDS",
                step: None,
            });
        }

        let is_coach = params.role == "coach";
        let workspace_name = params.workspace_name.as_deref().map(str::trim).unwrap_or("");
        if is_coach && workspace_name.is_empty() {
            return Err(SignupFailure::validation(
                "Workspace name required for coach accounts",
                "MISSING_WORKSPACE_NAME",
            ));
        }

        info!("Starting signup for {} as {}", params.email, params.role);

        let user = self
            .identity
            .create_user(&params.email, &params.password, &params.full_name, &params.role)
            .await
            .map_err(|e| SignupFailure {
                error: e.to_string(),
                error_code: "AUTH_CREATION_FAILED",
                step: Some(STEP_AUTH_USER),
            })?;

        info!("Auth user created: {}", user.id);

        let workspace_id = if is_coach {
            match self.provision_workspace(Some(user.id.clone()), workspace_name).await {
                Ok(workspace) => Some(workspace.id),
                Err(e) => {
                    self.rollback_identity(&user.id).await;
                    return Err(SignupFailure {
                        error: format!("Workspace creation failed: {}", e),
                        error_code: "SETUP_FAILED",
                        step: Some(STEP_WORKSPACE),
                    });
                }
            }
        } else {
            None
        };

        let profile = Profile::new(
            user.id.clone(),
            params.role.clone(),
            params.full_name.clone(),
            workspace_id.clone(),
        );

        match self.profile_repo.create(&profile).await {
            Ok(profile) => {
                info!("Signup complete for {}", params.email);
                Ok(ProvisionedAccount {
                    user_id: user.id,
                    workspace_id,
                    profile_id: profile.id,
                })
            }
            Err(e) => {
                self.rollback_identity(&user.id).await;
                Err(SignupFailure {
                    error: format!("Profile creation failed: {}", e),
                    error_code: "SETUP_FAILED",
                    step: Some(STEP_PROFILE),
                })
            }
        }
    }

    /// Recreates the profile (and, for coaches, the workspace bundle) for an
    /// identity that lost its rows to a partial signup. Idempotent when the
    /// profile already exists.
    pub async fn recover(&self, user_id: &str) -> Result<RecoveryOutcome, RecoveryError> {
        let user = self
            .identity
            .get_user(user_id)
            .await
            .map_err(RecoveryError::Internal)?
            .ok_or(RecoveryError::UserNotFound)?;

        if let Some(existing) = self
            .profile_repo
            .find_by_id(user_id)
            .await
            .map_err(RecoveryError::Internal)?
        {
            info!("Profile already exists for {}", user_id);
            return Ok(RecoveryOutcome {
                profile_created: false,
                workspace_created: false,
                profile_id: existing.id,
                workspace_id: existing.workspace_id,
            });
        }

        let full_name = if user.full_name.is_empty() {
            user.email.split('@').next().unwrap_or("User").to_string()
        } else {
            user.full_name.clone()
        };
        let role = if user.role.is_empty() { "coach".to_string() } else { user.role.clone() };

        let (workspace_id, workspace_created) = if role == "coach" {
            let workspace_name = format!("{}'s Workspace", full_name);
            let workspace = self
                .provision_workspace(Some(user.id.clone()), &workspace_name)
                .await
                .map_err(RecoveryError::Internal)?;
            (Some(workspace.id), true)
        } else {
            (None, false)
        };

        let profile = Profile::new(user.id.clone(), role, full_name, workspace_id.clone());
        let profile = self.profile_repo.create(&profile).await.map_err(RecoveryError::Internal)?;

        info!("Profile recovered for {}: {}", user_id, profile.id);
        Ok(RecoveryOutcome {
            profile_created: true,
            workspace_created,
            profile_id: profile.id,
            workspace_id,
        })
    }

    /// Creates the workspace plus its subscription and feature rows.
    /// Subscription/feature failures are logged and do not abort the
    /// workflow; only the workspace row itself is required.
    async fn provision_workspace(
        &self,
        owner_id: Option<String>,
        name: &str,
    ) -> Result<Workspace, AppError> {
        let slug = subdomain::creation_slug(name);
        let workspace = Workspace::new(name.to_string(), slug, owner_id);
        let workspace = self.workspace_repo.create(&workspace).await?;
        info!("Workspace created: {}", workspace.id);

        let subscription = WorkspaceSubscription::starter_trial(workspace.id.clone());
        if let Err(e) = self.subscription_repo.create(&subscription).await {
            error!("Subscription creation error for {}: {}", workspace.id, e);
        }

        let features = WorkspaceFeatures::starter(workspace.id.clone());
        if let Err(e) = self.feature_repo.create(&features).await {
            error!("Features creation error for {}: {}", workspace.id, e);
        }

        Ok(workspace)
    }

    async fn rollback_identity(&self, user_id: &str) {
        match self.identity.delete_user(user_id).await {
            Ok(()) => info!("Rolled back user: {}", user_id),
            Err(e) => warn!("Rollback failed for {}: {}", user_id, e),
        }
    }
}
