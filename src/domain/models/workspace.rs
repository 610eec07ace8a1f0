use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::models::landing::LandingPageConfig;

/// Six independent wizard flags. Steps are only ever set to true; there is
/// no reset path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct OnboardingSteps {
    pub step1: bool,
    pub step2: bool,
    pub step3: bool,
    pub step4: bool,
    pub step5: bool,
    pub step6: bool,
}

impl OnboardingSteps {
    /// Marks a step (1-6) complete. Returns false for an unknown step
    /// number; already-completed steps stay completed.
    pub fn mark_complete(&mut self, step: u8) -> bool {
        match step {
            1 => self.step1 = true,
            2 => self.step2 = true,
            3 => self.step3 = true,
            4 => self.step4 = true,
            5 => self.step5 = true,
            6 => self.step6 = true,
            _ => return false,
        }
        true
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Workspace {
    pub id: String,
    pub name: String,
    pub subdomain: String,
    pub custom_domain: Option<String>,
    pub owner_id: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: String,
    pub secondary_color: String,
    pub tagline: String,
    pub about_text: String,
    pub landing_page_config: Json<LandingPageConfig>,
    pub onboarding_steps: Json<OnboardingSteps>,
    pub stripe_account_id: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Workspace {
    pub fn new(name: String, subdomain: String, owner_id: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            subdomain,
            custom_domain: None,
            owner_id,
            logo_url: None,
            primary_color: "#3B82F6".to_string(),
            secondary_color: "#8B5CF6".to_string(),
            tagline: String::new(),
            about_text: String::new(),
            landing_page_config: Json(LandingPageConfig::default_config()),
            onboarding_steps: Json(OnboardingSteps::default()),
            stripe_account_id: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
