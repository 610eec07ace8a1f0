use crate::domain::ports::{IdentityProvider, IdentityUser};
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

/// Admin-API client for the hosted identity provider. Users are created
/// pre-confirmed with their role and display name in the metadata blob, the
/// same tuple the provider hands back on session checks.
pub struct HttpIdentityService {
    client: Client,
    base_url: String,
    service_key: String,
}

#[derive(Deserialize)]
struct UserMetadata {
    #[serde(default)]
    full_name: String,
    #[serde(default)]
    role: String,
}

#[derive(Deserialize)]
struct UserEnvelope {
    id: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    user_metadata: Option<UserMetadata>,
}

impl HttpIdentityService {
    pub fn new(base_url: String, service_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            service_key,
        }
    }

    fn admin_users_url(&self) -> String {
        format!("{}/auth/v1/admin/users", self.base_url.trim_end_matches('/'))
    }

    fn to_identity_user(envelope: UserEnvelope) -> IdentityUser {
        let metadata = envelope.user_metadata.unwrap_or(UserMetadata {
            full_name: String::new(),
            role: String::new(),
        });
        IdentityUser {
            id: envelope.id,
            email: envelope.email,
            full_name: metadata.full_name,
            role: metadata.role,
        }
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityService {
    async fn create_user(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
        role: &str,
    ) -> Result<IdentityUser, AppError> {
        let payload = json!({
            "email": email,
            "password": password,
            "email_confirm": true,
            "user_metadata": {
                "full_name": full_name,
                "role": role,
            }
        });

        let res = self
            .client
            .post(self.admin_users_url())
            .header("Authorization", format!("Bearer {}", self.service_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Identity service connection error: {}", e);
                error!("{}", msg);
                AppError::Identity(msg)
            })?;

        let status = res.status();
        if !status.is_success() {
            let text = res.text().await.unwrap_or_default();
            error!("Identity user creation failed. Status: {}, Body: {}", status, text);
            return Err(AppError::Identity(format!("User creation failed: {}", text)));
        }

        let envelope: UserEnvelope = res.json().await.map_err(|e| {
            error!("Failed to parse identity response: {:?}", e);
            AppError::Identity("Unparseable identity response".to_string())
        })?;

        Ok(Self::to_identity_user(envelope))
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<IdentityUser>, AppError> {
        let res = self
            .client
            .get(format!("{}/{}", self.admin_users_url(), user_id))
            .header("Authorization", format!("Bearer {}", self.service_key))
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Identity service connection error: {}", e);
                error!("{}", msg);
                AppError::Identity(msg)
            })?;

        if res.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let status = res.status();
        if !status.is_success() {
            let text = res.text().await.unwrap_or_default();
            error!("Identity user lookup failed. Status: {}, Body: {}", status, text);
            return Err(AppError::Identity(format!("User lookup failed: {}", status)));
        }

        let envelope: UserEnvelope = res.json().await.map_err(|e| {
            error!("Failed to parse identity response: {:?}", e);
            AppError::Identity("Unparseable identity response".to_string())
        })?;

        Ok(Some(Self::to_identity_user(envelope)))
    }

    async fn delete_user(&self, user_id: &str) -> Result<(), AppError> {
        let res = self
            .client
            .delete(format!("{}/{}", self.admin_users_url(), user_id))
            .header("Authorization", format!("Bearer {}", self.service_key))
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Identity service connection error: {}", e);
                error!("{}", msg);
                AppError::Identity(msg)
            })?;

        let status = res.status();
        if !status.is_success() {
            let text = res.text().await.unwrap_or_default();
            error!("Identity user deletion failed. Status: {}, Body: {}", status, text);
            return Err(AppError::Identity(format!("User deletion failed: {}", status)));
        }

        Ok(())
    }
}
