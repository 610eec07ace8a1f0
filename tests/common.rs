use blueprint_backend::{
    api::router::create_router,
    config::Config,
    domain::ports::{IdentityProvider, IdentityUser, LlmService},
    domain::services::profile_loader::Clock,
    error::AppError,
    infra::repositories::{
        sqlite_feature_repo::SqliteFeatureRepo,
        sqlite_pricing_repo::SqlitePricingRepo,
        sqlite_profile_repo::SqliteProfileRepo,
        sqlite_prompt_repo::SqlitePromptRepo,
        sqlite_subscription_repo::SqliteSubscriptionRepo,
        sqlite_testimonial_repo::SqliteTestimonialRepo,
        sqlite_workspace_repo::SqliteWorkspaceRepo,
    },
    state::AppState,
};
use async_trait::async_trait;
use axum::Router;
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

/// Identity provider double: in-memory users, duplicate-email rejection and
/// a record of deletions so rollbacks are observable.
#[derive(Default)]
pub struct MockIdentityProvider {
    pub users: Mutex<Vec<IdentityUser>>,
    pub deleted: Mutex<Vec<String>>,
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn create_user(
        &self,
        email: &str,
        _password: &str,
        full_name: &str,
        role: &str,
    ) -> Result<IdentityUser, AppError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == email) {
            return Err(AppError::Identity(
                "A user with this email address has already been registered".to_string(),
            ));
        }
        let user = IdentityUser {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            full_name: full_name.to_string(),
            role: role.to_string(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<IdentityUser>, AppError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == user_id).cloned())
    }

    async fn delete_user(&self, user_id: &str) -> Result<(), AppError> {
        self.users.lock().unwrap().retain(|u| u.id != user_id);
        self.deleted.lock().unwrap().push(user_id.to_string());
        Ok(())
    }
}

/// Completion API double. `None` behaves like a dead upstream.
pub struct MockLlmService {
    pub response: Option<String>,
}

#[async_trait]
impl LlmService for MockLlmService {
    async fn generate(
        &self,
        _api_key: &str,
        _prompt: &str,
        _system_instruction: &str,
    ) -> Result<String, AppError> {
        match &self.response {
            Some(response) => Ok(response.clone()),
            None => Err(AppError::InternalWithMsg("Completion API error: 500".to_string())),
        }
    }
}

/// No-op clock so profile-loader retries do not slow the suite down.
pub struct NoopClock;

#[async_trait]
impl Clock for NoopClock {
    async fn sleep(&self, _duration: Duration) {}
}

pub struct TestAppOptions {
    pub environment: String,
    pub openai_api_key: Option<String>,
    pub llm_response: Option<String>,
}

impl Default for TestAppOptions {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            openai_api_key: None,
            llm_response: None,
        }
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
    pub identity: Arc<MockIdentityProvider>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_options(TestAppOptions::default()).await
    }

    pub async fn with_options(options: TestAppOptions) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            environment: options.environment,
            identity_service_url: "http://localhost".to_string(),
            identity_service_key: "service-role-key".to_string(),
            openai_api_key: options.openai_api_key,
        };

        let identity = Arc::new(MockIdentityProvider::default());

        let state = Arc::new(AppState::new(
            config,
            Arc::new(SqliteWorkspaceRepo::new(pool.clone())),
            Arc::new(SqlitePricingRepo::new(pool.clone())),
            Arc::new(SqliteTestimonialRepo::new(pool.clone())),
            Arc::new(SqliteProfileRepo::new(pool.clone())),
            Arc::new(SqliteSubscriptionRepo::new(pool.clone())),
            Arc::new(SqliteFeatureRepo::new(pool.clone())),
            Arc::new(SqlitePromptRepo::new(pool.clone())),
            identity.clone(),
            Arc::new(MockLlmService { response: options.llm_response }),
            Arc::new(NoopClock),
        ));

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
            identity,
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
