use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::services::profile_loader::TokioClock;
use crate::infra::ai::openai_service::OpenAiService;
use crate::infra::identity::http_identity_service::HttpIdentityService;
use crate::infra::repositories::{
    postgres_feature_repo::PostgresFeatureRepo, postgres_pricing_repo::PostgresPricingRepo,
    postgres_profile_repo::PostgresProfileRepo, postgres_prompt_repo::PostgresPromptRepo,
    postgres_subscription_repo::PostgresSubscriptionRepo,
    postgres_testimonial_repo::PostgresTestimonialRepo,
    postgres_workspace_repo::PostgresWorkspaceRepo,
    sqlite_feature_repo::SqliteFeatureRepo, sqlite_pricing_repo::SqlitePricingRepo,
    sqlite_profile_repo::SqliteProfileRepo, sqlite_prompt_repo::SqlitePromptRepo,
    sqlite_subscription_repo::SqliteSubscriptionRepo,
    sqlite_testimonial_repo::SqliteTestimonialRepo, sqlite_workspace_repo::SqliteWorkspaceRepo,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    let identity = Arc::new(HttpIdentityService::new(
        config.identity_service_url.clone(),
        config.identity_service_key.clone(),
    ));
    let llm_service = Arc::new(OpenAiService::new());
    let clock = Arc::new(TokioClock);

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        AppState::new(
            config.clone(),
            Arc::new(PostgresWorkspaceRepo::new(pool.clone())),
            Arc::new(PostgresPricingRepo::new(pool.clone())),
            Arc::new(PostgresTestimonialRepo::new(pool.clone())),
            Arc::new(PostgresProfileRepo::new(pool.clone())),
            Arc::new(PostgresSubscriptionRepo::new(pool.clone())),
            Arc::new(PostgresFeatureRepo::new(pool.clone())),
            Arc::new(PostgresPromptRepo::new(pool.clone())),
            identity,
            llm_service,
            clock,
        )
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        AppState::new(
            config.clone(),
            Arc::new(SqliteWorkspaceRepo::new(pool.clone())),
            Arc::new(SqlitePricingRepo::new(pool.clone())),
            Arc::new(SqliteTestimonialRepo::new(pool.clone())),
            Arc::new(SqliteProfileRepo::new(pool.clone())),
            Arc::new(SqliteSubscriptionRepo::new(pool.clone())),
            Arc::new(SqliteFeatureRepo::new(pool.clone())),
            Arc::new(SqlitePromptRepo::new(pool.clone())),
            identity,
            llm_service,
            clock,
        )
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
