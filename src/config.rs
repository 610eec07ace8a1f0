use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub environment: String,
    pub identity_service_url: String,
    pub identity_service_key: String,
    pub openai_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            identity_service_url: env::var("IDENTITY_SERVICE_URL").unwrap_or_else(|_| "http://localhost:9999".to_string()),
            identity_service_key: env::var("IDENTITY_SERVICE_KEY").unwrap_or_else(|_| "service-role-key".to_string()),
            openai_api_key: env::var("OPENAI_API_KEY").ok(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
