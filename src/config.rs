// src/config.rs

use std::env;

/// Which remote store variant the application talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Rest,
    Mongo,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub backend: Backend,
    /// Base URL of the REST backend (`BD_API`).
    pub api_base_url: String,
    /// Required only when `backend` is `Mongo`; checked at connect time.
    pub mongo_uri: Option<String>,
    pub database_name: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let backend = match env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "rest".to_string())
            .to_lowercase()
            .as_str()
        {
            "mongo" | "mongodb" => Backend::Mongo,
            _ => Backend::Rest,
        };

        Self {
            backend,
            api_base_url: env::var("BD_API")
                .unwrap_or_else(|_| "http://localhost:3001".to_string()),
            mongo_uri: env::var("MONGO_URI").ok(),
            database_name: env::var("DATABASE_NAME").unwrap_or_else(|_| "workflow".to_string()),
        }
    }
}
