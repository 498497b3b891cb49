// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    mongo_uri: String,
    database_name: String,
    posts_collection: String,
    subscribers_collection: String,
    listen_addr: String,
    smtp_email: String,
    smtp_password: String,
    smtp_host: String,
    smtp_port: u16,
    base_url: String,
    allowed_origins: Vec<String>,
    notification_timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_mongo_uri() -> String {
    "mongodb://localhost:27017".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".into(),
        "https://codercat.vercel.app".into(),
    ]
}

const DEFAULT_NOTIFICATION_TIMEOUT_SECS: u64 = 30;

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates required keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let mongo_uri = lookup("MONGO_URI").unwrap_or_else(default_mongo_uri);
        if mongo_uri.trim().is_empty() {
            return Err(ConfigError::Missing("MONGO_URI"));
        }

        let port = get("PORT", "8080");
        let port: u16 = port
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("PORT must be a port number, got {port:?}")))?;

        let smtp_port = get("SMTP_PORT", "587");
        let smtp_port: u16 = smtp_port.trim().parse().map_err(|_| {
            ConfigError::Invalid(format!("SMTP_PORT must be a port number, got {smtp_port:?}"))
        })?;

        let base_url = get("BASE_URL", "https://codercat-server.onrender.com")
            .trim()
            .trim_end_matches('/')
            .to_string();

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let notification_timeout_secs = lookup("NOTIFICATION_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_NOTIFICATION_TIMEOUT_SECS);

        Ok(Self {
            mongo_uri,
            database_name: get("MONGO_DB_NAME", "codercat"),
            posts_collection: get("MONGO_COLLECTION_NAME_BLOG", "blogs"),
            subscribers_collection: get("MONGO_COLLECTION_NAME_SUBSCRIBERS", "subscribers"),
            listen_addr: format!("0.0.0.0:{port}"),
            smtp_email: get("SMTP_EMAIL", "").trim().to_string(),
            smtp_password: get("SMTP_PASSWORD", ""),
            smtp_host: get("SMTP_HOST", "smtp.gmail.com"),
            smtp_port,
            base_url,
            allowed_origins,
            notification_timeout: Duration::from_secs(notification_timeout_secs),
        })
    }

    pub fn mongo_uri(&self) -> &str {
        &self.mongo_uri
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn posts_collection(&self) -> &str {
        &self.posts_collection
    }

    pub fn subscribers_collection(&self) -> &str {
        &self.subscribers_collection
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Sender address and SMTP login. Empty when mail is not configured.
    pub fn smtp_email(&self) -> &str {
        &self.smtp_email
    }

    pub fn smtp_password(&self) -> &str {
        &self.smtp_password
    }

    pub fn smtp_host(&self) -> &str {
        &self.smtp_host
    }

    pub fn smtp_port(&self) -> u16 {
        self.smtp_port
    }

    /// Site root used for links in announcement emails, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn notification_timeout(&self) -> Duration {
        self.notification_timeout
    }
}
