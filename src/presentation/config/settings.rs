use super::environment::Environment;
use super::webhooks::DEFAULT_WEBHOOK_BASE;

/// Runtime configuration, assembled from environment variables.
///
/// Backend selection is presence-based: setting `REDIS_URL` switches the
/// job store from the in-process map to Redis.
#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub store: StoreSettings,
    pub webhooks: WebhookSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub redis_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct WebhookSettings {
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub json: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        let environment = std::env::var("APP_ENVIRONMENT")
            .ok()
            .and_then(|v| Environment::try_from(v).ok())
            .unwrap_or(Environment::Local);

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3001);

        let redis_url = std::env::var("REDIS_URL").ok().filter(|v| !v.is_empty());

        let base_url = std::env::var("WEBHOOK_BASE_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_WEBHOOK_BASE.to_string());

        let json = std::env::var("LOG_JSON")
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(false);

        Self {
            environment,
            server: ServerSettings { port },
            store: StoreSettings { redis_url },
            webhooks: WebhookSettings { base_url },
            logging: LoggingSettings { json },
        }
    }
}
