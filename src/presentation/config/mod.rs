mod environment;
mod settings;
mod webhooks;

pub use environment::Environment;
pub use settings::{
    LoggingSettings, ServerSettings, Settings, StoreSettings, WebhookSettings,
};
pub use webhooks::{WebhookRegistry, DEFAULT_WEBHOOK_BASE};
