use std::sync::Arc;

use crate::application::ports::JobStore;
use crate::application::services::DispatchService;
use crate::presentation::config::WebhookRegistry;

#[derive(Clone)]
pub struct AppState {
    pub job_store: Arc<dyn JobStore>,
    pub dispatch_service: Arc<DispatchService>,
    pub registry: WebhookRegistry,
}
