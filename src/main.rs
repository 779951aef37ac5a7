use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use agent_store::application::ports::WebhookClient;
use agent_store::application::services::DispatchService;
use agent_store::infrastructure::observability::{init_tracing, TracingConfig};
use agent_store::infrastructure::store::JobStoreFactory;
use agent_store::infrastructure::webhook::ReqwestWebhookClient;
use agent_store::presentation::config::WebhookRegistry;
use agent_store::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(
        TracingConfig {
            environment: settings.environment.to_string(),
            json_format: settings.logging.json,
        },
        settings.server.port,
    );

    let job_store = JobStoreFactory::create(&settings.store)?;
    let webhook_client: Arc<dyn WebhookClient> = Arc::new(ReqwestWebhookClient::new());
    let dispatch_service = Arc::new(DispatchService::new(
        Arc::clone(&job_store),
        webhook_client,
    ));

    let state = AppState {
        job_store,
        dispatch_service,
        registry: WebhookRegistry::new(&settings.webhooks.base_url),
    };

    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
