use serde_json::json;

use agent_store::application::ports::{WebhookClient, WebhookError};
use agent_store::infrastructure::webhook::ReqwestWebhookClient;

#[tokio::test]
async fn given_2xx_ack_when_dispatching_then_ok() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/webhook/landing-analyzer")
        .match_header("content-type", "application/json")
        .with_status(200)
        .create_async()
        .await;

    let client = ReqwestWebhookClient::new();
    let result = client
        .dispatch(
            &format!("{}/webhook/landing-analyzer", server.url()),
            &json!({ "website_url": "https://example.com", "job_id": "job_1_abc" }),
        )
        .await;

    assert!(result.is_ok());
    mock.assert_async().await;
}

#[tokio::test]
async fn given_non_2xx_ack_when_dispatching_then_status_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/webhook/seo-audit-agent")
        .with_status(500)
        .create_async()
        .await;

    let client = ReqwestWebhookClient::new();
    let result = client
        .dispatch(
            &format!("{}/webhook/seo-audit-agent", server.url()),
            &json!({ "job_id": "job_1_abc" }),
        )
        .await;

    match result {
        Err(WebhookError::Status(code)) => assert_eq!(code, 500),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn given_unreachable_host_when_dispatching_then_transport_error() {
    let client = ReqwestWebhookClient::new();
    let result = client
        .dispatch("http://127.0.0.1:1/webhook/x", &json!({ "job_id": "job_1_abc" }))
        .await;

    assert!(matches!(result, Err(WebhookError::Transport(_))));
}
