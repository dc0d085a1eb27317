//! Integration tests for [`hookchat_webhook::WebhookClient`].
//!
//! Uses mockito for the HTTP surface (status codes, body shapes) and a raw
//! TCP listener that never answers for the timeout path.

use std::time::Duration;

use hookchat_core::{InboundItem, OutboundEnvelope, WebhookError};
use hookchat_webhook::{WebhookClient, WebhookConfig};

fn client_for(url: String) -> WebhookClient {
    WebhookClient::new(WebhookConfig::with_url(url).with_timeout(Duration::from_secs(5)))
}

/// **Test: a well-formed array reply is delivered as ordered typed items.**
///
/// **Setup:** Mock server answers 200 with `[{"text":"a"},{"audio":"QUJD"}]`;
/// the mock asserts the request body is the serialized envelope.
/// **Action:** `send` a text envelope.
/// **Expected:** `[Text("a"), Audio("QUJD")]`, in that order; mock matched.
#[tokio::test]
async fn test_send_array_reply() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/webhook")
        .match_header("content-type", "application/json")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "sessionId": "session-1",
            "type": "text",
            "content": "hello",
            "metadata": null
        })))
        .with_status(200)
        .with_body(r#"[{"text":"a"},{"audio":"QUJD"}]"#)
        .create_async()
        .await;

    let client = client_for(format!("{}/webhook", server.url()));
    let items = client
        .send(&OutboundEnvelope::text("session-1", "hello"))
        .await
        .expect("send should succeed");

    assert_eq!(
        items,
        vec![
            InboundItem::Text("a".to_string()),
            InboundItem::Audio("QUJD".to_string())
        ]
    );
    mock.assert_async().await;
}

/// **Test: a non-success status is Transport with the status code.**
///
/// **Setup:** Mock server answers 500.
/// **Action:** `send`.
/// **Expected:** `Transport { status: 500 }`.
#[tokio::test]
async fn test_send_server_error_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/webhook")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let client = client_for(format!("{}/webhook", server.url()));
    let err = client
        .send(&OutboundEnvelope::text("session-1", "hello"))
        .await
        .expect_err("send should fail");

    assert!(matches!(err, WebhookError::Transport { status: 500 }));
}

/// **Test: a 200 with an empty body is EmptyReply.**
///
/// **Setup:** Mock server answers 200 with an empty body.
/// **Action:** `send`.
/// **Expected:** `EmptyReply`, not `InvalidJson`.
#[tokio::test]
async fn test_send_empty_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/webhook")
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let client = client_for(format!("{}/webhook", server.url()));
    let err = client
        .send(&OutboundEnvelope::text("session-1", "hello"))
        .await
        .expect_err("send should fail");

    assert!(matches!(err, WebhookError::EmptyReply));
}

/// **Test: a 200 with a malformed JSON body is InvalidJson.**
///
/// **Setup:** Mock server answers 200 with `{not json`.
/// **Action:** `send`.
/// **Expected:** `InvalidJson`.
#[tokio::test]
async fn test_send_malformed_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/webhook")
        .with_status(200)
        .with_body("{not json")
        .create_async()
        .await;

    let client = client_for(format!("{}/webhook", server.url()));
    let err = client
        .send(&OutboundEnvelope::text("session-1", "hello"))
        .await
        .expect_err("send should fail");

    assert!(matches!(err, WebhookError::InvalidJson(_)));
}

/// **Test: a single object with both fields yields two items, audio first.**
///
/// **Setup:** Mock server answers 200 with `{"text":"a","audio":"QUJD"}`.
/// **Action:** `send`.
/// **Expected:** `[Audio("QUJD"), Text("a")]`.
#[tokio::test]
async fn test_send_object_with_both_fields() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/webhook")
        .with_status(200)
        .with_body(r#"{"text":"a","audio":"QUJD"}"#)
        .create_async()
        .await;

    let client = client_for(format!("{}/webhook", server.url()));
    let items = client
        .send(&OutboundEnvelope::text("session-1", "hello"))
        .await
        .expect("send should succeed");

    assert_eq!(
        items,
        vec![
            InboundItem::Audio("QUJD".to_string()),
            InboundItem::Text("a".to_string())
        ]
    );
}

/// **Test: a server that accepts the connection but never answers is Timeout, not Transport.**
///
/// **Setup:** Raw TCP listener that accepts and then sits on the socket;
/// client wait bound 200 ms.
/// **Action:** `send`.
/// **Expected:** `Timeout` within well under the listener's hold time.
#[tokio::test]
async fn test_send_times_out() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    let server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.expect("Failed to accept");
        // Hold the connection open without replying until the client gives up.
        tokio::time::sleep(Duration::from_secs(30)).await;
        drop(socket);
    });

    let client = WebhookClient::new(
        WebhookConfig::with_url(format!("http://{}/webhook", addr))
            .with_timeout(Duration::from_millis(200)),
    );

    let err = client
        .send(&OutboundEnvelope::text("session-1", "hello"))
        .await
        .expect_err("send should fail");

    assert!(matches!(err, WebhookError::Timeout));
    server.abort();
}

/// **Test: a connection refused is Network, surfaced with the generic user copy.**
///
/// **Setup:** URL pointing at a port nothing listens on.
/// **Action:** `send`.
/// **Expected:** `Network`, whose user copy equals the Transport copy.
#[tokio::test]
async fn test_send_connection_refused() {
    // Bind-then-drop to get a port that is very likely closed.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);

    let client = WebhookClient::new(
        WebhookConfig::with_url(format!("http://{}/webhook", addr))
            .with_timeout(Duration::from_secs(5)),
    );

    let err = client
        .send(&OutboundEnvelope::text("session-1", "hello"))
        .await
        .expect_err("send should fail");

    assert!(matches!(err, WebhookError::Network(_)));
    assert_eq!(
        err.user_copy(),
        WebhookError::Transport { status: 500 }.user_copy()
    );
}
