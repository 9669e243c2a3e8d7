//! End-to-end batch submission tests against a mock batch endpoint

use crate::common::{mock_client, sample_queue};
use tokio_test::assert_ok;
use graph_batch_rs::{BatchError, BatchQueue, RequestDescriptor};
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_roundtrip_preserves_index_correspondence() {
    let (server, client) = mock_client().await;

    // One object per request, echoing the request index
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "me-node"},
            {"data": [{"id": "friend-1"}]},
            {"friend-1": {"name": "A Friend"}}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let mut queue = sample_queue();
    let results = assert_ok!(client.execute_batch(&mut queue).await);

    assert_eq!(results.len(), 3);
    assert_eq!(
        results[0].as_value().and_then(|v| v["id"].as_str()),
        Some("me-node")
    );
    assert!(results[1].as_value().is_some());
    assert!(results[2].as_value().unwrap().get("friend-1").is_some());
}

#[tokio::test]
async fn test_successful_submit_resets_queue() {
    let (server, client) = mock_client().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"id": "1"}, {"id": "2"}, {"id": "3"}])),
        )
        .mount(&server)
        .await;

    let mut queue = sample_queue();
    client.execute_batch(&mut queue).await.unwrap();
    assert!(queue.is_empty());

    // A subsequent append starts a fresh batch
    queue.append(RequestDescriptor::get("me/likes")).unwrap();
    assert_eq!(queue.len(), 1);
}

#[tokio::test]
async fn test_omitted_response_yields_marker() {
    let (server, client) = mock_client().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": "123"}, null, {"id": "456"}])),
        )
        .mount(&server)
        .await;

    let mut queue = sample_queue();
    let results = client.execute_batch(&mut queue).await.unwrap();

    assert!(!results[0].is_omitted());
    assert!(results[1].is_omitted());
    assert_eq!(
        results[2].as_value().and_then(|v| v["id"].as_str()),
        Some("456")
    );
}

#[tokio::test]
async fn test_payload_carries_wire_format_and_credentials() {
    let (server, client) = mock_client().await;

    // The form body carries the access token and the encoded batch, with the
    // omit flag present for the marked request only.
    Mock::given(method("POST"))
        .and(body_string_contains("access_token=test-token"))
        .and(body_string_contains("batch="))
        .and(body_string_contains("relative_url"))
        .and(body_string_contains("omit_response_on_success"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"id": "1"}, null, {"id": "3"}])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut queue = sample_queue();
    client.execute_batch(&mut queue).await.unwrap();
}

#[tokio::test]
async fn test_server_error_retains_queue() {
    let (server, client) = mock_client().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let mut queue = sample_queue();
    let err = client.execute_batch(&mut queue).await.unwrap_err();

    assert!(matches!(err, BatchError::Api(_)));
    assert!(err.is_retryable());
    assert_eq!(queue.len(), 3);
}

#[tokio::test]
async fn test_length_mismatch_is_malformed_and_retains_queue() {
    let (server, client) = mock_client().await;

    // Two entries for a three-request batch
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"id": "1"}, {"id": "2"}])),
        )
        .mount(&server)
        .await;

    let mut queue = sample_queue();
    let err = client.execute_batch(&mut queue).await.unwrap_err();

    assert!(matches!(err, BatchError::MalformedResponse(_)));
    assert_eq!(queue.len(), 3);
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let (server, client) = mock_client().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let mut queue = sample_queue();
    let err = client.execute_batch(&mut queue).await.unwrap_err();
    assert!(matches!(err, BatchError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_empty_queue_submit_makes_no_network_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let config = graph_batch_rs::ConfigBuilder::new()
        .access_token("test-token")
        .base_url(&server.uri())
        .build();
    let client = graph_batch_rs::GraphClient::new(config).unwrap();

    let mut queue = BatchQueue::new();
    let err = client.execute_batch(&mut queue).await.unwrap_err();
    assert!(matches!(err, BatchError::InvalidRequest(_)));
}

#[tokio::test]
async fn test_full_batch_of_fifty() {
    let (server, client) = mock_client().await;

    let bodies: Vec<_> = (0..50).map(|i| json!({"index": i})).collect();
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(bodies)))
        .mount(&server)
        .await;

    let mut queue = BatchQueue::new();
    for i in 0..50 {
        queue.append(RequestDescriptor::get(format!("node/{}", i))).unwrap();
    }

    let results = client.execute_batch(&mut queue).await.unwrap();
    assert_eq!(results.len(), 50);
    for (i, result) in results.iter().enumerate() {
        assert_eq!(
            result.as_value().and_then(|v| v["index"].as_u64()),
            Some(i as u64)
        );
    }
    assert!(queue.is_empty());
}
