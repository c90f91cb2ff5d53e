//! Streaming tests for the GitHub Models adapter against a mock SSE server.

use curiosity_ai::providers::github::{GithubModelsConfig, GithubModelsProvider};
use curiosity_ai::traits::Provider;
use curiosity_ai::types::{GenerationOptions, Message};
use curiosity_ai::ProviderError;
use futures_util::StreamExt;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> GithubModelsProvider {
    GithubModelsProvider::new(
        GithubModelsConfig::new("ghp_stream_key")
            .with_model("openai/gpt-4o")
            .with_endpoint(server.uri()),
    )
    .unwrap()
}

fn sse_body(chunks: &[&str]) -> String {
    let mut body = String::new();
    for chunk in chunks {
        body.push_str("data: ");
        body.push_str(chunk);
        body.push_str("\n\n");
    }
    body.push_str("data: [DONE]\n\n");
    body
}

fn delta(content: &str) -> String {
    serde_json::json!({"choices": [{"delta": {"content": content}}]}).to_string()
}

#[tokio::test]
async fn fragments_arrive_in_order_with_empties_suppressed() {
    let server = MockServer::start().await;

    let sse = sse_body(&[&delta("Hel"), &delta("lo"), &delta(""), &delta(" world")]);
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("accept", "text/event-stream"))
        .and(body_partial_json(serde_json::json!({"stream": true})))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/event-stream")
                .set_body_raw(sse, "text/event-stream"),
        )
        .mount(&server)
        .await;

    let mut stream = provider_for(&server)
        .stream_response(vec![Message::user("hi")], &GenerationOptions::default())
        .await
        .unwrap();

    let mut fragments = Vec::new();
    while let Some(item) = stream.next().await {
        fragments.push(item.unwrap());
    }
    assert_eq!(fragments, vec!["Hel", "lo", " world"]);
}

#[tokio::test]
async fn chunks_without_delta_content_are_skipped() {
    let server = MockServer::start().await;

    // Role-only first chunk and a trailing finish chunk, as the vendor
    // actually emits them.
    let sse = sse_body(&[
        r#"{"choices": [{"delta": {"role": "assistant"}}]}"#,
        &delta("text"),
        r#"{"choices": [{"delta": {}, "finish_reason": "stop"}]}"#,
        r#"{"choices": []}"#,
    ]);
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/event-stream")
                .set_body_raw(sse, "text/event-stream"),
        )
        .mount(&server)
        .await;

    let fragments: Vec<String> = provider_for(&server)
        .stream_response(vec![Message::user("hi")], &GenerationOptions::default())
        .await
        .unwrap()
        .map(|item| item.unwrap())
        .collect()
        .await;
    assert_eq!(fragments, vec!["text"]);
}

#[tokio::test]
async fn handshake_failure_surfaces_as_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .stream_response(vec![Message::user("hi")], &GenerationOptions::default())
        .await
        .err()
        .unwrap();

    assert!(matches!(err, ProviderError::Api { .. }));
    assert!(err.message().contains("rate limited"));
    assert_eq!(err.code(), Some("429"));
}

#[tokio::test]
async fn malformed_chunk_yields_one_error_then_ends() {
    let server = MockServer::start().await;

    let sse = sse_body(&[&delta("ok"), "{not json", &delta("never seen")]);
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/event-stream")
                .set_body_raw(sse, "text/event-stream"),
        )
        .mount(&server)
        .await;

    let mut stream = provider_for(&server)
        .stream_response(vec![Message::user("hi")], &GenerationOptions::default())
        .await
        .unwrap();

    assert_eq!(stream.next().await.unwrap().unwrap(), "ok");

    let err = stream.next().await.unwrap().unwrap_err();
    assert!(matches!(err, ProviderError::Api { .. }));
    assert_eq!(err.provider(), Some("github"));

    // Once raised, the sequence does not silently resume.
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn abandoning_the_stream_early_is_clean() {
    let server = MockServer::start().await;

    let sse = sse_body(&[&delta("first"), &delta("second"), &delta("third")]);
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/event-stream")
                .set_body_raw(sse, "text/event-stream"),
        )
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let mut stream = provider
        .stream_response(vec![Message::user("hi")], &GenerationOptions::default())
        .await
        .unwrap();

    assert_eq!(stream.next().await.unwrap().unwrap(), "first");
    // Dropping mid-stream releases the connection; the adapter stays ready
    // and can serve another call.
    drop(stream);

    let fragments: Vec<String> = provider
        .stream_response(vec![Message::user("hi")], &GenerationOptions::default())
        .await
        .unwrap()
        .map(|item| item.unwrap())
        .collect()
        .await;
    assert_eq!(fragments, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn cancel_handle_stops_delivery() {
    let server = MockServer::start().await;

    let sse = sse_body(&[&delta("alpha"), &delta("beta")]);
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/event-stream")
                .set_body_raw(sse, "text/event-stream"),
        )
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let mut handle = provider
        .stream_response_with_cancel(vec![Message::user("hi")], &GenerationOptions::default())
        .await
        .unwrap();

    handle.cancel.cancel();
    assert!(handle.cancel.is_cancelled());

    // Already-buffered fragments may still be delivered, but the stream must
    // terminate promptly instead of waiting on the connection.
    let drained = tokio::time::timeout(std::time::Duration::from_secs(1), async {
        let mut count = 0;
        while handle.stream.next().await.is_some() {
            count += 1;
        }
        count
    })
    .await
    .expect("cancelled stream should terminate promptly");
    assert!(drained <= 2);
}
