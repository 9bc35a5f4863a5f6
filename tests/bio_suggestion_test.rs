use httpmock::prelude::*;
use cardlink::core::bio::{
    BioSuggestionClient, BIO_API_KEY_ENV, BIO_EMPTY_MESSAGE, BIO_FAILURE_MESSAGE, BIO_PLACEHOLDER,
};

#[tokio::test]
async fn test_suggestion_uses_fixed_sampling_parameters() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/generate")
            .header("x-goog-api-key", "test-key")
            .json_body_partial(
                r#"{"generationConfig": {"temperature": 0.7, "topP": 0.8, "topK": 40}}"#,
            );
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "Building brands that resonate." }] }
                }]
            }));
    });

    let client = BioSuggestionClient::new(&server.url("/generate"), "test-key");
    let text = client
        .suggest_bio("Jane Doe", "Senior Brand Architect", "Creative Pulse Studios", "friendly")
        .await;

    assert_eq!(text, "Building brands that resonate.");
    mock.assert();
}

#[tokio::test]
async fn test_failure_collapses_to_fixed_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/generate");
        then.status(429);
    });

    let client = BioSuggestionClient::new(&server.url("/generate"), "test-key");
    let text = client.suggest_bio("Jane", "", "", "").await;
    assert_eq!(text, BIO_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_malformed_response_collapses_to_fixed_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/generate");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "unexpected": true }));
    });

    let client = BioSuggestionClient::new(&server.url("/generate"), "test-key");
    let text = client.suggest_bio("Jane", "", "", "").await;
    assert_eq!(text, BIO_EMPTY_MESSAGE);
}

#[tokio::test]
async fn test_absent_credential_disables_the_capability() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST);
        then.status(200);
    });

    // unset and blank credentials both disable the capability
    std::env::remove_var(BIO_API_KEY_ENV);
    let client = BioSuggestionClient::from_env(&server.url("/generate"));
    assert!(client.is_none());

    std::env::set_var(BIO_API_KEY_ENV, "   ");
    assert!(BioSuggestionClient::from_env(&server.url("/generate")).is_none());
    std::env::remove_var(BIO_API_KEY_ENV);

    // the caller falls back to the placeholder without any network traffic
    let fallback = match client {
        Some(_) => unreachable!(),
        None => BIO_PLACEHOLDER.to_string(),
    };
    assert_eq!(fallback, BIO_PLACEHOLDER);
    mock.assert_hits(0);
}
