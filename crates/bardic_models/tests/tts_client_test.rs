//! Tests for the translate TTS client against a local HTTP fake.

use bardic_error::SynthesisErrorKind;
use bardic_interface::SpeechService;
use bardic_models::GoogleTranslateTts;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn tts(server: &MockServer) -> GoogleTranslateTts {
    GoogleTranslateTts::new(server.uri(), Duration::from_secs(5)).expect("client builds")
}

#[tokio::test]
async fn test_single_chunk_synthesis() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/translate_tts"))
        .and(query_param("q", "Waves fold on sand."))
        .and(query_param("tl", "en"))
        .and(query_param("client", "tw-ob"))
        .and(query_param("total", "1"))
        .and(query_param("idx", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"ID3-frame".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let audio = tts(&server)
        .synthesize("Waves fold on sand.", "en")
        .await
        .expect("synthesis succeeds");
    assert_eq!(audio, b"ID3-frame".to_vec());
}

#[tokio::test]
async fn test_long_text_is_fetched_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/translate_tts"))
        .and(query_param("idx", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"first|".to_vec()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/translate_tts"))
        .and(query_param("idx", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"second".to_vec()))
        .mount(&server)
        .await;

    let sentence = "a".repeat(60);
    let text = format!("{}. {}.", sentence, sentence);
    let audio = tts(&server).synthesize(&text, "en").await.unwrap();

    assert_eq!(audio, b"first|second".to_vec());
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_empty_text_fails_without_request() {
    let server = MockServer::start().await;

    for text in ["", "   ", "..."] {
        let err = tts(&server).synthesize(text, "en").await.unwrap_err();
        assert_eq!(err.kind, SynthesisErrorKind::EmptyText);
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unsupported_language() {
    let server = MockServer::start().await;

    let err = tts(&server).synthesize("Hello", "xx").await.unwrap_err();
    assert_eq!(
        err.kind,
        SynthesisErrorKind::UnsupportedLanguage("xx".to_string())
    );
}

#[tokio::test]
async fn test_endpoint_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/translate_tts"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
        .mount(&server)
        .await;

    let err = tts(&server).synthesize("Hello", "en").await.unwrap_err();
    assert_eq!(
        err.kind,
        SynthesisErrorKind::HttpError {
            status_code: 429,
            message: "Too Many Requests".to_string(),
        }
    );
}
