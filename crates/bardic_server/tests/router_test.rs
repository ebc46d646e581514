//! Router behavior over fake services.

mod test_utils;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use bardic_pipeline::{Pipeline, PipelineConfig};
use http_body_util::BodyExt;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use test_utils::{ByteSpeaker, EchoGenerator, FormPart, JPEG_BYTES, multipart_request};
use tower::ServiceExt;

const LIMIT: usize = 1024 * 1024;

fn router(generator: EchoGenerator, scratch: &tempfile::TempDir) -> axum::Router {
    let config = PipelineConfig::builder()
        .scratch_dir(scratch.path())
        .build()
        .unwrap();
    let pipeline = Arc::new(Pipeline::new(generator, ByteSpeaker, config));
    bardic_server::create_router(pipeline, LIMIT)
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let scratch = tempfile::tempdir().unwrap();
    let app = router(EchoGenerator::new("unused"), &scratch);

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_form_is_served() {
    let scratch = tempfile::tempdir().unwrap();
    let app = router(EchoGenerator::new("unused"), &scratch);

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("enctype=\"multipart/form-data\""));
    assert!(html.contains("name=\"image\""));
}

#[tokio::test]
async fn test_text_prompt_renders_text_and_audio() {
    let scratch = tempfile::tempdir().unwrap();
    let app = router(EchoGenerator::new("Tides & <waves>"), &scratch);

    let response = app
        .oneshot(multipart_request(&[
            FormPart::Text("prompt", "Write a haiku about the ocean"),
            FormPart::File("image", "", b""),
        ]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Generated Blog Post"));
    assert!(html.contains("Tides &amp; &lt;waves&gt;"));
    assert!(html.contains("src=\"data:audio/mpeg;base64,SUQzZmFrZQ==\""));
    assert!(!html.contains("File uploaded successfully"));
    assert_eq!(std::fs::read_dir(scratch.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_empty_prompt_shows_banner_without_calls() {
    let scratch = tempfile::tempdir().unwrap();
    let generator = EchoGenerator::new("unused");
    let app = router(generator.clone(), &scratch);

    let response = app
        .oneshot(multipart_request(&[FormPart::Text("prompt", "   ")]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Please enter a prompt"));
    assert!(!html.contains("<audio"));
    assert_eq!(generator.uploads.load(Ordering::SeqCst), 0);
    assert_eq!(generator.generations.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_image_upload_is_confirmed() {
    let scratch = tempfile::tempdir().unwrap();
    let generator = EchoGenerator::new("A photo of a dog");
    let app = router(generator.clone(), &scratch);

    let response = app
        .oneshot(multipart_request(&[
            FormPart::File("image", "dog.jpg", JPEG_BYTES),
            FormPart::Text("prompt", "Describe this photo"),
        ]))
        .await
        .unwrap();

    let html = body_string(response).await;
    assert!(html.contains("File uploaded successfully: https://files.example/v1beta/files/photo"));
    assert!(html.contains("A photo of a dog"));
    assert_eq!(generator.uploads.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_empty_generation_keeps_text_and_reports_error() {
    let scratch = tempfile::tempdir().unwrap();
    let app = router(EchoGenerator::new(""), &scratch);

    let response = app
        .oneshot(multipart_request(&[FormPart::Text("prompt", "Say nothing")]))
        .await
        .unwrap();

    let html = body_string(response).await;
    assert!(html.contains("Generated Blog Post"));
    assert!(html.contains("Speech synthesis failed: No text to speak"));
    assert!(!html.contains("<audio"));
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let scratch = tempfile::tempdir().unwrap();
    let generator = EchoGenerator::new("unused");
    let app = router(generator.clone(), &scratch);
    let big = vec![0xFF; LIMIT + 1];

    let response = app
        .oneshot(multipart_request(&[
            FormPart::Text("prompt", "Describe this photo"),
            FormPart::File("image", "huge.jpg", &big),
        ]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(generator.generations.load(Ordering::SeqCst), 0);
}
