//! Routes for the form, its submission and health checks.

use crate::{Page, read_request};
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use bardic_interface::{GenerationService, SpeechService};
use bardic_pipeline::Pipeline;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Server state shared by every request.
pub struct AppState<G, S> {
    /// The pipeline each submission runs through
    pub pipeline: Arc<Pipeline<G, S>>,
}

impl<G, S> AppState<G, S> {
    /// Creates a new state around a shared pipeline.
    pub fn new(pipeline: Arc<Pipeline<G, S>>) -> Self {
        Self { pipeline }
    }
}

impl<G, S> Clone for AppState<G, S> {
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
        }
    }
}

/// Creates the application router.
///
/// Request bodies larger than `max_upload_bytes` are rejected before the
/// pipeline runs.
pub fn create_router<G, S>(pipeline: Arc<Pipeline<G, S>>, max_upload_bytes: usize) -> Router
where
    G: GenerationService + 'static,
    S: SpeechService + 'static,
{
    let state = AppState::new(pipeline);

    Router::new()
        .route("/", get(form))
        .route("/generate", get(form).post(generate::<G, S>))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// The empty form.
async fn form() -> Html<String> {
    Html(Page::default().render())
}

/// Run one invocation from a form submission.
#[instrument(skip_all)]
async fn generate<G, S>(State(state): State<AppState<G, S>>, multipart: Multipart) -> impl IntoResponse
where
    G: GenerationService + 'static,
    S: SpeechService + 'static,
{
    let request = match read_request(multipart).await {
        Ok(request) => request,
        Err(rejection) => {
            warn!(status = %rejection.status(), error = %rejection.body_text(), "Unreadable form submission");
            let page = Page::with_banner(format!("Could not read the form: {}", rejection.body_text()));
            return (rejection.status(), Html(page.render()));
        }
    };

    let prompt = request.prompt.clone();
    let mut invocation = state.pipeline.run(request).await;
    info!(
        invocation_id = %invocation.id(),
        state = ?invocation.state(),
        "Rendering invocation"
    );

    let page = Page::from_invocation(prompt, &mut invocation).await;
    (StatusCode::OK, Html(page.render()))
}
