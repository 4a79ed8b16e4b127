pub mod cv;
pub mod education;
pub mod health;
pub mod payments;
pub mod proposals;
pub mod voice;

use axum::{routing::get, Router};
use serde::Serialize;

/// Where the voice placeholder points once a feature actually serves audio.
/// Referenced by the leftover voice-placeholder branch in every stub module.
pub const FAKE_AUDIO_URL: &str = "/static/audio/fake_audio.mp3";

/// Body of every `GET <prefix>/test` acknowledgment.
#[derive(Debug, Serialize)]
pub struct TestMessage {
    pub message: String,
}

impl TestMessage {
    pub fn for_feature(feature: &str) -> Self {
        TestMessage {
            message: format!("This is a test endpoint for {feature}"),
        }
    }
}

/// Body of every `GET <prefix>/fake_audio` response.
#[derive(Debug, Serialize)]
pub struct FakeAudio {
    pub audio_url: Option<&'static str>,
}

/// Mounts every feature router at its fixed prefix. Mounting is
/// unconditional; unmatched paths and wrong methods fall through to
/// axum's default 404/405 handling.
pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .nest("/api/cv", cv::router())
        .nest("/api/voice", voice::router())
        .nest("/api/education", education::router())
        .nest("/api/proposals", proposals::router())
        .nest("/api/payments", payments::router())
}
