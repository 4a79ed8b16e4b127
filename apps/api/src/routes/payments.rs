use axum::{routing::get, Json, Router};

use crate::routes::{FakeAudio, TestMessage, FAKE_AUDIO_URL};

const FEATURE: &str = "payments";

/// GET /api/payments/test
async fn test_payments() -> Json<TestMessage> {
    Json(TestMessage::for_feature(FEATURE))
}

/// GET /api/payments/fake_audio
///
/// Carried over from the voice route placeholder; the audio branch never
/// matches here, so the response is always a null `audio_url`.
async fn fake_audio() -> Json<FakeAudio> {
    let audio_url = if FEATURE == "voice" {
        Some(FAKE_AUDIO_URL)
    } else {
        None
    };
    Json(FakeAudio { audio_url })
}

pub fn router() -> Router {
    Router::new()
        .route("/test", get(test_payments))
        .route("/fake_audio", get(fake_audio))
}
