use axum::{routing::get, Json, Router};

use crate::routes::{FakeAudio, TestMessage, FAKE_AUDIO_URL};

const FEATURE: &str = "proposals";

/// GET /api/proposals/test
async fn test_proposals() -> Json<TestMessage> {
    Json(TestMessage::for_feature(FEATURE))
}

/// GET /api/proposals/fake_audio
///
/// Leftover voice route placeholder; the comparison never matches for
/// proposals.
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
        .route("/test", get(test_proposals))
        .route("/fake_audio", get(fake_audio))
}
