use axum::{routing::get, Json, Router};

use crate::routes::{FakeAudio, TestMessage, FAKE_AUDIO_URL};

const FEATURE: &str = "education";

/// GET /api/education/test
async fn test_education() -> Json<TestMessage> {
    Json(TestMessage::for_feature(FEATURE))
}

/// GET /api/education/fake_audio
async fn fake_audio() -> Json<FakeAudio> {
    // Leftover voice route placeholder; never matches for education
    let audio_url = if FEATURE == "voice" {
        Some(FAKE_AUDIO_URL)
    } else {
        None
    };
    Json(FakeAudio { audio_url })
}

pub fn router() -> Router {
    Router::new()
        .route("/test", get(test_education))
        .route("/fake_audio", get(fake_audio))
}
