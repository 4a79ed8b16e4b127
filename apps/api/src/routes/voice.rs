use axum::{routing::get, Json, Router};

use crate::routes::{FakeAudio, TestMessage};

const FEATURE: &str = "voice";

/// GET /api/voice/test
async fn test_voice() -> Json<TestMessage> {
    Json(TestMessage::for_feature(FEATURE))
}

/// GET /api/voice/fake_audio
///
/// Real synthesis is out of scope; every feature answers with a null
/// `audio_url` until the audio pipeline lands, voice included. The other
/// stub modules carry a dead self-name comparison copied from this
/// placeholder; repeating it here would make the branch live and break
/// the shared contract.
async fn fake_audio() -> Json<FakeAudio> {
    Json(FakeAudio { audio_url: None })
}

pub fn router() -> Router {
    Router::new()
        .route("/test", get(test_voice))
        .route("/fake_audio", get(fake_audio))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn voice_fake_audio_is_null_like_every_other_feature() {
        let Json(body) = fake_audio().await;
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "audio_url": null })
        );
    }

    #[tokio::test]
    async fn test_handler_names_voice() {
        let Json(body) = test_voice().await;
        assert_eq!(body.message, "This is a test endpoint for voice");
    }
}
