use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::response::Json;
use lib::service::CommonService;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info_span, warn, Instrument};
use uuid::Uuid;


#[derive(Debug, Deserialize, Default)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, rename = "presetEmotion")]
    pub preset_emotion: Option<String>,
}


fn build_error_response(message: &str) -> Response {
    let body = json!({
        "success": false,
        "message": message
    });
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

fn build_success_response<T: Serialize>(body: &T) -> Response {
    Json(body).into_response()
}


pub async fn health(State(service): State<CommonService>) -> Response {
    build_success_response(&json!({
        "status": "ok",
        "service": service.service_name,
        "use_transformers": service.analysis.model_capable(),
    }))
}


pub async fn analyze(
    State(service): State<CommonService>,
    Json(params): Json<Value>
) -> Response {
    let request_id = Uuid::new_v4();

    // `null` body is treated like `{}`
    let request = if params.is_null() {
        AnalyzeRequest::default()
    } else {
        match serde_json::from_value::<AnalyzeRequest>(params) {
            Ok(request) => request,
            Err(error) => {
                warn!(%request_id, %error, "Rejecting malformed analyze request");
                return build_error_response(&format!("Invalid request body: {}", error));
            },
        }
    };

    let text = request.text.unwrap_or_default();
    debug!(%request_id, text_length = text.chars().count(), preset = ?request.preset_emotion, "Analyze request");

    let result = service.analysis
        .analyze(&text, request.preset_emotion.as_deref())
        .instrument(info_span!("analyze", %request_id))
        .await;

    build_success_response(&result)
}
