use super::AppState;
use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{error, info};

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
    pub version: String,
}

/// `GET /api/health`
pub async fn health(State(state): State<AppState>) -> Response {
    let body = HealthStatus {
        status: "ok",
        timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        version: state.config.site.release.clone(),
    };
    (
        [(header::CACHE_CONTROL, "public, max-age=60")],
        Json(body),
    )
        .into_response()
}

/// `POST /api/analytics`. Any readable body is accepted; bodies that are
/// not JSON are recorded as `null`.
pub async fn analytics(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            error!(error = %rejection, "Failed to read analytics event");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "ok": false }))).into_response();
        }
    };

    let event = parse_event(&body);
    let event_name = event.get("event").and_then(Value::as_str).unwrap_or("unknown");
    if state.config.analytics.enabled {
        info!(
            target: "forpublic::analytics",
            event_id = %uuid::Uuid::new_v4(),
            event = event_name,
            payload = %event,
            "Analytics event"
        );
    } else {
        tracing::debug!(event = event_name, "Analytics disabled, event dropped");
    }

    Json(json!({ "ok": true })).into_response()
}

fn parse_event(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap_or(Value::Null)
}
