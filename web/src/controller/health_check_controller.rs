use crate::controller::ApiResponse;
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct Health {
    status: &'static str,
    subscribers: usize,
}

/// GET liveness plus the number of connected event streams.
pub async fn health_check(State(app_state): State<AppState>) -> impl IntoResponse {
    let subscribers = app_state.broker.subscriber_count().await;
    Json(ApiResponse::new(
        StatusCode::OK.into(),
        Health {
            status: "healthy",
            subscribers,
        },
    ))
}
