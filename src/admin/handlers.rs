use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::admin::error::AdminError;
use crate::http::server::AppState;
use crate::mocks::Mock;
use crate::observability::metrics;

/// `POST /addMock`: parse, validate and append one mock, echoing it back.
pub async fn add_mock(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Mock>, AdminError> {
    let mock: Mock = serde_json::from_slice(&body).map_err(AdminError::Malformed)?;
    mock.validate()?;

    state.registry.register(mock.clone());
    let count = state.registry.len();
    metrics::record_mock_count(count);
    tracing::info!(
        mock_id = %mock.id,
        method = %mock.request.method,
        url = %mock.request.url,
        registered = count,
        "Mock added"
    );

    Ok(Json(mock))
}

/// `GET /mocks`
pub async fn list_mocks(State(state): State<AppState>) -> Result<Response, AdminError> {
    json_response(state.registry.list().as_slice())
}

/// `GET /recordedRequests`
pub async fn recorded_requests(State(state): State<AppState>) -> Result<Response, AdminError> {
    json_response(state.ledger.snapshot().as_slice())
}

fn json_response<T: Serialize + ?Sized>(value: &T) -> Result<Response, AdminError> {
    let body = serde_json::to_vec(value).map_err(AdminError::Serialization)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
