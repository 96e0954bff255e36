//! Sample handlers: submit, list, CSV export.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Extension, Json,
};
use influence_core::{Sample, SampleForm};
use influence_ledger::relay_accepted;
use influence_relay::RelayStatus;
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct SubmitResponse {
    pub position: usize,
    pub relay: RelayStatus,
    pub message: String,
}

/// POST /api/v1/samples
///
/// The sample is appended under the session lock; the relay runs after the
/// lock is dropped so a slow webhook never blocks other requests. A body
/// that is not a readable form gets the same `validation_error` envelope as
/// a form that fails intake.
pub(super) async fn submit_sample(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<SampleForm>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<SubmitResponse>>), ApiError> {
    let Json(form) = payload.map_err(|e| {
        tracing::warn!(error = %e.body_text(), "unreadable sample body");
        ApiError::new(&req_id.0, "validation_error", e.body_text())
    })?;

    let (accepted, target) = {
        let mut session = state.session.lock().await;
        let accepted = session
            .accept(form)
            .map_err(|e| ApiError::new(&req_id.0, "validation_error", e.to_string()))?;
        (accepted, session.relay_target())
    };

    let relay = relay_accepted(target.as_deref(), &accepted.sample).await;
    let message = relay.user_message();

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            data: SubmitResponse {
                position: accepted.position,
                relay,
                message,
            },
            meta: ResponseMeta::new(req_id.0),
        }),
    ))
}

/// GET /api/v1/samples
pub(super) async fn list_samples(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<Sample>>> {
    let data = state.session.lock().await.ledger().samples().to_vec();
    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}

/// GET /api/v1/samples/export
pub(super) async fn export_samples(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<impl IntoResponse, ApiError> {
    let export = state.session.lock().await.export_csv().map_err(|e| {
        tracing::error!(error = %e, "csv export failed");
        ApiError::new(req_id.0, "internal_error", "csv export failed")
    })?;

    let disposition = format!("attachment; filename=\"{}\"", export.file_name);
    Ok((
        [
            (header::CONTENT_TYPE, export.mime_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.bytes,
    ))
}
