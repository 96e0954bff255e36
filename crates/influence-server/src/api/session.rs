use axum::{extract::State, Extension, Json};
use influence_core::SessionContext;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

/// PUT /api/v1/session/context
///
/// Replaces the once-per-session answers. Samples already recorded keep the
/// values they were stored with.
pub(super) async fn put_context(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(context): Json<SessionContext>,
) -> Json<ApiResponse<SessionContext>> {
    state.session.lock().await.set_context(context.clone());
    tracing::info!(country = ?context.country, "session context updated");
    Json(ApiResponse {
        data: context,
        meta: ResponseMeta::new(req_id.0),
    })
}
