use axum::extract::State;
use axum::Json;

use crate::errors::ApiError;
use crate::routes::ServerState;
use service::status::PortalStatus;

/// GET /api/status — read-only snapshot for the pages and for operators.
pub async fn status(State(state): State<ServerState>) -> Result<Json<PortalStatus>, ApiError> {
    Ok(Json(state.status.status().await?))
}
