use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::ApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize)]
pub struct SetExpiryRequest {
    #[serde(default)]
    pub expiry_date: String,
}

/// POST /api/admin/set-expiry — unguarded by design: whoever can reach
/// this endpoint can move the lookup window.
pub async fn set_expiry(
    State(state): State<ServerState>,
    body: Result<Json<SetExpiryRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(req) = body.map_err(|_| ApiError::bad_request("Invalid request format."))?;
    state.admin.set_expiry(&req.expiry_date).await?;
    Ok(Json(json!({ "success": true, "message": "Expiry date has been saved." })))
}
