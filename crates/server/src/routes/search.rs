use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::errors::ApiError;
use crate::routes::ServerState;
use service::errors::ServiceError;

/// POST /api/search — the expiry gate runs before any body validation,
/// then the lookup service owns the ordering of the remaining checks.
pub async fn search(
    State(state): State<ServerState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    if state.expiry.is_expired().await? {
        return Err(ServiceError::Expired.into());
    }

    let Json(body) = body.map_err(|_| ApiError::bad_request("Invalid request format."))?;
    let fields = match body.as_object() {
        Some(map) if !map.is_empty() => map,
        _ => return Err(ApiError::bad_request("Request data is missing.")),
    };
    let student_id = fields.get("student_id").and_then(Value::as_str).unwrap_or("");
    let name = fields.get("name").and_then(Value::as_str).unwrap_or("");

    let record = state.lookup.search(student_id, name).await?;
    Ok(Json(json!({ "success": true, "data": record })))
}
