use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::ModuleStatusResponse;

use super::AppState;

/// Answers whether a named host module is active for this deployment.
pub async fn get_module_status(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> impl IntoResponse {
    let active = state.modules.is_active(&key);
    Json(ModuleStatusResponse { key, active }).into_response()
}
