//! Soil record listing endpoint.

use super::common::records_for_request;
use crate::error::ApiResult;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use soil_core::SoilRecord;

/// GET /api/soil_data
pub async fn get_soil_data(State(state): State<AppState>) -> ApiResult<Json<Vec<SoilRecord>>> {
    let records = records_for_request(&state).await?;
    Ok(Json(records))
}
