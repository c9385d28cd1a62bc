//! CSV and PDF export endpoints.
//!
//! Files are written server-side; the response carries the path only.

use super::common::records_for_request;
use crate::error::ApiResult;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use serde::Serialize;
use soil_export::ExportFormat;

/// Export response.
#[derive(Debug, Serialize)]
pub struct ExportResponse {
    /// Human-readable status message.
    pub message: String,
    /// Path of the written file.
    pub path: String,
    /// Data rows written.
    pub rows: usize,
}

async fn export(state: &AppState, format: ExportFormat) -> ApiResult<Json<ExportResponse>> {
    let records = records_for_request(state).await?;
    let exported = state.exporter.export(format, records).await?;

    Ok(Json(ExportResponse {
        message: format!("{} exported successfully", format.label()),
        path: exported.path.display().to_string(),
        rows: exported.rows,
    }))
}

/// GET /api/export/csv
pub async fn export_csv(State(state): State<AppState>) -> ApiResult<Json<ExportResponse>> {
    export(&state, ExportFormat::Csv).await
}

/// GET /api/export/pdf
pub async fn export_pdf(State(state): State<AppState>) -> ApiResult<Json<ExportResponse>> {
    export(&state, ExportFormat::Pdf).await
}
