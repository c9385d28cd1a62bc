//! Shared handler helpers.

use crate::error::ApiResult;
use crate::state::AppState;
use soil_core::SoilRecord;

/// Fetch records for a request, applying the configured failure policy.
///
/// With `server.store_errors_as_empty` set, a store failure (already logged
/// by the data service) yields an empty list; otherwise it becomes an
/// error response.
pub async fn records_for_request(state: &AppState) -> ApiResult<Vec<SoilRecord>> {
    match state.data.fetch_all().await {
        Ok(records) => Ok(records),
        Err(e) if state.config.server.store_errors_as_empty => {
            tracing::warn!(
                kind = e.kind(),
                "Answering with empty soil data after store failure"
            );
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}
