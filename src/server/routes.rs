use std::sync::Arc;

use axum::{
    extract::{Query, State as AxumState},
    Json,
};
use serde::Deserialize;
use tracing::{debug, info};

use super::{error::ProxyError, state::State};
use crate::models::SheetsValuesBody;

#[derive(Deserialize)]
pub struct SheetsQuery {
    range: Option<String>,
}

/// GET /api/sheets?range=<A1>
///
/// Transmet la requête à Google Sheets avec les identifiants du serveur.
pub async fn sheets_handler(
    AxumState(state): AxumState<Arc<State>>,
    Query(query): Query<SheetsQuery>,
) -> Result<Json<SheetsValuesBody>, ProxyError> {
    let sheets = state.sheets.as_ref().ok_or(ProxyError::MissingConfiguration)?;

    let range = query
        .range
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| state.config.default_range.clone());
    debug!(range = %range, "Proxying sheets request");

    let values = sheets.fetch_values(&range).await?;
    info!(range = %range, rows = values.len(), "Sheets request served");

    Ok(Json(SheetsValuesBody { values }))
}
