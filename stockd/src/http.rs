//! Axum router and request handlers.
//!
//! Control flow is a straight line: request → router → handler → catalog
//! lookup → JSON response. Handlers never write shared state; the catalog is
//! read-only behind an `Arc`, so no locking is involved.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use stockd_core::{Stock, StockCatalog, StockdError};

/// Shared read-only state for all handlers.
pub type AppState = Arc<StockCatalog>;

/// Build the service router over the given catalog.
pub fn router(catalog: AppState) -> Router {
    Router::new()
        .route("/api/stocks", get(list_stocks))
        .route("/api/stocks/{symbol}", get(get_stock))
        .route("/api/test", get(test_probe))
        .with_state(catalog)
}

/// HTTP-facing wrapper around [`StockdError`].
///
/// `NotFound` maps to 404 with the fixed message clients key on; any other
/// variant would be a server bug and maps to 500 without leaking detail.
pub struct ApiError(StockdError);

impl From<StockdError> for ApiError {
    fn from(err: StockdError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            StockdError::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "Stock not found" })),
            )
                .into_response(),
            err => {
                tracing::error!(%err, "unexpected handler error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

/// GET /api/stocks — the entire catalog as a JSON object keyed by symbol.
async fn list_stocks(State(catalog): State<AppState>) -> Json<BTreeMap<String, Stock>> {
    Json(catalog.all().clone())
}

/// GET /api/stocks/{symbol} — a single record, case-insensitive on the symbol.
async fn get_stock(
    State(catalog): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<Stock>, ApiError> {
    let stock = catalog.get(&symbol)?;
    Ok(Json(stock.clone()))
}

/// GET /api/test — fixed acknowledgement used as the health-check and as the
/// self-ping target.
async fn test_probe() -> Json<Value> {
    tracing::info!("health probe hit");
    Json(json!({ "message": "Test API hit" }))
}
