use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

use crate::geocode::{enrich_features, GeocodeError};

use super::state::AppState;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
}

/// Every relay failure surfaces as a 500 carrying only the message.
pub(super) struct ApiError(GeocodeError);

impl From<GeocodeError> for ApiError {
    fn from(e: GeocodeError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.0.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

// ─── GET /{query} ────────────────────────────────────────────────

pub(super) async fn search(
    State(state): State<Arc<AppState>>,
    Path(query): Path<String>,
    RawQuery(raw): RawQuery,
) -> Result<Json<Value>, ApiError> {
    let start = Instant::now();
    let params = query_pairs(raw.as_deref());

    match relay(state, query.clone(), params).await {
        Ok((doc, features)) => {
            tracing::info!(
                %query,
                features,
                elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
                "GET /{{query}} -> 200",
            );
            Ok(Json(doc))
        }
        Err(e) => {
            tracing::error!(%query, error = %e, "GET /{{query}} -> 500");
            Err(e.into())
        }
    }
}

/// Forward to the provider, then enrich the returned document.
async fn relay(
    state: Arc<AppState>,
    query: String,
    params: Vec<(String, String)>,
) -> Result<(Value, usize), GeocodeError> {
    let mut doc = tokio::task::spawn_blocking(move || state.provider.search(&query, &params)).await??;
    let features = enrich_features(&mut doc)?;
    Ok((doc, features))
}

fn query_pairs(raw: Option<&str>) -> Vec<(String, String)> {
    match raw {
        Some(q) => url::form_urlencoded::parse(q.as_bytes()).into_owned().collect(),
        None => Vec::new(),
    }
}
