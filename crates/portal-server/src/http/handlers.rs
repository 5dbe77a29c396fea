// SPDX-License-Identifier: Apache-2.0

use crate::http::request_tracing::request_id_from;
use crate::http::response_contract::api_error_response;
use crate::AppState;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use portal_api::{
    parse_identity_params, ApiError, HealthResponse, IdentityPreview, RewardsResponse,
    ServiceInfo,
};
use portal_model::{DonationRecord, RankedEntry};
use portal_query::{rank, summarize, LeaderboardSummary};
use std::collections::BTreeMap;
use tracing::debug;

pub(crate) async fn root_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo::new(env!("CARGO_PKG_VERSION")))
}

pub(crate) async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

pub(crate) async fn intern_handler(State(state): State<AppState>) -> Json<DonationRecord> {
    let dataset = portal_store::load(state.source.as_ref()).await;
    Json(dataset.intern)
}

pub(crate) async fn intern_rewards_handler(
    State(state): State<AppState>,
) -> Json<RewardsResponse> {
    let dataset = portal_store::load(state.source.as_ref()).await;
    Json(RewardsResponse::for_record(dataset.intern))
}

pub(crate) async fn leaderboard_handler(State(state): State<AppState>) -> Json<Vec<RankedEntry>> {
    let dataset = portal_store::load(state.source.as_ref()).await;
    let ranked = rank(&dataset.leaderboard);
    debug!(entries = ranked.len(), "leaderboard ranked");
    Json(ranked)
}

pub(crate) async fn leaderboard_summary_handler(
    State(state): State<AppState>,
) -> Json<LeaderboardSummary> {
    let dataset = portal_store::load(state.source.as_ref()).await;
    Json(summarize(&rank(&dataset.leaderboard)))
}

pub(crate) async fn identity_handler(
    headers: HeaderMap,
    Query(query): Query<BTreeMap<String, String>>,
) -> Response {
    match parse_identity_params(&query) {
        Ok(params) => Json(IdentityPreview::for_identity(params.identity)).into_response(),
        Err(err) => api_error_response(err, &request_id_from(&headers)),
    }
}

pub(crate) async fn not_found_handler(headers: HeaderMap, uri: Uri) -> Response {
    api_error_response(ApiError::not_found(uri.path()), &request_id_from(&headers))
}
