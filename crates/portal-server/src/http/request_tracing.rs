// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::http::HeaderMap;
use std::sync::atomic::Ordering;

pub(crate) const REQUEST_ID_HEADER: &str = "x-request-id";
pub(crate) const CORRELATION_ID_HEADER: &str = "x-correlation-id";
const MAX_ID_LEN: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RequestTrace {
    pub request_id: String,
    pub correlation_id: Option<String>,
}

pub(crate) fn normalized_header_value(
    headers: &HeaderMap,
    key: &str,
    max_len: usize,
) -> Option<String> {
    let raw = headers.get(key)?.to_str().ok()?.trim();
    if raw.is_empty() || raw.len() > max_len {
        return None;
    }
    Some(raw.to_string())
}

pub(crate) fn make_request_id(state: &AppState) -> String {
    let id = state.request_id_seed.fetch_add(1, Ordering::Relaxed);
    format!("req-{id:016x}")
}

/// Reuses a caller-supplied request id, otherwise mints one.
#[must_use]
pub(crate) fn extract_request_trace(headers: &HeaderMap, state: &AppState) -> RequestTrace {
    RequestTrace {
        request_id: normalized_header_value(headers, REQUEST_ID_HEADER, MAX_ID_LEN)
            .unwrap_or_else(|| make_request_id(state)),
        correlation_id: normalized_header_value(headers, CORRELATION_ID_HEADER, MAX_ID_LEN),
    }
}

/// Request id as resolved by the tracing middleware.
pub(crate) fn request_id_from(headers: &HeaderMap) -> String {
    normalized_header_value(headers, REQUEST_ID_HEADER, MAX_ID_LEN)
        .unwrap_or_else(|| "req-unknown".to_string())
}
