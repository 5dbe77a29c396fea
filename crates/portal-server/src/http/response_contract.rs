// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use portal_api::{map_error, ApiError};
use serde_json::json;

#[must_use]
pub(crate) fn api_error_status(err: &ApiError) -> StatusCode {
    StatusCode::from_u16(map_error(err).status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

#[must_use]
pub(crate) fn api_error_response(err: ApiError, request_id: &str) -> Response {
    let err = err.with_request_id(request_id);
    let status = api_error_status(&err);
    (status, Json(json!({"error": err}))).into_response()
}
