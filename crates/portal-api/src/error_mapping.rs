// SPDX-License-Identifier: Apache-2.0

use crate::{ApiError, ApiErrorCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiErrorMapping {
    pub status_code: u16,
}

#[must_use]
pub fn map_error(error: &ApiError) -> ApiErrorMapping {
    let status_code = match error.code {
        ApiErrorCode::MissingQueryParameter | ApiErrorCode::InvalidQueryParameter => 400,
        ApiErrorCode::NotFound => 404,
        ApiErrorCode::Internal => 500,
    };
    ApiErrorMapping { status_code }
}
