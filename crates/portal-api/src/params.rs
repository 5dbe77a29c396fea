// SPDX-License-Identifier: Apache-2.0

use crate::errors::ApiError;
use portal_model::{create_identity, Identity};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityParams {
    pub identity: Identity,
}

/// Only presence is checked; any non-blank name is a valid demo login.
pub fn parse_identity_params(
    query: &BTreeMap<String, String>,
) -> Result<IdentityParams, ApiError> {
    let raw = query
        .get("name")
        .ok_or_else(|| ApiError::missing_param("name"))?;
    let identity = create_identity(raw).map_err(|_| ApiError::missing_param("name"))?;
    Ok(IdentityParams { identity })
}
