// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

pub mod error_mapping;
pub mod errors;
pub mod params;
pub mod responses;

pub use error_mapping::{map_error, ApiErrorMapping};
pub use errors::{ApiError, ApiErrorCode};
pub use params::{parse_identity_params, IdentityParams};
pub use responses::{
    HealthResponse, IdentityPreview, RewardsResponse, ServiceInfo, HEALTH_MESSAGE, SERVICE_NAME,
};

pub const CRATE_NAME: &str = "portal-api";

pub const ROUTE_ROOT: &str = "/";
pub const ROUTE_HEALTH: &str = "/health";
pub const ROUTE_INTERN: &str = "/api/intern";
pub const ROUTE_INTERN_REWARDS: &str = "/api/intern/rewards";
pub const ROUTE_LEADERBOARD: &str = "/api/leaderboard";
pub const ROUTE_LEADERBOARD_SUMMARY: &str = "/api/leaderboard/summary";
pub const ROUTE_IDENTITY: &str = "/api/identity";
