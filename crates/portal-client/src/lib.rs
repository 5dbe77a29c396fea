// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Presentation-side access to the portal: an explicit login session, the
//! dashboard view it drives, and a leaderboard fetch that always yields
//! something to render.

mod client;
mod fallback;
mod session;

pub use client::{ClientError, LeaderboardView, PortalClient, DEFAULT_API_URL, ENV_API_URL};
pub use fallback::fallback_leaderboard;
pub use session::{dashboard, DashboardView, Session};

pub const CRATE_NAME: &str = "portal-client";
