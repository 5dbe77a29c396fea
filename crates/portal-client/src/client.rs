// SPDX-License-Identifier: Apache-2.0

use crate::fallback::fallback_leaderboard;
use portal_model::RankedEntry;
use portal_query::{summarize, LeaderboardSummary};
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::{instrument, warn};

pub const ENV_API_URL: &str = "PORTAL_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ClientError {
    Transport(String),
    Status(u16),
    Decode(String),
}

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(message) => write!(f, "request failed: {message}"),
            Self::Status(code) => write!(f, "HTTP error! status: {code}"),
            Self::Decode(message) => write!(f, "invalid response body: {message}"),
        }
    }
}

impl std::error::Error for ClientError {}

/// Leaderboard ready to render, with a banner message when it is not live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardView {
    pub entries: Vec<RankedEntry>,
    pub summary: LeaderboardSummary,
    pub warning: Option<String>,
}

impl LeaderboardView {
    fn live(entries: Vec<RankedEntry>) -> Self {
        Self {
            summary: summarize(&entries),
            entries,
            warning: None,
        }
    }

    fn fallback(err: &ClientError) -> Self {
        let entries = fallback_leaderboard();
        Self {
            summary: summarize(&entries),
            entries,
            warning: Some(format!("Using fallback data (Backend error: {err})")),
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.warning.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct PortalClient {
    base_url: String,
    http: reqwest::Client,
}

impl PortalClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        let base = std::env::var(ENV_API_URL)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(base)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(
        name = "portal_client_fetch_leaderboard",
        skip(self),
        fields(base_url = %self.base_url)
    )]
    pub async fn try_fetch_leaderboard(&self) -> Result<Vec<RankedEntry>, ClientError> {
        let url = format!("{}/api/leaderboard", self.base_url);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(ClientError::Status(resp.status().as_u16()));
        }
        resp.json::<Vec<RankedEntry>>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Never fails: backend trouble swaps in the local list plus a warning.
    pub async fn fetch_leaderboard(&self) -> LeaderboardView {
        match self.try_fetch_leaderboard().await {
            Ok(entries) => LeaderboardView::live(entries),
            Err(err) => {
                warn!(error = %err, "leaderboard fetch failed; using fallback data");
                LeaderboardView::fallback(&err)
            }
        }
    }
}
