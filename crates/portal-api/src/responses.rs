// SPDX-License-Identifier: Apache-2.0

use crate::{
    ROUTE_HEALTH, ROUTE_IDENTITY, ROUTE_INTERN, ROUTE_INTERN_REWARDS, ROUTE_LEADERBOARD,
    ROUTE_LEADERBOARD_SUMMARY,
};
use portal_model::{DonationRecord, Identity};
use portal_query::{classify, milestone_cards, MilestoneCard, TierStanding};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SERVICE_NAME: &str = "Fundraising Intern Portal API";
pub const HEALTH_MESSAGE: &str = "Fundraising Intern Portal API is running";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
            message: HEALTH_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
}

impl ServiceInfo {
    #[must_use]
    pub fn new(version: &str) -> Self {
        let endpoints = [
            ("health", ROUTE_HEALTH),
            ("intern", ROUTE_INTERN),
            ("internRewards", ROUTE_INTERN_REWARDS),
            ("leaderboard", ROUTE_LEADERBOARD),
            ("leaderboardSummary", ROUTE_LEADERBOARD_SUMMARY),
            ("identity", ROUTE_IDENTITY),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Self {
            message: SERVICE_NAME.to_string(),
            version: version.to_string(),
            endpoints,
        }
    }
}

/// Tier standing and milestone cards for one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardsResponse {
    pub record: DonationRecord,
    pub standing: TierStanding,
    pub milestones: Vec<MilestoneCard>,
}

impl RewardsResponse {
    #[must_use]
    pub fn for_record(record: DonationRecord) -> Self {
        let donations = record.donations;
        Self {
            record,
            standing: classify(donations),
            milestones: milestone_cards(donations),
        }
    }
}

/// What the dashboard would show right after a demo login with this name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityPreview {
    pub identity: Identity,
    pub donations: u64,
    pub standing: TierStanding,
    pub milestones: Vec<MilestoneCard>,
}

impl IdentityPreview {
    #[must_use]
    pub fn for_identity(identity: Identity) -> Self {
        let donations = identity.simulated_donations();
        Self {
            identity,
            donations,
            standing: classify(donations),
            milestones: milestone_cards(donations),
        }
    }
}
