// SPDX-License-Identifier: Apache-2.0

use portal_model::{MilestoneStatus, RewardTier};
use serde::{Deserialize, Serialize};

/// Strict tier plus progress toward the next unearned tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierStanding {
    pub tier: RewardTier,
    pub next_tier: Option<RewardTier>,
    pub progress_fraction: f64,
}

#[must_use]
pub fn classify(donations: u64) -> TierStanding {
    let tier = RewardTier::MILESTONES
        .into_iter()
        .rev()
        .find(|t| donations >= t.threshold())
        .unwrap_or(RewardTier::Locked);
    let next_tier = tier.next();
    let progress_fraction =
        next_tier.map_or(1.0, |next| progress_fraction(donations, next.threshold()));
    TierStanding {
        tier,
        next_tier,
        progress_fraction,
    }
}

/// `min(donations / target, 1.0)`. A zero target is already reached.
#[must_use]
pub fn progress_fraction(donations: u64, target: u64) -> f64 {
    if target == 0 {
        return 1.0;
    }
    (donations as f64 / target as f64).min(1.0)
}

#[must_use]
pub fn progress_percent(donations: u64, target: u64) -> u8 {
    // fraction is clamped, so the rounded value fits 0..=100
    (progress_fraction(donations, target) * 100.0).round() as u8
}

#[must_use]
pub fn milestone_status(donations: u64, target: u64) -> MilestoneStatus {
    if donations >= target {
        MilestoneStatus::Unlocked
    } else if donations.saturating_mul(2) >= target {
        MilestoneStatus::Progress
    } else {
        MilestoneStatus::Locked
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneCard {
    pub tier: RewardTier,
    pub name: String,
    pub amount: u64,
    pub description: String,
    pub status: MilestoneStatus,
    pub progress_fraction: f64,
    pub progress_percent: u8,
}

/// One card per earnable tier, each judged on its own threshold.
#[must_use]
pub fn milestone_cards(donations: u64) -> Vec<MilestoneCard> {
    RewardTier::MILESTONES
        .into_iter()
        .map(|tier| {
            let amount = tier.threshold();
            MilestoneCard {
                tier,
                name: tier.label().to_string(),
                amount,
                description: tier.description().to_string(),
                status: milestone_status(donations, amount),
                progress_fraction: progress_fraction(donations, amount),
                progress_percent: progress_percent(donations, amount),
            }
        })
        .collect()
}
