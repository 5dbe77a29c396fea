// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod rank;
mod rewards;
mod summary;

pub use rank::{podium_medal, rank};
pub use rewards::{
    classify, milestone_cards, milestone_status, progress_fraction, progress_percent,
    MilestoneCard, TierStanding,
};
pub use summary::{summarize, LeaderboardSummary};

pub const CRATE_NAME: &str = "portal-query";
