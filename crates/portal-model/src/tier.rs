// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardTier {
    Locked,
    Bronze,
    Silver,
    Gold,
}

impl RewardTier {
    /// Earned tiers in ascending threshold order.
    pub const MILESTONES: [RewardTier; 3] = [Self::Bronze, Self::Silver, Self::Gold];

    #[must_use]
    pub const fn threshold(self) -> u64 {
        match self {
            Self::Locked => 0,
            Self::Bronze => 1000,
            Self::Silver => 5000,
            Self::Gold => 10_000,
        }
    }

    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Locked => Some(Self::Bronze),
            Self::Bronze => Some(Self::Silver),
            Self::Silver => Some(Self::Gold),
            Self::Gold => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Locked => "locked",
            Self::Bronze => "bronze",
            Self::Silver => "silver",
            Self::Gold => "gold",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Locked => "Locked",
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Locked => "Keep going!",
            Self::Bronze => "First milestone achieved!",
            Self::Silver => "Halfway there!",
            Self::Gold => "Top performer!",
        }
    }
}

impl Display for RewardTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display state of a single milestone card, computed per milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneStatus {
    Unlocked,
    Progress,
    Locked,
}

impl MilestoneStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unlocked => "Unlocked",
            Self::Progress => "In Progress",
            Self::Locked => "Locked",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}
