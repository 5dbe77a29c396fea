// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    Empty(&'static str),
    Record { index: usize, reason: Box<ValidationError> },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(name) => write!(f, "{name} must not be empty"),
            Self::Record { index, reason } => write!(f, "leaderboard[{index}]: {reason}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A named fundraiser with a referral code and a whole-unit donation total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DonationRecord {
    pub name: String,
    pub referral_code: String,
    pub donations: u64,
}

impl DonationRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, referral_code: impl Into<String>, donations: u64) -> Self {
        Self {
            name: name.into(),
            referral_code: referral_code.into(),
            donations,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Empty("name"));
        }
        Ok(())
    }
}

/// A record annotated with its 1-based leaderboard position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    pub rank: usize,
    #[serde(flatten)]
    pub record: DonationRecord,
}

impl RankedEntry {
    #[must_use]
    pub fn donations(&self) -> u64 {
        self.record.donations
    }
}

/// The backing document: one primary intern plus the leaderboard list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dataset {
    pub intern: DonationRecord,
    pub leaderboard: Vec<DonationRecord>,
}

impl Dataset {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.intern.validate()?;
        for (index, record) in self.leaderboard.iter().enumerate() {
            record.validate().map_err(|reason| ValidationError::Record {
                index,
                reason: Box::new(reason),
            })?;
        }
        Ok(())
    }
}
