// SPDX-License-Identifier: Apache-2.0

use crate::record::{DonationRecord, ValidationError};
use serde::{Deserialize, Serialize};

pub const REFERRAL_SUFFIX: &str = "2025";
pub const SIMULATED_DONATION_BASE: u64 = 1000;
pub const SIMULATED_DONATION_SPAN: u64 = 9000;

/// Session-local pseudo-identity produced by the demo login.
///
/// Nothing checks referral codes for uniqueness and nothing is persisted; the
/// identity lives exactly as long as the session holding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub name: String,
    pub referral_code: String,
}

impl Identity {
    #[must_use]
    pub fn into_record(self, donations: u64) -> DonationRecord {
        DonationRecord {
            name: self.name,
            referral_code: self.referral_code,
            donations,
        }
    }

    /// Demo dashboard total for this identity. See [`simulated_donations`].
    #[must_use]
    pub fn simulated_donations(&self) -> u64 {
        simulated_donations(&self.name)
    }
}

pub fn create_identity(full_name: &str) -> Result<Identity, ValidationError> {
    let name = full_name.trim();
    if name.is_empty() {
        return Err(ValidationError::Empty("full_name"));
    }
    Ok(Identity {
        name: name.to_string(),
        referral_code: referral_code_for(name),
    })
}

#[must_use]
pub fn referral_code_for(full_name: &str) -> String {
    let mut code: String = full_name
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    code.push_str(REFERRAL_SUFFIX);
    code
}

/// Placeholder total derived from the name so the dashboard has data to show.
///
/// Sums UTF-16 code units, the unit browsers expose through `charCodeAt`, so a
/// given name maps to the same total on every surface. Not a business rule.
#[must_use]
pub fn simulated_donations(name: &str) -> u64 {
    let hash = name
        .encode_utf16()
        .fold(0_u64, |acc, unit| acc.wrapping_add(u64::from(unit)));
    SIMULATED_DONATION_BASE + hash % SIMULATED_DONATION_SPAN
}
