// SPDX-License-Identifier: Apache-2.0

use portal_model::{create_identity, DonationRecord, Identity, ValidationError};
use portal_query::{classify, milestone_cards, MilestoneCard, TierStanding};
use serde::Serialize;

/// Current demo login. Passed explicitly to whatever needs the user; dropping
/// or logging out discards the identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    identity: Identity,
}

impl Session {
    pub fn login(full_name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            identity: create_identity(full_name)?,
        })
    }

    #[must_use]
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn logout(self) {}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub record: DonationRecord,
    pub standing: TierStanding,
    pub milestones: Vec<MilestoneCard>,
}

#[must_use]
pub fn dashboard(session: &Session) -> DashboardView {
    let identity = session.identity().clone();
    let donations = identity.simulated_donations();
    DashboardView {
        record: identity.into_record(donations),
        standing: classify(donations),
        milestones: milestone_cards(donations),
    }
}
