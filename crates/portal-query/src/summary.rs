// SPDX-License-Identifier: Apache-2.0

use portal_model::RankedEntry;
use serde::{Deserialize, Serialize};

/// Aggregates shown above the leaderboard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardSummary {
    pub participants: usize,
    pub total_raised: u64,
    pub top_donation: Option<u64>,
    pub average_donation: Option<u64>,
}

#[must_use]
pub fn summarize(entries: &[RankedEntry]) -> LeaderboardSummary {
    let participants = entries.len();
    let total_raised = entries
        .iter()
        .fold(0_u64, |acc, e| acc.saturating_add(e.donations()));
    let top_donation = entries.iter().map(RankedEntry::donations).max();
    let average_donation = rounded_average(total_raised, participants);
    LeaderboardSummary {
        participants,
        total_raised,
        top_donation,
        average_donation,
    }
}

fn rounded_average(total: u64, count: usize) -> Option<u64> {
    if count == 0 {
        return None;
    }
    let count = count as u64;
    // round half up without going through floats
    Some(total / count + u64::from((total % count).saturating_mul(2) >= count))
}
