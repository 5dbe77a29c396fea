// SPDX-License-Identifier: Apache-2.0

use portal_model::{DonationRecord, RankedEntry};

const FALLBACK_ROWS: [(&str, &str, u64); 8] = [
    ("Priya Sharma", "priya2025", 12500),
    ("Rahul Kumar", "rahul2025", 9800),
    ("Anjali Patel", "anjali2025", 8700),
    ("Shombhunath Karan", "shombhunath2025", 6500),
    ("Vikram Singh", "vikram2025", 5200),
    ("Meera Reddy", "meera2025", 4800),
    ("Arjun Malhotra", "arjun2025", 4200),
    ("Zara Khan", "zara2025", 3800),
];

/// Leaderboard rendered when the backend cannot be reached. Already ranked.
#[must_use]
pub fn fallback_leaderboard() -> Vec<RankedEntry> {
    FALLBACK_ROWS
        .iter()
        .enumerate()
        .map(|(index, (name, code, donations))| RankedEntry {
            rank: index + 1,
            record: DonationRecord::new(*name, *code, *donations),
        })
        .collect()
}
