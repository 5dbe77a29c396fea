// SPDX-License-Identifier: Apache-2.0

use portal_model::{Dataset, DonationRecord};

const DEFAULT_INTERN: (&str, &str, u64) = ("Shombhunath Karan", "shombhunath2025", 6500);

const DEFAULT_LEADERBOARD: [(&str, &str, u64); 10] = [
    ("Priya Sharma", "priya2025", 12500),
    ("Rahul Kumar", "rahul2025", 9800),
    ("Aanya Patel", "aanya2025", 7200),
    ("Shombhunath", "shombhunath2025", 6500),
    ("Vikram Singh", "vikram2025", 5200),
    ("Meera Reddy", "meera2025", 4800),
    ("Arjun Malhotra", "arjun2025", 4200),
    ("Zara Khan", "zara2025", 3800),
    ("Anjali Desai", "anjali2025", 3200),
    ("Krishna Verma", "krishna2025", 2800),
];

/// Built-in dataset served whenever the backing file cannot be used.
#[must_use]
pub fn default_dataset() -> Dataset {
    let (name, code, donations) = DEFAULT_INTERN;
    Dataset {
        intern: DonationRecord::new(name, code, donations),
        leaderboard: DEFAULT_LEADERBOARD
            .iter()
            .map(|(name, code, donations)| DonationRecord::new(*name, *code, *donations))
            .collect(),
    }
}
