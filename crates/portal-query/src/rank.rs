// SPDX-License-Identifier: Apache-2.0

use portal_model::{DonationRecord, Medal, RankedEntry};
use std::cmp::Ordering;

/// Orders records by donations descending and assigns dense 1-based ranks.
///
/// Equal totals fall back to name, then referral code, both ascending, so the
/// result never depends on input order.
#[must_use]
pub fn rank(records: &[DonationRecord]) -> Vec<RankedEntry> {
    let mut sorted: Vec<&DonationRecord> = records.iter().collect();
    sorted.sort_by(|a, b| leaderboard_order(a, b));
    sorted
        .into_iter()
        .enumerate()
        .map(|(index, record)| RankedEntry {
            rank: index + 1,
            record: record.clone(),
        })
        .collect()
}

fn leaderboard_order(a: &DonationRecord, b: &DonationRecord) -> Ordering {
    b.donations
        .cmp(&a.donations)
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.referral_code.cmp(&b.referral_code))
}

#[must_use]
pub fn podium_medal(rank: usize) -> Option<Medal> {
    match rank {
        1 => Some(Medal::Gold),
        2 => Some(Medal::Silver),
        3 => Some(Medal::Bronze),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, donations: u64) -> DonationRecord {
        DonationRecord::new(name, format!("{}2025", name.to_lowercase()), donations)
    }

    #[test]
    fn ranks_descending_by_donations() {
        let ranked = rank(&[rec("Anjali", 8700), rec("Priya", 12500), rec("Rahul", 9800)]);
        let order: Vec<_> = ranked
            .iter()
            .map(|e| (e.rank, e.record.donations))
            .collect();
        assert_eq!(order, vec![(1, 12500), (2, 9800), (3, 8700)]);
    }

    #[test]
    fn ties_break_by_name_and_keep_dense_ranks() {
        let ranked = rank(&[rec("Zara", 500), rec("Arjun", 500), rec("Meera", 900)]);
        let names: Vec<_> = ranked.iter().map(|e| e.record.name.as_str()).collect();
        assert_eq!(names, vec!["Meera", "Arjun", "Zara"]);
        let ranks: Vec<_> = ranked.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn empty_input_ranks_to_empty_output() {
        assert!(rank(&[]).is_empty());
    }

    #[test]
    fn podium_covers_top_three_only() {
        assert_eq!(podium_medal(1), Some(Medal::Gold));
        assert_eq!(podium_medal(3), Some(Medal::Bronze));
        assert_eq!(podium_medal(4), None);
        assert_eq!(podium_medal(0), None);
    }
}
