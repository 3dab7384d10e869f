//! Displayed prize inventory and its reconciliation against service rows.
//!
//! The client never decrements counts. Every change comes from a fetch; a rank
//! missing from a fetch keeps a fallback value.

use crate::contract::{PrizeRow, Rank};

/// Shown for rank 2 until the service reports a count.
pub const SECOND_PRIZE_FALLBACK: i64 = 40;
/// Shown for rank 3 until the service reports a count.
pub const THIRD_PRIZE_FALLBACK: i64 = 60;
/// Rank 1 is not persisted; its badge always shows this count.
pub const FIRST_PRIZE_COUNT: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrizeInventory {
    pub second: i64,
    pub third: i64,
}

impl Default for PrizeInventory {
    fn default() -> Self {
        Self {
            second: SECOND_PRIZE_FALLBACK,
            third: THIRD_PRIZE_FALLBACK,
        }
    }
}

impl PrizeInventory {
    pub fn new(second: i64, third: i64) -> Self {
        Self { second, third }
    }

    /// Initial load: ranks absent from `rows` take the fixed fallbacks.
    pub fn from_rows(rows: &[PrizeRow]) -> Self {
        Self::default().reconciled(rows)
    }

    /// Refresh: ranks absent from `rows` keep the currently displayed value.
    pub fn reconciled(&self, rows: &[PrizeRow]) -> Self {
        Self {
            second: remaining_for(rows, Rank::SECOND).unwrap_or(self.second),
            third: remaining_for(rows, Rank::THIRD).unwrap_or(self.third),
        }
    }

    pub fn remaining(&self, rank: Rank) -> Option<i64> {
        match rank {
            Rank::FIRST => Some(FIRST_PRIZE_COUNT),
            Rank::SECOND => Some(self.second),
            Rank::THIRD => Some(self.third),
            _ => None,
        }
    }
}

fn remaining_for(rows: &[PrizeRow], rank: Rank) -> Option<i64> {
    rows.iter()
        .find(|row| row.rank == rank)
        .map(|row| row.remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(rank: i32, remaining: i64) -> PrizeRow {
        PrizeRow {
            rank: Rank(rank),
            remaining,
        }
    }

    #[test]
    fn initial_load_uses_fixed_fallbacks_for_missing_ranks() {
        let inventory = PrizeInventory::from_rows(&[row(3, 12)]);
        assert_eq!(inventory, PrizeInventory::new(SECOND_PRIZE_FALLBACK, 12));

        let empty = PrizeInventory::from_rows(&[]);
        assert_eq!(empty, PrizeInventory::default());
    }

    #[test]
    fn refresh_falls_back_to_previous_values_per_rank() {
        let before = PrizeInventory::new(5, 9);
        let after = before.reconciled(&[row(3, 8)]);
        assert_eq!(after, PrizeInventory::new(5, 8));
    }

    #[test]
    fn unrelated_ranks_are_ignored() {
        let before = PrizeInventory::new(5, 9);
        let after = before.reconciled(&[row(1, 100), row(4, 2), row(2, 4)]);
        assert_eq!(after, PrizeInventory::new(4, 9));
    }

    #[test]
    fn first_matching_row_wins() {
        let inventory = PrizeInventory::from_rows(&[row(2, 7), row(2, 1)]);
        assert_eq!(inventory.second, 7);
    }

    #[test]
    fn service_counts_are_taken_as_reported() {
        // The service is the source of truth, even when a count goes back up.
        let before = PrizeInventory::new(5, 9);
        let after = before.reconciled(&[row(2, 6), row(3, 9)]);
        assert_eq!(after, PrizeInventory::new(6, 9));
    }

    #[test]
    fn remaining_reports_fixed_first_prize() {
        let inventory = PrizeInventory::new(3, 4);
        assert_eq!(inventory.remaining(Rank::FIRST), Some(FIRST_PRIZE_COUNT));
        assert_eq!(inventory.remaining(Rank::SECOND), Some(3));
        assert_eq!(inventory.remaining(Rank::THIRD), Some(4));
        assert_eq!(inventory.remaining(Rank::NONE), None);
    }
}
