use crate::domain::model::{parse_number, to_lotto_number, LottoTicket, NumberSet, PurchaseAmount};
use crate::utils::error::{LottoError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Miss,
}

impl Rank {
    /// Prize-paying ranks from the smallest prize to the largest.
    pub const WINNING: [Rank; 5] = [
        Rank::Fifth,
        Rank::Fourth,
        Rank::Third,
        Rank::Second,
        Rank::First,
    ];

    pub fn from_matches(match_count: usize, bonus_matched: bool) -> Self {
        match (match_count, bonus_matched) {
            (6, _) => Rank::First,
            (5, true) => Rank::Second,
            (5, false) => Rank::Third,
            (4, _) => Rank::Fourth,
            (3, _) => Rank::Fifth,
            _ => Rank::Miss,
        }
    }

    pub fn match_count(&self) -> usize {
        match self {
            Rank::First => 6,
            Rank::Second | Rank::Third => 5,
            Rank::Fourth => 4,
            Rank::Fifth => 3,
            Rank::Miss => 0,
        }
    }

    pub fn requires_bonus(&self) -> bool {
        matches!(self, Rank::Second)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeTable {
    pub first: u64,
    pub second: u64,
    pub third: u64,
    pub fourth: u64,
    pub fifth: u64,
}

impl Default for PrizeTable {
    fn default() -> Self {
        Self {
            first: 2_000_000_000,
            second: 30_000_000,
            third: 1_500_000,
            fourth: 50_000,
            fifth: 5_000,
        }
    }
}

impl PrizeTable {
    pub fn prize(&self, rank: Rank) -> u64 {
        match rank {
            Rank::First => self.first,
            Rank::Second => self.second,
            Rank::Third => self.third,
            Rank::Fourth => self.fourth,
            Rank::Fifth => self.fifth,
            Rank::Miss => 0,
        }
    }
}

/// The drawn numbers plus the bonus ball, which never repeats a drawn number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinningNumbers {
    numbers: NumberSet,
    bonus: u8,
}

impl WinningNumbers {
    pub fn new(numbers: NumberSet, bonus: impl Into<i64>) -> Result<Self> {
        let bonus = to_lotto_number(bonus.into())?;
        if numbers.contains(bonus) {
            return Err(LottoError::DuplicateBonusNumber { number: bonus });
        }
        Ok(Self { numbers, bonus })
    }

    pub fn parse_bonus(numbers: NumberSet, token: &str) -> Result<Self> {
        let bonus = parse_number(token)?;
        Self::new(numbers, bonus)
    }

    pub fn numbers(&self) -> &NumberSet {
        &self.numbers
    }

    pub fn bonus(&self) -> u8 {
        self.bonus
    }

    pub fn rank(&self, lotto: &NumberSet) -> Rank {
        Rank::from_matches(lotto.match_count(&self.numbers), lotto.contains(self.bonus))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinningStatistics {
    counts: BTreeMap<Rank, usize>,
    total_prize: u64,
}

impl WinningStatistics {
    pub fn tally(ticket: &LottoTicket, winning: &WinningNumbers, prizes: &PrizeTable) -> Self {
        let mut counts: BTreeMap<Rank, usize> = Rank::WINNING.iter().map(|&rank| (rank, 0)).collect();
        let mut total_prize: u64 = 0;

        for lotto in ticket.iter() {
            let rank = winning.rank(lotto);
            tracing::debug!("{} -> {:?}", lotto, rank);
            *counts.entry(rank).or_insert(0) += 1;
            total_prize = total_prize.saturating_add(prizes.prize(rank));
        }

        Self {
            counts,
            total_prize,
        }
    }

    pub fn count(&self, rank: Rank) -> usize {
        self.counts.get(&rank).copied().unwrap_or(0)
    }

    pub fn total_prize(&self) -> u64 {
        self.total_prize
    }

    /// Percentage of the purchase amount won back, rounded to one decimal.
    pub fn return_rate(&self, amount: &PurchaseAmount) -> f64 {
        let rate = self.total_prize as f64 / amount.amount() as f64 * 100.0;
        (rate * 10.0).round() / 10.0
    }
}
