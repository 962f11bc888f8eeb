#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::domain::ports::ConfigProvider;
use crate::domain::winning::{PrizeTable, Rank};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TICKET_PRICE: u64 = 1_000;
pub const DEFAULT_MAX_PURCHASE_AMOUNT: u64 = 100_000;
pub const MAX_ATTEMPTS_LIMIT: u32 = 100;

/// Effective rules for one game, after defaults, config file and CLI overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRules {
    pub ticket_price: u64,
    pub max_purchase_amount: Option<u64>,
    pub prizes: PrizeTable,
    pub max_attempts: Option<u32>,
    pub seed: Option<u64>,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            ticket_price: DEFAULT_TICKET_PRICE,
            max_purchase_amount: Some(DEFAULT_MAX_PURCHASE_AMOUNT),
            prizes: PrizeTable::default(),
            max_attempts: None,
            seed: None,
        }
    }
}

impl ConfigProvider for GameRules {
    fn ticket_price(&self) -> u64 {
        self.ticket_price
    }

    fn max_purchase_amount(&self) -> Option<u64> {
        self.max_purchase_amount
    }

    fn prize_table(&self) -> PrizeTable {
        self.prizes
    }

    fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Validate for GameRules {
    fn validate(&self) -> Result<()> {
        validation::validate_positive_number("purchase.ticket_price", self.ticket_price, 1)?;

        if let Some(max) = self.max_purchase_amount {
            validation::validate_positive_number("purchase.max_amount", max, self.ticket_price)?;
            validation::validate_multiple_of("purchase.max_amount", max, self.ticket_price)?;
        }

        let prizes: Vec<u64> = Rank::WINNING
            .iter()
            .map(|&rank| self.prizes.prize(rank))
            .collect();
        validation::validate_non_decreasing("prizes", &prizes)?;

        if let Some(attempts) = self.max_attempts {
            validation::validate_range("input.max_attempts", attempts, 1, MAX_ATTEMPTS_LIMIT)?;
        }

        Ok(())
    }
}
