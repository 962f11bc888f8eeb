pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ConsolePrompter, ConsoleReader, RandomNumberGenerator};
pub use app::{input_service::InputService, output_service::OutputService};
pub use config::{toml_config::TomlConfig, GameRules};
pub use crate::core::{
    game::{GameSummary, LottoGame},
    machine::LottoMachine,
};
pub use domain::model::{LottoTicket, NumberSet, PurchaseAmount};
pub use domain::winning::{PrizeTable, Rank, WinningNumbers, WinningStatistics};
pub use utils::error::{LottoError, Result};
