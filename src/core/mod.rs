pub mod game;
pub mod machine;

pub use crate::domain::model::{LottoTicket, NumberSet, PurchaseAmount};
pub use crate::domain::ports::{ConfigProvider, InputReader, NumberGenerator, Prompter};
pub use crate::utils::error::Result;
