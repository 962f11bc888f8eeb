use crate::domain::winning::PrizeTable;
use crate::utils::error::Result;

/// Presentation collaborator: everything the game shows to the player goes through here.
pub trait Prompter {
    fn show_purchase_amount_prompt(&self) -> Result<()>;
    fn show_output_purchase_count_prompt(&self, count: usize) -> Result<()>;
    fn show_winning_numbers_prompt(&self) -> Result<()>;
    fn show_bonus_number_prompt(&self) -> Result<()>;
    fn show_message(&self, message: &str) -> Result<()>;
    fn show_error(&self, message: &str) -> Result<()>;
}

impl<P: Prompter + ?Sized> Prompter for &P {
    fn show_purchase_amount_prompt(&self) -> Result<()> {
        (**self).show_purchase_amount_prompt()
    }

    fn show_output_purchase_count_prompt(&self, count: usize) -> Result<()> {
        (**self).show_output_purchase_count_prompt(count)
    }

    fn show_winning_numbers_prompt(&self) -> Result<()> {
        (**self).show_winning_numbers_prompt()
    }

    fn show_bonus_number_prompt(&self) -> Result<()> {
        (**self).show_bonus_number_prompt()
    }

    fn show_message(&self, message: &str) -> Result<()> {
        (**self).show_message(message)
    }

    fn show_error(&self, message: &str) -> Result<()> {
        (**self).show_error(message)
    }
}

pub trait InputReader {
    /// Next line without its terminator, or `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>>;
}

impl<R: InputReader + ?Sized> InputReader for &mut R {
    fn read_line(&mut self) -> Result<Option<String>> {
        (**self).read_line()
    }
}

pub trait NumberGenerator {
    /// `count` distinct numbers drawn from `min..=max`.
    fn pick_unique(&mut self, min: u8, max: u8, count: usize) -> Vec<u8>;
}

impl<G: NumberGenerator + ?Sized> NumberGenerator for &mut G {
    fn pick_unique(&mut self, min: u8, max: u8, count: usize) -> Vec<u8> {
        (**self).pick_unique(min, max, count)
    }
}

pub trait ConfigProvider {
    fn ticket_price(&self) -> u64;
    fn max_purchase_amount(&self) -> Option<u64>;
    fn prize_table(&self) -> PrizeTable;
    /// `None` keeps asking until the input is valid or closed.
    fn max_attempts(&self) -> Option<u32>;
    fn seed(&self) -> Option<u64>;
}
