use crate::domain::model::{NumberSet, PurchaseAmount};
use crate::domain::ports::{InputReader, Prompter};
use crate::domain::winning::WinningNumbers;
use crate::utils::error::{LottoError, Result};

/// Reads player input, re-prompting until a value passes validation.
pub struct InputService<R: InputReader, P: Prompter> {
    reader: R,
    prompter: P,
    max_attempts: Option<u32>,
}

impl<R: InputReader, P: Prompter> InputService<R, P> {
    pub fn new(reader: R, prompter: P, max_attempts: Option<u32>) -> Self {
        Self {
            reader,
            prompter,
            max_attempts,
        }
    }

    pub fn read_purchase_amount(
        &mut self,
        ticket_price: u64,
        max_amount: Option<u64>,
    ) -> Result<PurchaseAmount> {
        self.read_until_valid(
            "purchase amount",
            |prompter| prompter.show_purchase_amount_prompt(),
            |line| PurchaseAmount::parse(line, ticket_price, max_amount),
        )
    }

    pub fn read_winning_numbers(&mut self) -> Result<NumberSet> {
        self.read_until_valid(
            "winning numbers",
            |prompter| prompter.show_winning_numbers_prompt(),
            |line| NumberSet::from_tokens(split_tokens(line).as_slice()),
        )
    }

    pub fn read_bonus_number(&mut self, numbers: &NumberSet) -> Result<WinningNumbers> {
        self.read_until_valid(
            "bonus number",
            |prompter| prompter.show_bonus_number_prompt(),
            |line| WinningNumbers::parse_bonus(numbers.clone(), line),
        )
    }

    fn read_until_valid<T>(
        &mut self,
        expected: &str,
        show_prompt: impl Fn(&P) -> Result<()>,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<T> {
        let mut attempts: u32 = 0;
        loop {
            show_prompt(&self.prompter)?;
            let line = self
                .reader
                .read_line()?
                .ok_or_else(|| LottoError::InputClosed {
                    expected: expected.to_string(),
                })?;

            match parse(line.trim()) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_input_error() => {
                    attempts += 1;
                    tracing::warn!("Rejected {} '{}': {}", expected, line, e);
                    self.prompter.show_error(&e.user_friendly_message())?;

                    if self.max_attempts.is_some_and(|max| attempts >= max) {
                        return Err(LottoError::RetryLimitExceeded {
                            expected: expected.to_string(),
                            attempts,
                        });
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Splits a comma-separated line into trimmed tokens; empty tokens are kept.
pub fn split_tokens(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}
