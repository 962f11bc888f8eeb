use crate::domain::model::{LottoTicket, NumberSet, PurchaseAmount, MAX_NUMBER, MIN_NUMBER, NUMBER_COUNT};
use crate::domain::ports::NumberGenerator;
use crate::utils::error::Result;

/// Issues computer-picked tickets. Numbers within a ticket are sorted ascending.
pub struct LottoMachine<G: NumberGenerator> {
    generator: G,
}

impl<G: NumberGenerator> LottoMachine<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn issue(&mut self, amount: &PurchaseAmount) -> Result<LottoTicket> {
        let lottos = (0..amount.ticket_count())
            .map(|_| self.issue_one())
            .collect::<Result<Vec<_>>>()?;
        tracing::info!("Issued {} tickets for {}", lottos.len(), amount.amount());
        Ok(LottoTicket::new(lottos))
    }

    pub fn issue_one(&mut self) -> Result<NumberSet> {
        let mut numbers = self
            .generator
            .pick_unique(MIN_NUMBER, MAX_NUMBER, NUMBER_COUNT);
        numbers.sort_unstable();
        let lotto = NumberSet::new(numbers)?;
        tracing::debug!("Issued {}", lotto);
        Ok(lotto)
    }
}
