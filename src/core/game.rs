use crate::app::input_service::InputService;
use crate::app::output_service::OutputService;
use crate::core::machine::LottoMachine;
use crate::domain::model::{LottoTicket, NumberSet};
use crate::domain::ports::{ConfigProvider, InputReader, NumberGenerator, Prompter};
use crate::domain::winning::WinningStatistics;
use crate::utils::error::Result;
use serde::Serialize;

/// Everything one round produced, in a shape suitable for `--json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSummary {
    pub purchase_amount: u64,
    pub ticket_count: usize,
    pub tickets: LottoTicket,
    pub winning_numbers: NumberSet,
    pub bonus_number: u8,
    pub statistics: WinningStatistics,
    pub return_rate: f64,
}

pub struct LottoGame<R, P, G, C>
where
    R: InputReader,
    P: Prompter,
    G: NumberGenerator,
    C: ConfigProvider,
{
    reader: R,
    prompter: P,
    generator: G,
    config: C,
    print_json: bool,
}

impl<R, P, G, C> LottoGame<R, P, G, C>
where
    R: InputReader,
    P: Prompter,
    G: NumberGenerator,
    C: ConfigProvider,
{
    pub fn new(reader: R, prompter: P, generator: G, config: C) -> Self {
        Self {
            reader,
            prompter,
            generator,
            config,
            print_json: false,
        }
    }

    pub fn with_json_summary(mut self, enabled: bool) -> Self {
        self.print_json = enabled;
        self
    }

    pub fn run(&mut self) -> Result<GameSummary> {
        let Self {
            reader,
            prompter,
            generator,
            config,
            print_json,
        } = self;
        let prompter: &P = prompter;
        let prizes = config.prize_table();

        let mut input = InputService::new(reader, prompter, config.max_attempts());
        let output = OutputService::new(prompter);
        let mut machine = LottoMachine::new(generator);

        tracing::info!("Starting lotto round");

        let amount = input.read_purchase_amount(config.ticket_price(), config.max_purchase_amount())?;
        let tickets = machine.issue(&amount)?;
        output.print_purchased_lotto_ticket(&tickets)?;

        let numbers = input.read_winning_numbers()?;
        let winning = input.read_bonus_number(&numbers)?;
        tracing::debug!("Winning numbers {} + bonus {}", winning.numbers(), winning.bonus());

        let statistics = WinningStatistics::tally(&tickets, &winning, &prizes);
        output.print_winning_statistics(&statistics, &amount, &prizes)?;

        let summary = GameSummary {
            purchase_amount: amount.amount(),
            ticket_count: tickets.size(),
            return_rate: statistics.return_rate(&amount),
            tickets,
            winning_numbers: numbers,
            bonus_number: winning.bonus(),
            statistics,
        };

        if *print_json {
            output.print_summary_json(&summary)?;
        }

        tracing::info!(
            "Round finished: {} tickets, {} won",
            summary.ticket_count,
            summary.statistics.total_prize()
        );
        Ok(summary)
    }
}
