use crate::core::game::GameSummary;
use crate::domain::model::{LottoTicket, PurchaseAmount};
use crate::domain::ports::Prompter;
use crate::domain::winning::{PrizeTable, Rank, WinningStatistics};
use crate::utils::error::Result;

/// Formats game results and hands them to the [`Prompter`]; holds no other state.
pub struct OutputService<P: Prompter> {
    prompter: P,
}

impl<P: Prompter> OutputService<P> {
    pub fn new(prompter: P) -> Self {
        Self { prompter }
    }

    /// Purchase count first, then every ticket.
    pub fn print_purchased_lotto_ticket(&self, ticket: &LottoTicket) -> Result<()> {
        self.prompter.show_output_purchase_count_prompt(ticket.size())?;
        self.prompter.show_message(&ticket.to_string())
    }

    pub fn print_winning_statistics(
        &self,
        statistics: &WinningStatistics,
        amount: &PurchaseAmount,
        prizes: &PrizeTable,
    ) -> Result<()> {
        self.prompter.show_message("")?;
        self.prompter.show_message("Winning Statistics")?;
        self.prompter.show_message("---")?;
        for rank in Rank::WINNING {
            self.prompter.show_message(&format!(
                "{} ({} KRW) - {} tickets",
                describe_rank(rank),
                format_amount(prizes.prize(rank)),
                statistics.count(rank)
            ))?;
        }
        self.prompter.show_message(&format!(
            "Total return rate is {}%.",
            format_rate(statistics.return_rate(amount))
        ))
    }

    pub fn print_summary_json(&self, summary: &GameSummary) -> Result<()> {
        let json = serde_json::to_string_pretty(summary)?;
        self.prompter.show_message(&json)
    }
}

fn describe_rank(rank: Rank) -> String {
    if rank.requires_bonus() {
        format!("{} Matches + Bonus Ball", rank.match_count())
    } else {
        format!("{} Matches", rank.match_count())
    }
}

/// `1234567` -> `1,234,567`
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn format_rate(rate: f64) -> String {
    let tenths = (rate * 10.0).round() as u64;
    format!("{}.{}", format_amount(tenths / 10), tenths % 10)
}
