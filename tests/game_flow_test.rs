use anyhow::Result;
use console_lotto::domain::ports::{InputReader, NumberGenerator, Prompter};
use console_lotto::{
    ConsolePrompter, ConsoleReader, GameRules, LottoError, LottoGame, LottoTicket, NumberSet,
    OutputService, Rank,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::Cursor;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    AmountPrompt,
    PurchaseCount(usize),
    WinningPrompt,
    BonusPrompt,
    Message(String),
    Error(String),
}

#[derive(Default)]
struct RecordingPrompter {
    calls: RefCell<Vec<Call>>,
}

impl RecordingPrompter {
    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl Prompter for RecordingPrompter {
    fn show_purchase_amount_prompt(&self) -> console_lotto::Result<()> {
        self.calls.borrow_mut().push(Call::AmountPrompt);
        Ok(())
    }

    fn show_output_purchase_count_prompt(&self, count: usize) -> console_lotto::Result<()> {
        self.calls.borrow_mut().push(Call::PurchaseCount(count));
        Ok(())
    }

    fn show_winning_numbers_prompt(&self) -> console_lotto::Result<()> {
        self.calls.borrow_mut().push(Call::WinningPrompt);
        Ok(())
    }

    fn show_bonus_number_prompt(&self) -> console_lotto::Result<()> {
        self.calls.borrow_mut().push(Call::BonusPrompt);
        Ok(())
    }

    fn show_message(&self, message: &str) -> console_lotto::Result<()> {
        self.calls.borrow_mut().push(Call::Message(message.to_string()));
        Ok(())
    }

    fn show_error(&self, message: &str) -> console_lotto::Result<()> {
        self.calls.borrow_mut().push(Call::Error(message.to_string()));
        Ok(())
    }
}

struct FailingPrompter;

impl Prompter for FailingPrompter {
    fn show_purchase_amount_prompt(&self) -> console_lotto::Result<()> {
        Ok(())
    }

    fn show_output_purchase_count_prompt(&self, _count: usize) -> console_lotto::Result<()> {
        Err(std::io::Error::other("terminal gone").into())
    }

    fn show_winning_numbers_prompt(&self) -> console_lotto::Result<()> {
        Ok(())
    }

    fn show_bonus_number_prompt(&self) -> console_lotto::Result<()> {
        Ok(())
    }

    fn show_message(&self, _message: &str) -> console_lotto::Result<()> {
        panic!("message must not be shown after the count failed");
    }

    fn show_error(&self, _message: &str) -> console_lotto::Result<()> {
        Ok(())
    }
}

struct ScriptedReader(VecDeque<String>);

impl ScriptedReader {
    fn new(lines: &[&str]) -> Self {
        Self(lines.iter().map(|line| line.to_string()).collect())
    }
}

impl InputReader for ScriptedReader {
    fn read_line(&mut self) -> console_lotto::Result<Option<String>> {
        Ok(self.0.pop_front())
    }
}

/// Hands out pre-arranged draws in order.
struct QueuedGenerator(VecDeque<Vec<u8>>);

impl NumberGenerator for QueuedGenerator {
    fn pick_unique(&mut self, _min: u8, _max: u8, _count: usize) -> Vec<u8> {
        self.0.pop_front().unwrap_or_default()
    }
}

fn eight_draws() -> QueuedGenerator {
    QueuedGenerator(
        vec![
            vec![8, 21, 23, 41, 42, 43],
            vec![3, 5, 11, 16, 32, 38],
            vec![7, 11, 16, 35, 36, 44],
            vec![1, 8, 11, 31, 41, 42],
            vec![13, 14, 16, 38, 42, 45],
            vec![7, 11, 30, 40, 42, 43],
            vec![2, 13, 22, 32, 38, 45],
            vec![1, 3, 5, 14, 22, 45],
        ]
        .into(),
    )
}

#[test]
fn test_report_purchase_forwards_count_then_text() -> Result<()> {
    let ticket = LottoTicket::new(vec![
        NumberSet::new([1, 2, 3, 4, 5, 6])?,
        NumberSet::new([7, 8, 9, 10, 11, 12])?,
        NumberSet::new([13, 14, 15, 16, 17, 18])?,
        NumberSet::new([19, 20, 21, 22, 23, 24])?,
        NumberSet::new([25, 26, 27, 28, 29, 30])?,
    ]);
    let prompter = RecordingPrompter::default();

    OutputService::new(&prompter).print_purchased_lotto_ticket(&ticket)?;

    assert_eq!(
        prompter.calls(),
        vec![Call::PurchaseCount(5), Call::Message(ticket.to_string())]
    );
    Ok(())
}

#[test]
fn test_collaborator_errors_propagate_unchanged() -> Result<()> {
    let ticket = LottoTicket::new(vec![NumberSet::new([1, 2, 3, 4, 5, 6])?]);
    let err = OutputService::new(FailingPrompter)
        .print_purchased_lotto_ticket(&ticket)
        .unwrap_err();
    assert!(matches!(err, LottoError::IoError(_)));
    Ok(())
}

#[test]
fn test_full_round_with_scripted_input() -> Result<()> {
    let prompter = RecordingPrompter::default();
    let reader = ScriptedReader::new(&["8000j", "8000", "1,2,3,4,5,6", "6", "7"]);
    let mut game = LottoGame::new(reader, &prompter, eight_draws(), GameRules::default());

    let summary = game.run()?;

    assert_eq!(summary.purchase_amount, 8000);
    assert_eq!(summary.ticket_count, 8);
    assert_eq!(summary.statistics.count(Rank::Fifth), 1);
    assert_eq!(summary.statistics.total_prize(), 5000);
    assert_eq!(summary.return_rate, 62.5);
    assert_eq!(summary.bonus_number, 7);

    let calls = prompter.calls();
    assert_eq!(calls[0], Call::AmountPrompt);
    assert!(matches!(&calls[1], Call::Error(msg) if msg.starts_with("[ERROR] ")));
    assert_eq!(calls[2], Call::AmountPrompt);
    assert_eq!(calls[3], Call::PurchaseCount(8));
    assert_eq!(calls[4], Call::Message(summary.tickets.to_string()));
    assert_eq!(calls[5], Call::WinningPrompt);
    assert_eq!(calls[6], Call::BonusPrompt);
    assert!(matches!(&calls[7], Call::Error(msg) if msg.contains("Bonus number")));
    assert_eq!(calls[8], Call::BonusPrompt);
    assert_eq!(
        calls.last(),
        Some(&Call::Message("Total return rate is 62.5%.".to_string()))
    );
    Ok(())
}

#[test]
fn test_console_transcript() -> Result<()> {
    let reader = ConsoleReader::new(Cursor::new("2000\n1,2,3,4,5,6\n7\n"));
    let prompter = ConsolePrompter::new(Vec::new());
    let generator = QueuedGenerator(
        vec![vec![1, 2, 3, 4, 5, 7], vec![40, 41, 42, 43, 44, 45]].into(),
    );
    let mut game = LottoGame::new(reader, &prompter, generator, GameRules::default());

    let summary = game.run()?;
    assert_eq!(summary.statistics.count(Rank::Second), 1);

    drop(game);
    let transcript = String::from_utf8(prompter.into_inner())?;
    let expected = "\
Please enter the purchase amount.

You have purchased 2 tickets.
[1, 2, 3, 4, 5, 7]
[40, 41, 42, 43, 44, 45]

Please enter last week's winning numbers.

Please enter the bonus number.

Winning Statistics
---
3 Matches (5,000 KRW) - 0 tickets
4 Matches (50,000 KRW) - 0 tickets
5 Matches (1,500,000 KRW) - 0 tickets
5 Matches + Bonus Ball (30,000,000 KRW) - 1 tickets
6 Matches (2,000,000,000 KRW) - 0 tickets
Total return rate is 1,500,000.0%.
";
    assert_eq!(transcript, expected);
    Ok(())
}

#[test]
fn test_json_summary_is_printed_last() -> Result<()> {
    let prompter = RecordingPrompter::default();
    let reader = ScriptedReader::new(&["8000", "1,2,3,4,5,6", "7"]);
    let mut game = LottoGame::new(reader, &prompter, eight_draws(), GameRules::default())
        .with_json_summary(true);

    game.run()?;

    let calls = prompter.calls();
    let Some(Call::Message(json)) = calls.last() else {
        panic!("expected a JSON message last, got {:?}", calls.last());
    };
    let value: serde_json::Value = serde_json::from_str(json)?;
    assert_eq!(value["ticket_count"], 8);
    assert_eq!(value["winning_numbers"], serde_json::json!([1, 2, 3, 4, 5, 6]));
    assert_eq!(value["statistics"]["counts"]["fifth"], 1);
    assert_eq!(value["return_rate"], 62.5);
    Ok(())
}

#[test]
fn test_retry_limit_from_rules_stops_the_round() {
    let prompter = RecordingPrompter::default();
    let reader = ScriptedReader::new(&["x", "y", "8000"]);
    let rules = GameRules {
        max_attempts: Some(2),
        ..GameRules::default()
    };
    let mut game = LottoGame::new(reader, &prompter, eight_draws(), rules);

    let err = game.run().unwrap_err();
    assert!(matches!(err, LottoError::RetryLimitExceeded { attempts: 2, .. }));
    assert!(!prompter
        .calls()
        .iter()
        .any(|call| matches!(call, Call::PurchaseCount(_))));
}
