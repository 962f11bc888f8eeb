use crate::domain::ports::{InputReader, Prompter};
use crate::utils::error::Result;
use std::cell::RefCell;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

const PURCHASE_AMOUNT_PROMPT: &str = "Please enter the purchase amount.";
const WINNING_NUMBERS_PROMPT: &str = "Please enter last week's winning numbers.";
const BONUS_NUMBER_PROMPT: &str = "Please enter the bonus number.";

/// Terminal-backed [`Prompter`]. Writes are flushed per line.
pub struct ConsolePrompter<W: Write> {
    writer: RefCell<W>,
}

impl ConsolePrompter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsolePrompter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: RefCell::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn line(&self, text: &str) -> Result<()> {
        let mut writer = self.writer.borrow_mut();
        writeln!(writer, "{}", text)?;
        writer.flush()?;
        Ok(())
    }
}

impl<W: Write> Prompter for ConsolePrompter<W> {
    fn show_purchase_amount_prompt(&self) -> Result<()> {
        self.line(PURCHASE_AMOUNT_PROMPT)
    }

    fn show_output_purchase_count_prompt(&self, count: usize) -> Result<()> {
        self.line("")?;
        self.line(&format!("You have purchased {} tickets.", count))
    }

    fn show_winning_numbers_prompt(&self) -> Result<()> {
        self.line("")?;
        self.line(WINNING_NUMBERS_PROMPT)
    }

    fn show_bonus_number_prompt(&self) -> Result<()> {
        self.line("")?;
        self.line(BONUS_NUMBER_PROMPT)
    }

    fn show_message(&self, message: &str) -> Result<()> {
        self.line(message)
    }

    fn show_error(&self, message: &str) -> Result<()> {
        self.line(message)
    }
}

/// Line reader over any buffered source; stdin by default.
pub struct ConsoleReader<R: BufRead> {
    reader: R,
}

impl ConsoleReader<StdinLock<'static>> {
    pub fn stdin() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock())
    }
}

impl<R: BufRead> ConsoleReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputReader for ConsoleReader<R> {
    /// Invalid UTF-8 is replaced rather than rejected, so it fails validation
    /// like any other bad input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buffer = Vec::new();
        if self.reader.read_until(b'\n', &mut buffer)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buffer)
            .trim_end_matches(['\n', '\r'])
            .to_string();
        Ok(Some(line))
    }
}
