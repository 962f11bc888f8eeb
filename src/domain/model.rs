use crate::utils::error::{LottoError, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 45;
pub const NUMBER_COUNT: usize = 6;
pub const MAX_TICKET_COUNT: u64 = 100_000;

/// Six distinct lottery numbers in `MIN_NUMBER..=MAX_NUMBER`.
///
/// Every instance is valid: the only ways to obtain one are [`NumberSet::new`]
/// and [`NumberSet::from_tokens`], both of which check the full invariant.
/// Numbers keep the order they were given in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NumberSet {
    numbers: [u8; NUMBER_COUNT],
}

impl NumberSet {
    /// Validates count, then range, then uniqueness.
    pub fn new<I>(numbers: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<i64>,
    {
        let candidates: Vec<i64> = numbers.into_iter().map(Into::into).collect();
        if candidates.len() != NUMBER_COUNT {
            return Err(LottoError::InvalidCount {
                expected: NUMBER_COUNT,
                actual: candidates.len(),
            });
        }

        let mut validated = [0u8; NUMBER_COUNT];
        for (slot, &candidate) in validated.iter_mut().zip(&candidates) {
            *slot = to_lotto_number(candidate)?;
        }

        let mut seen = HashSet::with_capacity(NUMBER_COUNT);
        if let Some(&number) = validated.iter().find(|&&number| !seen.insert(number)) {
            return Err(LottoError::DuplicateNumber { number });
        }

        Ok(Self { numbers: validated })
    }

    /// Parses every token, then range-checks every value, then hands off to
    /// [`NumberSet::new`] for count and uniqueness. A malformed token wins over
    /// everything; an out-of-range value wins over a wrong count.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        let parsed = tokens
            .iter()
            .map(|token| parse_number(token.as_ref()))
            .collect::<Result<Vec<i32>>>()?;
        let in_range = parsed
            .into_iter()
            .map(|number| to_lotto_number(i64::from(number)))
            .collect::<Result<Vec<u8>>>()?;
        Self::new(in_range)
    }

    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    pub fn contains(&self, number: u8) -> bool {
        self.numbers.contains(&number)
    }

    pub fn match_count(&self, other: &NumberSet) -> usize {
        self.numbers
            .iter()
            .filter(|&&number| other.contains(number))
            .count()
    }
}

impl fmt::Display for NumberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .numbers
            .iter()
            .map(|number| number.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{}]", joined)
    }
}

pub(crate) fn parse_number(token: &str) -> Result<i32> {
    token.parse::<i32>().map_err(|_| LottoError::NotANumber {
        token: token.to_string(),
    })
}

pub(crate) fn to_lotto_number(candidate: i64) -> Result<u8> {
    u8::try_from(candidate)
        .ok()
        .filter(|number| (MIN_NUMBER..=MAX_NUMBER).contains(number))
        .ok_or(LottoError::OutOfRange {
            number: candidate,
            min: MIN_NUMBER,
            max: MAX_NUMBER,
        })
}

/// The tickets bought in one purchase, in purchase order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LottoTicket {
    lottos: Vec<NumberSet>,
}

impl LottoTicket {
    pub fn new(lottos: Vec<NumberSet>) -> Self {
        Self { lottos }
    }

    pub fn size(&self) -> usize {
        self.lottos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lottos.is_empty()
    }

    pub fn lottos(&self) -> &[NumberSet] {
        &self.lottos
    }

    pub fn iter(&self) -> impl Iterator<Item = &NumberSet> {
        self.lottos.iter()
    }
}

impl fmt::Display for LottoTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, lotto) in self.lottos.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", lotto)?;
        }
        Ok(())
    }
}

/// Money handed over for tickets; always a whole number of tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseAmount {
    amount: u64,
    ticket_price: u64,
}

impl PurchaseAmount {
    pub fn new(amount: i64, ticket_price: u64, max_amount: Option<u64>) -> Result<Self> {
        let invalid = |reason: String| LottoError::InvalidPurchaseAmount {
            value: amount.to_string(),
            reason,
        };

        let amount = u64::try_from(amount)
            .ok()
            .filter(|&amount| amount > 0)
            .ok_or_else(|| invalid("amount must be positive".to_string()))?;
        if ticket_price == 0 || amount % ticket_price != 0 {
            return Err(invalid(format!(
                "amount must be a multiple of {}",
                ticket_price
            )));
        }
        if let Some(max) = max_amount {
            if amount > max {
                return Err(invalid(format!("amount must not exceed {}", max)));
            }
        }
        // Applies even when no purchase limit is configured.
        if amount / ticket_price > MAX_TICKET_COUNT {
            return Err(invalid(format!(
                "at most {} tickets can be bought at once",
                MAX_TICKET_COUNT
            )));
        }

        Ok(Self {
            amount,
            ticket_price,
        })
    }

    pub fn parse(token: &str, ticket_price: u64, max_amount: Option<u64>) -> Result<Self> {
        let amount = token
            .parse::<i64>()
            .map_err(|_| LottoError::InvalidPurchaseAmount {
                value: token.to_string(),
                reason: "amount must be an integer".to_string(),
            })?;
        Self::new(amount, ticket_price, max_amount)
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn ticket_price(&self) -> u64 {
        self.ticket_price
    }

    pub fn ticket_count(&self) -> usize {
        (self.amount / self.ticket_price) as usize
    }
}
