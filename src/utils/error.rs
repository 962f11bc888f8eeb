use thiserror::Error;

#[derive(Error, Debug)]
pub enum LottoError {
    #[error("Lotto numbers must be integers: '{token}'")]
    NotANumber { token: String },

    #[error("Lotto numbers must be between {min} and {max}: {number}")]
    OutOfRange { number: i64, min: u8, max: u8 },

    #[error("Lotto must contain exactly {expected} numbers, got {actual}")]
    InvalidCount { expected: usize, actual: usize },

    #[error("Lotto numbers must not repeat: {number}")]
    DuplicateNumber { number: u8 },

    #[error("Bonus number must differ from the winning numbers: {number}")]
    DuplicateBonusNumber { number: u8 },

    #[error("Invalid purchase amount '{value}': {reason}")]
    InvalidPurchaseAmount { value: String, reason: String },

    #[error("Input closed while waiting for {expected}")]
    InputClosed { expected: String },

    #[error("Gave up reading {expected} after {attempts} invalid attempts")]
    RetryLimitExceeded { expected: String, attempts: u32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Rejected user input; the game can ask again.
    Input,
    Config,
    System,
}

impl LottoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LottoError::NotANumber { .. }
            | LottoError::OutOfRange { .. }
            | LottoError::InvalidCount { .. }
            | LottoError::DuplicateNumber { .. }
            | LottoError::DuplicateBonusNumber { .. }
            | LottoError::InvalidPurchaseAmount { .. }
            | LottoError::InputClosed { .. }
            | LottoError::RetryLimitExceeded { .. } => ErrorCategory::Input,
            LottoError::ConfigError { .. }
            | LottoError::ConfigValidationError { .. }
            | LottoError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            LottoError::IoError(_) | LottoError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// True for validation failures the player can fix by typing again.
    pub fn is_input_error(&self) -> bool {
        self.category() == ErrorCategory::Input
            && !matches!(
                self,
                LottoError::InputClosed { .. } | LottoError::RetryLimitExceeded { .. }
            )
    }

    pub fn user_friendly_message(&self) -> String {
        format!("[ERROR] {}", self)
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check the value you typed and run the game again",
            ErrorCategory::Config => "Fix the configuration file or remove the offending entry",
            ErrorCategory::System => "Check that the terminal is readable and writable",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Config => 2,
            ErrorCategory::System => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, LottoError>;
