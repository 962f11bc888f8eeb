use crate::config::GameRules;
use crate::domain::ports::ConfigProvider;
use crate::domain::winning::PrizeTable;
use crate::utils::error::{LottoError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub purchase: Option<PurchaseConfig>,
    pub prizes: Option<PrizeConfig>,
    pub input: Option<InputConfig>,
    pub random: Option<RandomConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PurchaseConfig {
    pub ticket_price: Option<u64>,
    /// `0` removes the limit.
    pub max_amount: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrizeConfig {
    pub first: Option<u64>,
    pub second: Option<u64>,
    pub third: Option<u64>,
    pub fourth: Option<u64>,
    pub fifth: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    pub max_attempts: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RandomConfig {
    pub seed: Option<u64>,
}

impl TomlConfig {
    /// Reads and parses a rules file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LottoError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LottoError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LottoError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Merges the file over the built-in defaults.
    pub fn to_rules(&self) -> GameRules {
        let defaults = GameRules::default();
        let purchase = self.purchase.clone().unwrap_or_default();
        let prizes = self.prizes.clone().unwrap_or_default();
        let default_prizes = defaults.prizes;

        let max_purchase_amount = match purchase.max_amount {
            Some(0) => None,
            Some(max) => Some(max),
            None => defaults.max_purchase_amount,
        };

        GameRules {
            ticket_price: purchase.ticket_price.unwrap_or(defaults.ticket_price),
            max_purchase_amount,
            prizes: PrizeTable {
                first: prizes.first.unwrap_or(default_prizes.first),
                second: prizes.second.unwrap_or(default_prizes.second),
                third: prizes.third.unwrap_or(default_prizes.third),
                fourth: prizes.fourth.unwrap_or(default_prizes.fourth),
                fifth: prizes.fifth.unwrap_or(default_prizes.fifth),
            },
            max_attempts: self.input.as_ref().and_then(|input| input.max_attempts),
            seed: self.random.as_ref().and_then(|random| random.seed),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.to_rules().validate()
    }
}

impl ConfigProvider for TomlConfig {
    fn ticket_price(&self) -> u64 {
        self.to_rules().ticket_price
    }

    fn max_purchase_amount(&self) -> Option<u64> {
        self.to_rules().max_purchase_amount
    }

    fn prize_table(&self) -> PrizeTable {
        self.to_rules().prizes
    }

    fn max_attempts(&self) -> Option<u32> {
        self.input.as_ref().and_then(|input| input.max_attempts)
    }

    fn seed(&self) -> Option<u64> {
        self.random.as_ref().and_then(|random| random.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.to_rules(), GameRules::default());
    }

    #[test]
    fn test_partial_prize_override() {
        let config = TomlConfig::from_toml_str(
            r#"
[prizes]
fifth = 10000
"#,
        )
        .unwrap();
        let prizes = config.prize_table();
        assert_eq!(prizes.fifth, 10_000);
        assert_eq!(prizes.fourth, PrizeTable::default().fourth);
    }

    #[test]
    fn test_zero_max_amount_removes_limit() {
        let config = TomlConfig::from_toml_str("[purchase]\nmax_amount = 0\n").unwrap();
        assert_eq!(config.max_purchase_amount(), None);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = TomlConfig::from_toml_str("[purchase]\nprice = 1000\n").unwrap_err();
        assert!(matches!(
            err,
            LottoError::ConfigValidationError { ref field, .. } if field == "toml_parsing"
        ));
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let content = "[random]\nseed = ${CONSOLE_LOTTO_TEST_UNSET_VAR}\n";
        let substituted = TomlConfig::substitute_env_vars(content).unwrap();
        assert_eq!(substituted, content);
        assert!(TomlConfig::from_toml_str(content).is_err());
    }
}
