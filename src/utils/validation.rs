use crate::utils::error::{LottoError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(LottoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_multiple_of(field_name: &str, value: u64, unit: u64) -> Result<()> {
    if unit == 0 || value % unit != 0 {
        return Err(LottoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be a multiple of {}", unit),
        });
    }
    Ok(())
}

pub fn validate_non_decreasing(field_name: &str, values: &[u64]) -> Result<()> {
    if let Some(pair) = values.windows(2).find(|pair| pair[0] > pair[1]) {
        return Err(LottoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{} > {}", pair[0], pair[1]),
            reason: "Higher ranks must not pay less than lower ranks".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(LottoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
