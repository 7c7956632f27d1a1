use rust_decimal::Decimal;
use thiserror::Error;

use crate::friend::FriendId;

/// Reasons a form edit or submission is turned away.
///
/// None of these reach the shell: the core keeps its previous state and
/// logs the rejection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("friend name is empty")]
    EmptyName,
    #[error("image reference is empty")]
    EmptyImage,
    #[error("bill value is missing or zero")]
    MissingBill,
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),
    #[error("amount must not be negative: {0}")]
    NegativeAmount(Decimal),
    #[error("expense {expense} exceeds bill {bill}")]
    ExpenseExceedsBill { expense: Decimal, bill: Decimal },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("friend id already present: {0}")]
    DuplicateId(FriendId),
    #[error("no friend with id {0}")]
    UnknownFriend(FriendId),
    #[error("balance of {0} out of range")]
    Overflow(FriendId),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("currency symbol is empty")]
    EmptyCurrencySymbol,
    #[error("seed list: {0}")]
    Seed(#[from] StoreError),
}

impl ValidationError {
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyName => "EMPTY_NAME",
            Self::EmptyImage => "EMPTY_IMAGE",
            Self::MissingBill => "MISSING_BILL",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::NegativeAmount(_) => "NEGATIVE_AMOUNT",
            Self::ExpenseExceedsBill { .. } => "EXPENSE_EXCEEDS_BILL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::ExpenseExceedsBill {
            expense: Decimal::from(50),
            bill: Decimal::from(30),
        };
        assert_eq!(err.to_string(), "expense 50 exceeds bill 30");
        assert_eq!(err.code(), "EXPENSE_EXCEEDS_BILL");
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::UnknownFriend(FriendId::new("42"));
        assert_eq!(err.to_string(), "no friend with id 42");
    }

    #[test]
    fn test_config_error_from_json() {
        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = ConfigError::from(parse);
        assert!(err.to_string().starts_with("config parse error"));
    }
}
