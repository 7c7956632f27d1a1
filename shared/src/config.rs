use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, StoreError};
use crate::friend::{seed_friends, Friend};
use crate::{DEFAULT_AVATAR_BASE_URL, DEFAULT_CURRENCY_SYMBOL};

/// Startup settings handed to the core by the shell.
///
/// Every field is optional in JSON; missing ones fall back to the defaults
/// (`$`, the pravatar base URL and the three seed friends).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    pub currency_symbol: String,
    pub avatar_base_url: String,
    pub seed_friends: Vec<Friend>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_owned(),
            avatar_base_url: DEFAULT_AVATAR_BASE_URL.to_owned(),
            seed_friends: seed_friends(),
        }
    }
}

impl SplitConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::EmptyCurrencySymbol);
        }
        for (i, friend) in self.seed_friends.iter().enumerate() {
            if self.seed_friends[..i].iter().any(|f| f.id == friend.id) {
                return Err(StoreError::DuplicateId(friend.id.clone()).into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rust_decimal::Decimal;

    #[test]
    fn test_default_config() {
        let config = SplitConfig::default();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.avatar_base_url, "https://i.pravatar.cc/48");
        assert_eq!(config.seed_friends.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = SplitConfig::from_json(r#"{ "currency_symbol": "€" }"#).unwrap();
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.seed_friends, seed_friends());
    }

    #[test]
    fn test_from_json_custom_seed() {
        let json = r#"{
            "seed_friends": [
                { "id": "1", "name": "Ana", "image": "a.png", "balance": "12.5" },
                { "id": "2", "name": "Bo", "image": "b.png" }
            ]
        }"#;
        let config = SplitConfig::from_json(json).unwrap();
        assert_eq!(config.seed_friends.len(), 2);
        assert_eq!(config.seed_friends[0].balance, Decimal::new(125, 1));
        assert_eq!(config.seed_friends[1].balance, Decimal::ZERO);
    }

    #[test]
    fn test_from_json_duplicate_seed_ids() {
        let json = r#"{
            "seed_friends": [
                { "id": "1", "name": "Ana", "image": "a.png" },
                { "id": "1", "name": "Bo", "image": "b.png" }
            ]
        }"#;
        assert_matches!(
            SplitConfig::from_json(json),
            Err(ConfigError::Seed(StoreError::DuplicateId(_)))
        );
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert_matches!(SplitConfig::from_json("{"), Err(ConfigError::Parse(_)));
        assert_matches!(
            SplitConfig::from_json(r#"{ "currency_symbol": " " }"#),
            Err(ConfigError::EmptyCurrencySymbol)
        );
    }
}
