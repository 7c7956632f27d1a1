use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::DEFAULT_AVATAR_BASE_URL;

// --- Typed IDs ---

macro_rules! typed_id {
    ($name:ident) => {
        #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            #[must_use]
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

typed_id!(FriendId);

/// One person the user shares expenses with.
///
/// `balance > 0`: the friend owes the user.
/// `balance < 0`: the user owes the friend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub balance: Decimal,
}

impl Friend {
    pub fn new(id: FriendId, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            balance: Decimal::ZERO,
        }
    }

    #[must_use]
    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.balance = balance;
        self
    }

    #[must_use]
    pub fn status(&self) -> BalanceStatus {
        BalanceStatus::of(self.balance)
    }
}

/// Which way the money flows between the user and a friend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum BalanceStatus {
    /// Friend owes the user this (positive) amount.
    OwedToUser(Decimal),
    /// User owes the friend this (positive) amount.
    OwedByUser(Decimal),
    Settled,
}

impl BalanceStatus {
    #[must_use]
    pub fn of(balance: Decimal) -> Self {
        if balance.is_sign_positive() && !balance.is_zero() {
            Self::OwedToUser(balance.normalize())
        } else if balance.is_sign_negative() && !balance.is_zero() {
            Self::OwedByUser(balance.abs().normalize())
        } else {
            Self::Settled
        }
    }

    #[must_use]
    pub const fn tone(self) -> BalanceTone {
        match self {
            Self::OwedToUser(_) => BalanceTone::Green,
            Self::OwedByUser(_) => BalanceTone::Red,
            Self::Settled => BalanceTone::Plain,
        }
    }

    #[must_use]
    pub fn message(self, name: &str, currency: &str) -> String {
        match self {
            Self::OwedToUser(amount) => format!("{name} owes you {currency}{amount}"),
            Self::OwedByUser(amount) => format!("You owe {name} {currency}{amount}"),
            Self::Settled => format!("You and {name} are even"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceTone {
    Green,
    Red,
    Plain,
}

/// The three friends every session starts with.
#[must_use]
pub fn seed_friends() -> Vec<Friend> {
    [
        ("118836", "Clark", -7),
        ("933372", "Sarah", 20),
        ("499476", "Anthony", 0),
    ]
    .into_iter()
    .map(|(id, name, balance)| {
        Friend::new(
            FriendId::new(id),
            name,
            format!("{DEFAULT_AVATAR_BASE_URL}?u={id}"),
        )
        .with_balance(Decimal::from(balance))
    })
    .collect()
}
