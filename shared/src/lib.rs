// lib.rs - shared core for the split-bill app

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod capabilities;
pub mod config;
pub mod error;
pub mod event;
pub mod forms;
pub mod friend;
pub mod model;
pub mod store;
pub mod view;

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use config::SplitConfig;
pub use crux_core::{render::Render, App as CruxApp};
pub use error::{ConfigError, StoreError, ValidationError};
pub use event::Event;
pub use forms::{AddFriendForm, Payer, SplitBillForm};
pub use friend::{seed_friends, BalanceStatus, BalanceTone, Friend, FriendId};
pub use model::Model;
pub use store::FriendStore;
pub use view::{AddFriendView, FriendRow, PayerOption, SplitBillView, ViewModel};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
pub const DEFAULT_AVATAR_BASE_URL: &str = "https://i.pravatar.cc/48";
