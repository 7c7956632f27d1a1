use serde::{Deserialize, Serialize};

use crate::config::SplitConfig;
use crate::forms::Payer;
use crate::friend::FriendId;

/// Everything the shell can tell the core.
///
/// Text fields carry the raw input value; the core parses and validates.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub enum Event {
    #[default]
    Noop,

    /// Replace the startup config and reset to its seed list.
    Configure(SplitConfig),

    ToggleAddFriendForm,
    AddFriendNameChanged(String),
    AddFriendImageChanged(String),
    AddFriendSubmitted,

    FriendSelected(FriendId),

    BillChanged(String),
    UserExpenseChanged(String),
    PayerChanged(Payer),
    SplitBillSubmitted,
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Noop => "noop",
            Self::Configure(_) => "configure",
            Self::ToggleAddFriendForm => "toggle_add_friend_form",
            Self::AddFriendNameChanged(_) => "add_friend_name_changed",
            Self::AddFriendImageChanged(_) => "add_friend_image_changed",
            Self::AddFriendSubmitted => "add_friend_submitted",
            Self::FriendSelected(_) => "friend_selected",
            Self::BillChanged(_) => "bill_changed",
            Self::UserExpenseChanged(_) => "user_expense_changed",
            Self::PayerChanged(_) => "payer_changed",
            Self::SplitBillSubmitted => "split_bill_submitted",
        }
    }
}
