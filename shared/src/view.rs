use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::forms::Payer;
use crate::friend::{BalanceStatus, BalanceTone, Friend};
use crate::model::Model;

pub const ADD_FRIEND_LABEL: &str = "Add friend";
pub const CLOSE_LABEL: &str = "Close";
pub const SELECT_LABEL: &str = "Select";
pub const USER_PAYER_LABEL: &str = "You";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FriendRow {
    pub id: String,
    pub name: String,
    pub image: String,
    pub status: BalanceStatus,
    pub message: String,
    pub tone: BalanceTone,
    pub is_selected: bool,
    pub toggle_label: String,
}

impl FriendRow {
    #[must_use]
    pub fn render(friend: &Friend, is_selected: bool, currency: &str) -> Self {
        let status = friend.status();
        Self {
            id: friend.id.0.clone(),
            name: friend.name.clone(),
            image: friend.image.clone(),
            status,
            message: status.message(&friend.name, currency),
            tone: status.tone(),
            is_selected,
            toggle_label: if is_selected { CLOSE_LABEL } else { SELECT_LABEL }.into(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddFriendView {
    pub name: String,
    pub image: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayerOption {
    pub payer: Payer,
    pub label: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SplitBillView {
    pub friend_id: String,
    pub title: String,
    pub bill: String,
    pub user_expense: String,
    pub friend_expense_label: String,
    /// Derived, not editable.
    pub friend_expense: String,
    pub payer: Payer,
    pub payer_options: Vec<PayerOption>,
    pub can_submit: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    pub friends: Vec<FriendRow>,
    pub add_friend: Option<AddFriendView>,
    pub add_friend_button_label: String,
    pub split_bill: Option<SplitBillView>,
}

fn amount_text(amount: Option<Decimal>) -> String {
    amount.map(|a| a.normalize().to_string()).unwrap_or_default()
}

impl ViewModel {
    #[must_use]
    pub fn build(model: &Model) -> Self {
        let currency = model.config.currency_symbol.as_str();

        let friends = model
            .friends
            .iter()
            .map(|f| FriendRow::render(f, model.is_selected(&f.id), currency))
            .collect();

        let add_friend = model.add_form_open.then(|| AddFriendView {
            name: model.add_form.name.clone(),
            image: model.add_form.image.clone(),
        });

        let split_bill = model.selected_friend().map(|friend| {
            let form = &model.split_form;
            SplitBillView {
                friend_id: friend.id.0.clone(),
                title: format!("Split a bill with {}", friend.name),
                bill: amount_text(form.bill()),
                user_expense: amount_text(form.user_expense()),
                friend_expense_label: format!("{}'s expense", friend.name),
                friend_expense: amount_text(form.friend_expense()),
                payer: form.payer(),
                payer_options: vec![
                    PayerOption {
                        payer: Payer::User,
                        label: USER_PAYER_LABEL.into(),
                    },
                    PayerOption {
                        payer: Payer::Friend,
                        label: friend.name.clone(),
                    },
                ],
                can_submit: form.can_submit(),
            }
        });

        Self {
            friends,
            add_friend,
            add_friend_button_label: if model.add_form_open {
                CLOSE_LABEL
            } else {
                ADD_FRIEND_LABEL
            }
            .into(),
            split_bill,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::friend::FriendId;

    #[test]
    fn test_seed_view() {
        let view = ViewModel::build(&Model::default());

        let messages: Vec<_> = view
            .friends
            .iter()
            .map(|r| (r.message.as_str(), r.tone))
            .collect();
        assert_eq!(
            messages,
            [
                ("You owe Clark $7", BalanceTone::Red),
                ("Sarah owes you $20", BalanceTone::Green),
                ("You and Anthony are even", BalanceTone::Plain),
            ]
        );
        assert!(view.friends.iter().all(|r| r.toggle_label == SELECT_LABEL));
        assert_eq!(view.add_friend, None);
        assert_eq!(view.add_friend_button_label, ADD_FRIEND_LABEL);
        assert_eq!(view.split_bill, None);
    }

    #[test]
    fn test_split_bill_view() {
        let mut model = Model::default();
        model.select_friend(FriendId::new("933372"));
        model.split_form.set_bill("100").unwrap();
        model.split_form.set_user_expense("40").unwrap();

        let view = ViewModel::build(&model);
        let split = view.split_bill.unwrap();

        assert_eq!(split.title, "Split a bill with Sarah");
        assert_eq!(split.bill, "100");
        assert_eq!(split.user_expense, "40");
        assert_eq!(split.friend_expense, "60");
        assert_eq!(split.friend_expense_label, "Sarah's expense");
        assert_eq!(split.payer, Payer::User);
        assert_eq!(split.payer_options[1].label, "Sarah");
        assert!(split.can_submit);

        let sarah = &view.friends[1];
        assert!(sarah.is_selected);
        assert_eq!(sarah.toggle_label, CLOSE_LABEL);
    }

    #[test]
    fn test_add_friend_view_open() {
        let mut model = Model::default();
        model.toggle_add_form();
        model.add_form.set_name("Mia");

        let view = ViewModel::build(&model);
        assert_eq!(
            view.add_friend,
            Some(AddFriendView {
                name: "Mia".into(),
                image: "https://i.pravatar.cc/48".into(),
            })
        );
        assert_eq!(view.add_friend_button_label, CLOSE_LABEL);
    }

    #[test]
    fn test_dangling_selection_hides_split_form() {
        let mut model = Model::default();
        model.selection = Some(FriendId::new("gone"));
        let view = ViewModel::build(&model);
        assert_eq!(view.split_bill, None);
        assert!(view.friends.iter().all(|r| !r.is_selected));
    }

    #[test]
    fn test_custom_currency() {
        let mut model = Model::default();
        model.config.currency_symbol = "€".into();
        let view = ViewModel::build(&model);
        assert_eq!(view.friends[1].message, "Sarah owes you €20");
    }
}
