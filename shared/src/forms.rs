//! Local state of the two input forms.
//!
//! Edits arrive as raw text from the shell. A rejected edit leaves the
//! previous value in place; a rejected submit leaves the form untouched.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ValidationError;
use crate::friend::{Friend, FriendId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddFriendForm {
    pub name: String,
    pub image: String,
    default_image: String,
}

impl AddFriendForm {
    pub fn new(default_image: impl Into<String>) -> Self {
        let default_image = default_image.into();
        Self {
            name: String::new(),
            image: default_image.clone(),
            default_image,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_image(&mut self, image: impl Into<String>) {
        self.image = image.into();
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.image.clone_from(&self.default_image);
    }

    /// Builds a new zero-balance friend and resets the fields.
    pub fn submit(&mut self) -> Result<Friend, ValidationError> {
        let name = self.name.trim();
        let image = self.image.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if image.is_empty() {
            return Err(ValidationError::EmptyImage);
        }

        let id = FriendId::generate();
        let image = format!("{image}?={id}");
        let friend = Friend::new(id, name, image);

        self.reset();
        Ok(friend)
    }
}

/// Who paid the bill up front.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payer {
    #[default]
    User,
    Friend,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitBillForm {
    bill: Option<Decimal>,
    user_expense: Option<Decimal>,
    payer: Payer,
}

fn parse_amount(text: &str) -> Result<Option<Decimal>, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let amount: Decimal = text
        .parse()
        .map_err(|_| ValidationError::InvalidAmount(text.to_owned()))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::NegativeAmount(amount));
    }
    Ok(Some(amount))
}

impl SplitBillForm {
    #[must_use]
    pub fn bill(&self) -> Option<Decimal> {
        self.bill
    }

    #[must_use]
    pub fn user_expense(&self) -> Option<Decimal> {
        self.user_expense
    }

    #[must_use]
    pub fn payer(&self) -> Payer {
        self.payer
    }

    /// `bill - user_expense`, or `None` while the bill is empty.
    #[must_use]
    pub fn friend_expense(&self) -> Option<Decimal> {
        self.bill
            .map(|bill| bill - self.user_expense.unwrap_or(Decimal::ZERO))
    }

    pub fn set_bill(&mut self, text: &str) -> Result<(), ValidationError> {
        self.bill = parse_amount(text)?;
        Ok(())
    }

    /// Rejects anything above the current bill; an empty bill counts as zero.
    pub fn set_user_expense(&mut self, text: &str) -> Result<(), ValidationError> {
        let expense = parse_amount(text)?;
        let bill = self.bill.unwrap_or(Decimal::ZERO);
        if let Some(expense) = expense {
            if expense > bill {
                return Err(ValidationError::ExpenseExceedsBill { expense, bill });
            }
        }
        self.user_expense = expense;
        Ok(())
    }

    pub fn set_payer(&mut self, payer: Payer) {
        self.payer = payer;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.delta().is_ok()
    }

    /// Signed change to the selected friend's balance.
    ///
    /// Positive when the user paid (the friend owes their share), negative
    /// when the friend paid (the user owes their own share).
    pub fn delta(&self) -> Result<Decimal, ValidationError> {
        let bill = match self.bill {
            Some(bill) if !bill.is_zero() => bill,
            _ => return Err(ValidationError::MissingBill),
        };
        let user_expense = self.user_expense.unwrap_or(Decimal::ZERO);

        let delta = match self.payer {
            Payer::User => bill - user_expense,
            Payer::Friend => -user_expense,
        };
        debug!(%bill, %user_expense, payer = ?self.payer, %delta, "Split computed");
        Ok(delta)
    }
}
