use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::config::SplitConfig;
use crate::error::StoreError;
use crate::forms::{AddFriendForm, SplitBillForm};
use crate::friend::{Friend, FriendId};
use crate::store::FriendStore;

/// Whole application state, owned by the core.
///
/// The transitions below are the only way selection, form visibility and
/// balances change. Each runs to completion inside a single `update`.
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub config: SplitConfig,
    pub friends: FriendStore,
    pub selection: Option<FriendId>,
    pub add_form_open: bool,
    pub add_form: AddFriendForm,
    pub split_form: SplitBillForm,
}

impl Default for Model {
    fn default() -> Self {
        Self::with_config(SplitConfig::default())
    }
}

impl Model {
    #[must_use]
    pub fn with_config(config: SplitConfig) -> Self {
        Self {
            friends: FriendStore::from_friends(config.seed_friends.clone()),
            selection: None,
            add_form_open: false,
            add_form: AddFriendForm::new(config.avatar_base_url.clone()),
            split_form: SplitBillForm::default(),
            config,
        }
    }

    /// The selected friend, if the selection still points into the store.
    #[must_use]
    pub fn selected_friend(&self) -> Option<&Friend> {
        self.selection.as_ref().and_then(|id| self.friends.get(id))
    }

    #[must_use]
    pub fn is_selected(&self, id: &FriendId) -> bool {
        self.selection.as_ref() == Some(id)
    }

    pub fn toggle_add_form(&mut self) {
        self.add_form_open = !self.add_form_open;
    }

    /// Selecting the current friend again deselects it. Either way the
    /// add-friend form closes.
    pub fn select_friend(&mut self, id: FriendId) {
        self.add_form_open = false;

        if self.is_selected(&id) {
            self.selection = None;
        } else if self.friends.contains(&id) {
            self.selection = Some(id);
        } else {
            warn!(%id, "Select ignored: unknown friend");
            return;
        }
        self.split_form.reset();
    }

    pub fn friend_added(&mut self, friend: Friend) -> Result<(), StoreError> {
        self.friends.add_friend(friend)?;
        self.add_form_open = false;
        Ok(())
    }

    /// Applies a settled split to the selected friend and clears the
    /// selection. Returns the friend's new balance.
    ///
    /// A balance that would leave the decimal range changes nothing; the
    /// selection and the form stay as they were.
    pub fn bill_split(&mut self, delta: Decimal) -> Result<Option<Decimal>, StoreError> {
        let Some(id) = self.selection.clone() else {
            debug!("Bill split ignored: nothing selected");
            return Ok(None);
        };

        match self.friends.apply_balance_delta(&id, delta) {
            Ok(balance) => {
                self.selection = None;
                self.split_form.reset();
                info!(%id, %delta, %balance, "Bill split");
                Ok(Some(balance))
            }
            Err(e @ StoreError::Overflow(_)) => Err(e),
            Err(e) => {
                self.selection = None;
                self.split_form.reset();
                Err(e)
            }
        }
    }

    /// Drops a selection whose friend is no longer in the store.
    pub fn reconcile_selection(&mut self) {
        if let Some(id) = &self.selection {
            if !self.friends.contains(id) {
                warn!(%id, "Clearing dangling selection");
                self.selection = None;
                self.split_form.reset();
            }
        }
    }
}
