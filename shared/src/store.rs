use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::error::StoreError;
use crate::friend::{Friend, FriendId};

/// Ordered friend collection.
///
/// Mutations never touch a published list in place: they build a new `Vec`
/// and swap the `Arc`, so anything holding a [`FriendStore::snapshot`] keeps
/// seeing the list as it was.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FriendStore {
    friends: Arc<Vec<Friend>>,
}

impl FriendStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a seed list. Later entries that reuse an id are
    /// dropped.
    #[must_use]
    pub fn from_friends(friends: Vec<Friend>) -> Self {
        let mut seen = HashSet::with_capacity(friends.len());
        let mut kept = Vec::with_capacity(friends.len());
        for friend in friends {
            if seen.insert(friend.id.clone()) {
                kept.push(friend);
            } else {
                warn!(id = %friend.id, "dropping duplicate seed friend");
            }
        }
        Self {
            friends: Arc::new(kept),
        }
    }

    #[instrument(skip(self, friend), fields(id = %friend.id))]
    pub fn add_friend(&mut self, friend: Friend) -> Result<(), StoreError> {
        if self.contains(&friend.id) {
            return Err(StoreError::DuplicateId(friend.id));
        }

        let mut next = Vec::with_capacity(self.friends.len() + 1);
        next.extend(self.friends.iter().cloned());
        next.push(friend);
        self.friends = Arc::new(next);

        info!(count = self.friends.len(), "Friend added");
        Ok(())
    }

    /// Adds `delta` to one friend's balance and returns the new balance.
    #[instrument(skip(self))]
    pub fn apply_balance_delta(
        &mut self,
        id: &FriendId,
        delta: Decimal,
    ) -> Result<Decimal, StoreError> {
        let current = self
            .get(id)
            .map(|f| f.balance)
            .ok_or_else(|| StoreError::UnknownFriend(id.clone()))?;
        let updated = current
            .checked_add(delta)
            .ok_or_else(|| StoreError::Overflow(id.clone()))?;

        let next = self
            .friends
            .iter()
            .map(|f| {
                if &f.id == id {
                    Friend {
                        balance: updated,
                        ..f.clone()
                    }
                } else {
                    f.clone()
                }
            })
            .collect();
        self.friends = Arc::new(next);

        info!(balance = %updated, "Balance updated");
        Ok(updated)
    }

    #[must_use]
    pub fn get(&self, id: &FriendId) -> Option<&Friend> {
        self.friends.iter().find(|f| &f.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &FriendId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Friend> {
        self.friends.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.friends.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }

    #[must_use]
    pub fn snapshot(&self) -> Arc<Vec<Friend>> {
        Arc::clone(&self.friends)
    }
}
