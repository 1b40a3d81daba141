//! Subscription registry: the [`SubscriberStore`] trait and the in-memory default.
//!
//! The in-memory store is process-wide state with no persistence guarantee — subscriptions
//! are lost on restart. A deployment that needs durability implements [`SubscriberStore`]
//! over a real database; everything above the trait is unchanged.

use async_trait::async_trait;
use news_core::{RegistryError, Subscriber};
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::info;

/// Result of a subscribe call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Created,
    AlreadySubscribed,
}

/// Result of an unsubscribe call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsubscribeOutcome {
    Removed,
    NotSubscribed,
}

/// Registry of daily-digest subscribers keyed by unique user id.
#[async_trait]
pub trait SubscriberStore: Send + Sync {
    /// Registers a subscriber. Idempotent: an existing key is a no-op that reports
    /// [`SubscribeOutcome::AlreadySubscribed`] and never overwrites `subscribed_at`.
    async fn subscribe(&self, user_id: i64, chat_id: i64)
        -> Result<SubscribeOutcome, RegistryError>;

    /// Removes a subscriber; a no-op reporting [`UnsubscribeOutcome::NotSubscribed`] when absent.
    async fn unsubscribe(&self, user_id: i64) -> Result<UnsubscribeOutcome, RegistryError>;

    /// Returns a snapshot of all subscribers. Fan-out iterates this copy, never the live
    /// structure, so concurrent subscribe/unsubscribe cannot corrupt a send cycle.
    async fn list_all(&self) -> Result<Vec<Subscriber>, RegistryError>;
}

/// In-memory [`SubscriberStore`]: a map behind a single mutation lock.
#[derive(Default)]
pub struct InMemorySubscriberStore {
    subscribers: Mutex<HashMap<i64, Subscriber>>,
}

impl InMemorySubscriberStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubscriberStore for InMemorySubscriberStore {
    async fn subscribe(
        &self,
        user_id: i64,
        chat_id: i64,
    ) -> Result<SubscribeOutcome, RegistryError> {
        let mut subscribers = self.subscribers.lock().await;
        if subscribers.contains_key(&user_id) {
            return Ok(SubscribeOutcome::AlreadySubscribed);
        }
        subscribers.insert(user_id, Subscriber::new(user_id, chat_id));
        info!(user_id, chat_id, "subscriber added");
        Ok(SubscribeOutcome::Created)
    }

    async fn unsubscribe(&self, user_id: i64) -> Result<UnsubscribeOutcome, RegistryError> {
        let mut subscribers = self.subscribers.lock().await;
        match subscribers.remove(&user_id) {
            Some(_) => {
                info!(user_id, "subscriber removed");
                Ok(UnsubscribeOutcome::Removed)
            }
            None => Ok(UnsubscribeOutcome::NotSubscribed),
        }
    }

    async fn list_all(&self) -> Result<Vec<Subscriber>, RegistryError> {
        let subscribers = self.subscribers.lock().await;
        Ok(subscribers.values().cloned().collect())
    }
}
