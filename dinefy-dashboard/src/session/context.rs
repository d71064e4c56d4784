//! Session context: one boolean in a key-value store, plus change notification

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::store::{KeyValueStore, StoreError};

/// Storage key of the session flag
pub const SESSION_KEY: &str = "isAuthenticated";

/// Explicitly passed session handle
///
/// The store is the source of truth. Every read goes to the store, and any
/// observed change is published on a watch channel.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn KeyValueStore>,
    tx: Arc<watch::Sender<bool>>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let initial = read_flag(store.as_ref());
        let (tx, _rx) = watch::channel(initial);
        Self {
            store,
            tx: Arc::new(tx),
        }
    }

    /// Current flag; re-reads the store
    pub fn is_authenticated(&self) -> bool {
        self.refresh()
    }

    pub fn login(&self) -> Result<(), StoreError> {
        self.store.set(SESSION_KEY, "true")?;
        self.tx.send_replace(true);
        Ok(())
    }

    pub fn logout(&self) -> Result<(), StoreError> {
        self.store.remove(SESSION_KEY)?;
        self.tx.send_replace(false);
        Ok(())
    }

    /// Re-read the store and publish if the value changed
    pub fn refresh(&self) -> bool {
        let current = read_flag(self.store.as_ref());
        let changed = self.tx.send_if_modified(|value| {
            if *value != current {
                *value = current;
                true
            } else {
                false
            }
        });
        if changed {
            tracing::info!(authenticated = current, "Session flag changed in storage");
        }
        current
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}

/// Absent, anything other than `"true"`, or unreadable: not authenticated
fn read_flag(store: &dyn KeyValueStore) -> bool {
    match store.get(SESSION_KEY) {
        Ok(value) => value.as_deref() == Some("true"),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read session flag, treating as logged out");
            false
        }
    }
}

/// Poll the store on a fixed interval so writes from other processes reach
/// subscribers without waiting for a request
pub fn spawn_storage_sync(session: SessionContext, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            session.refresh();
        }
    })
}
