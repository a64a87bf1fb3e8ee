//! Draft store: durable key-value storage with change notifications.
//!
//! A [`DraftStore`] is one view onto the storage file, comparable to one
//! browser tab looking at shared local storage. Further views on the same
//! file are opened with [`DraftStore::connect_tab`]. Every write that
//! changes a value is published as a [`StorageEvent`] to the watchers of all
//! *other* tabs, so a listing can react to a draft saved elsewhere without
//! polling.
//!
//! ```text
//! ┌──────────────┐  set/remove  ┌──────────────┐   broadcast   ┌──────────────┐
//! │  DraftStore  │─────────────▶│   Database   │               │StorageWatcher│
//! │   (tab 1)    │──────────────┼──────────────┼──────────────▶│   (tab 2)    │
//! └──────────────┘              └──────────────┘               └──────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Resolves the database location and opens the first tab
//! - [`records`]: Typed access to the draft, the session flag and saved
//!   recipes

use std::{
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use log::{debug, warn};
use tokio::sync::broadcast::{
    self,
    error::{RecvError, TryRecvError},
};

use crate::{db::Database, error::Result};

pub mod builder;
pub mod records;

pub use builder::DraftStoreBuilder;

/// Key holding the serialized draft record.
pub const DRAFT_KEY: &str = "recipeDraft_v2";
/// Key holding the session status token.
pub const SESSION_STATUS_KEY: &str = "user_session_status";
/// Key holding the JSON array of submitted recipe summaries.
pub const SAVED_RECIPES_KEY: &str = "savedRecipes";

const EVENT_CAPACITY: usize = 64;

/// Identifies one store handle.
pub type TabId = u64;

/// A change made to storage by some tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEvent {
    pub key: String,
    pub old_value: Option<String>,
    /// `None` when the key was removed
    pub new_value: Option<String>,
    pub origin: TabId,
}

struct Channel {
    events: broadcast::Sender<StorageEvent>,
    next_tab: AtomicU64,
}

impl Channel {
    fn allocate_tab(&self) -> TabId {
        self.next_tab.fetch_add(1, Ordering::Relaxed)
    }
}

/// Key-value store handle for one tab.
pub struct DraftStore {
    db: Database,
    path: PathBuf,
    tab: TabId,
    channel: Arc<Channel>,
}

impl DraftStore {
    /// Opens the storage file at `path` as the first tab of a new
    /// notification channel.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let channel = Arc::new(Channel {
            events,
            next_tab: AtomicU64::new(1),
        });
        Self::open_tab(path.as_ref().to_path_buf(), channel)
    }

    fn open_tab(path: PathBuf, channel: Arc<Channel>) -> Result<Self> {
        let db = Database::new(&path)?;
        let tab = channel.allocate_tab();
        debug!("Opened storage tab {tab} on {}", path.display());
        Ok(Self {
            db,
            path,
            tab,
            channel,
        })
    }

    /// Opens another handle on the same file that shares change
    /// notifications with this one.
    pub fn connect_tab(&self) -> Result<Self> {
        Self::open_tab(self.path.clone(), Arc::clone(&self.channel))
    }

    pub fn tab(&self) -> TabId {
        self.tab
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        self.db.get(key)
    }

    /// Stores `value` under `key` and notifies other tabs if it changed.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let old_value = self.db.get(key)?;
        self.db.set(key, value)?;
        if old_value.as_deref() != Some(value) {
            self.publish(key, old_value, Some(value.to_string()));
        }
        Ok(())
    }

    /// Removes `key` and notifies other tabs if a value was present.
    pub fn remove(&self, key: &str) -> Result<()> {
        let old_value = self.db.get(key)?;
        if self.db.remove(key)? {
            self.publish(key, old_value, None);
        }
        Ok(())
    }

    /// Watches changes made by other tabs.
    pub fn subscribe(&self) -> StorageWatcher {
        StorageWatcher {
            receiver: self.channel.events.subscribe(),
            tab: self.tab,
        }
    }

    fn publish(&self, key: &str, old_value: Option<String>, new_value: Option<String>) {
        let event = StorageEvent {
            key: key.to_string(),
            old_value,
            new_value,
            origin: self.tab,
        };
        // No watchers is not an error
        let _ = self.channel.events.send(event);
    }
}

/// Receives storage changes originating from other tabs.
pub struct StorageWatcher {
    receiver: broadcast::Receiver<StorageEvent>,
    tab: TabId,
}

impl StorageWatcher {
    /// Waits for the next change made by another tab. Returns `None` once
    /// every store handle has been dropped.
    pub async fn recv(&mut self) -> Option<StorageEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) if event.origin == self.tab => continue,
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Storage watcher for tab {} skipped {skipped} events", self.tab);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Returns the next pending change from another tab without waiting.
    pub fn try_recv(&mut self) -> Option<StorageEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) if event.origin == self.tab => continue,
                Ok(event) => return Some(event),
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!("Storage watcher for tab {} skipped {skipped} events", self.tab);
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => return None,
            }
        }
    }
}
