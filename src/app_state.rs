//! Implements a struct that holds the state of the wallet server.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, animation::AnimationConfig, store::WalletStore};

/// The state of the wallet server.
///
/// Every request locks the store, applies one user event and renders the
/// resulting snapshot, so events are handled one at a time.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The wallet, the add funds flow and the display settings.
    pub store: Arc<Mutex<WalletStore>>,

    /// How long the wallet screen's animations take.
    pub animation: AnimationConfig,
}

impl AppState {
    /// Create a new [AppState] with an empty wallet.
    pub fn new(animation: AnimationConfig) -> Self {
        Self {
            store: Arc::new(Mutex::new(WalletStore::new())),
            animation,
        }
    }

    /// Lock the wallet store.
    ///
    /// # Errors
    /// Returns [Error::StoreLockError] if another request panicked while
    /// holding the lock.
    pub fn lock_store(&self) -> Result<MutexGuard<'_, WalletStore>, Error> {
        self.store.lock().map_err(|error| {
            tracing::error!("could not acquire wallet store lock: {error}");
            Error::StoreLockError
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AnimationConfig::default())
    }
}
