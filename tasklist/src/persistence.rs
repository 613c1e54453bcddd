//! Synchronizes [`AppState`] with a [`KeyValueStore`].
//!
//! The whole state is written under a single key after every change and read
//! back at startup. A snapshot that fails to parse is treated as absent: the
//! app starts from its initial state rather than refusing to run.

use tasklist_core::AppState;
use tasklist_core::snapshot::{self, STATE_KEY, SnapshotError};

use crate::storage::{KeyValueStore, StorageError};

/// Errors from reading or writing the persisted state.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// The backing store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The state could not be serialized.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// How [`StatePersistence::load`] arrived at its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing stored yet; the initial state was used.
    Missing,
    /// The stored snapshot was used as-is.
    Restored,
    /// The stored snapshot broke an invariant and was repaired.
    Repaired,
    /// The stored payload was unreadable; the initial state was used.
    Corrupt,
}

/// Result of a successful load.
#[derive(Debug, Clone)]
pub struct Loaded {
    /// State to start from.
    pub state: AppState,
    /// Where the state came from.
    pub outcome: LoadOutcome,
}

/// Persistence adapter between the app and a key-value store.
pub struct StatePersistence<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> StatePersistence<S> {
    /// Persist under the default [`STATE_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, STATE_KEY)
    }

    /// Persist under a custom key.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// The underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Reads the stored state, falling back to `initial` when there is none.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Storage`] if the store cannot be read. A
    /// malformed payload is not an error; see [`LoadOutcome::Corrupt`].
    pub fn load(&self, initial: AppState) -> Result<Loaded, PersistenceError> {
        let Some(payload) = self.store.get(&self.key)? else {
            tracing::info!(key = %self.key, "no saved state, starting fresh");
            return Ok(Loaded {
                state: initial,
                outcome: LoadOutcome::Missing,
            });
        };

        match snapshot::decode(&payload) {
            Ok(mut state) => {
                if let Err(violation) = state.check_invariants() {
                    tracing::warn!(key = %self.key, %violation, "repairing saved state");
                    state.repair();
                    return Ok(Loaded {
                        state,
                        outcome: LoadOutcome::Repaired,
                    });
                }
                tracing::info!(key = %self.key, tasks = state.tasks.len(), "restored saved state");
                Ok(Loaded {
                    state,
                    outcome: LoadOutcome::Restored,
                })
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "saved state unreadable, starting fresh");
                Ok(Loaded {
                    state: initial,
                    outcome: LoadOutcome::Corrupt,
                })
            }
        }
    }

    /// Overwrites the stored state with `state`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if encoding or writing fails.
    pub fn save(&self, state: &AppState) -> Result<(), PersistenceError> {
        let payload = snapshot::encode(state)?;
        self.store.set(&self.key, &payload)?;
        tracing::debug!(key = %self.key, tasks = state.tasks.len(), "state saved");
        Ok(())
    }
}
