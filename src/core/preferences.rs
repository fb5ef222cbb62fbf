//! Client-local preferences
//!
//! The only persisted state on the site is the visitor's background music
//! opt-out. It is read once when the player mounts and written only when the
//! visitor disables the music.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::error::StorageError;

/// Storage key of the music opt-out flag
pub const MUSIC_DISABLED_KEY: &str = "musicDisabled";

/// Key/value storage surviving page loads
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Whether the visitor opted out of background music
pub fn music_disabled<P: PreferenceStore + ?Sized>(store: &P) -> bool {
    store.get(MUSIC_DISABLED_KEY).as_deref() == Some("true")
}

/// Persist the music opt-out
pub fn disable_music<P: PreferenceStore + ?Sized>(store: &P) -> Result<(), StorageError> {
    store.set(MUSIC_DISABLED_KEY, "true")
}

/// In-memory [`PreferenceStore`]; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<RefCell<usize>>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store rejecting every write, like private browsing with storage disabled
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::WriteFailed(key.to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_enabled() {
        assert!(!music_disabled(&MemoryStore::new()));
    }

    #[test]
    fn test_opt_out_survives_reload() {
        let store = MemoryStore::new();
        disable_music(&store).unwrap();

        // A fresh page load reads the same storage
        let reloaded = store.clone();
        assert!(music_disabled(&reloaded));
        assert_eq!(reloaded.write_count(), 1);
    }

    #[test]
    fn test_only_literal_true_disables() {
        let store = MemoryStore::new();
        store.set(MUSIC_DISABLED_KEY, "TRUE").unwrap();
        assert!(!music_disabled(&store));
        store.set(MUSIC_DISABLED_KEY, "1").unwrap();
        assert!(!music_disabled(&store));
    }

    #[test]
    fn test_read_only_store_reports_failure() {
        let store = MemoryStore::read_only();
        assert_eq!(
            disable_music(&store),
            Err(StorageError::WriteFailed(MUSIC_DISABLED_KEY.to_string()))
        );
        assert!(!music_disabled(&store));
    }
}
