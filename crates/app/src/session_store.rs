use shared_types::{SessionConfig, StoredSession};

#[cfg(feature = "web")]
pub use local::LocalStorageStore;

/// Store the session lives in: `localStorage` on the web, memory elsewhere.
#[cfg(feature = "web")]
pub type BrowserStore = LocalStorageStore;
#[cfg(not(feature = "web"))]
pub type BrowserStore = shared_types::MemoryStore;

pub type AppSession = StoredSession<BrowserStore>;

pub fn open_session(keys: SessionConfig) -> AppSession {
    StoredSession::new(BrowserStore::default(), keys)
}

#[cfg(feature = "web")]
mod local {
    use shared_types::{KeyValueStore, StoreError};

    /// `window.localStorage`. Reads degrade to `None` when storage is
    /// unavailable (private browsing, sandboxed iframes).
    #[derive(Debug, Clone, Copy, Default)]
    pub struct LocalStorageStore;

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn require_storage(key: &str) -> Result<web_sys::Storage, StoreError> {
        storage().ok_or_else(|| StoreError::new(key, "localStorage is unavailable"))
    }

    impl KeyValueStore for LocalStorageStore {
        fn get(&self, key: &str) -> Option<String> {
            storage()?.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            require_storage(key)?
                .set_item(key, value)
                .map_err(|e| StoreError::new(key, format!("{e:?}")))
        }

        fn remove(&self, key: &str) -> Result<(), StoreError> {
            require_storage(key)?
                .remove_item(key)
                .map_err(|e| StoreError::new(key, format!("{e:?}")))
        }
    }
}
