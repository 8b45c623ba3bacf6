use gloo_storage::{LocalStorage, Storage as _};
use serde::{de::DeserializeOwned, Serialize};
use crate::error::StorageError;

/// Almacén clave/valor de texto (localStorage en el navegador)
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// localStorage del navegador
#[derive(Clone, Copy, Default, PartialEq)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

pub fn save_to_storage<S: KeyValueStore, T: Serialize>(store: &S, key: &str, value: &T) -> Result<(), StorageError> {
    let json = serde_json::to_string(value)
        .map_err(|e| StorageError::Serialize(e.to_string()))?;
    store.set_item(key, &json)
}

/// Lee y deserializa una clave; None si no existe o no es JSON válido
pub fn load_from_storage<S: KeyValueStore, T: DeserializeOwned>(store: &S, key: &str) -> Option<T> {
    let json = store.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn remove_from_storage<S: KeyValueStore>(store: &S, key: &str) -> Result<(), StorageError> {
    store.remove_item(key)
}

#[cfg(test)]
pub(crate) mod memory {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Almacén en memoria para tests nativos
    #[derive(Default)]
    pub struct MemoryStore {
        items: RefCell<HashMap<String, String>>,
    }

    impl MemoryStore {
        pub fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.items.borrow_mut().insert(key.to_string(), value.to_string());
            store
        }

        pub fn contains(&self, key: &str) -> bool {
            self.items.borrow().contains_key(key)
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.items.borrow().get(key).cloned())
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            self.items.borrow_mut().remove(key);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;

    #[test]
    fn save_then_load_and_remove() {
        let store = MemoryStore::default();
        save_to_storage(&store, "forms", &vec!["a", "b"]).unwrap();
        let loaded: Option<Vec<String>> = load_from_storage(&store, "forms");
        assert_eq!(loaded, Some(vec!["a".to_string(), "b".to_string()]));

        remove_from_storage(&store, "forms").unwrap();
        assert!(!store.contains("forms"));
    }

    #[test]
    fn load_ignores_invalid_json() {
        let store = MemoryStore::with("forms", "{no es json");
        let loaded: Option<Vec<String>> = load_from_storage(&store, "forms");
        assert!(loaded.is_none());
    }
}
