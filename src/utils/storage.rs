// ============================================================================
// STORAGE - key/value persistence behind a trait
// ============================================================================
// View logic never touches `window.localStorage` directly; it goes through a
// `KeyValueStorage` so the session lifecycle can run against memory in tests.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::{window, Storage};

use crate::error::AppError;

pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove_item(&self, key: &str);
}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Browser `localStorage`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStorage;

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        let storage = get_local_storage()
            .ok_or_else(|| AppError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|_| AppError::Storage(format!("could not write key {}", key)))
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            if storage.remove_item(key).is_err() {
                log::warn!("⚠️ Could not remove {} from localStorage", key);
            }
        }
    }
}

/// In-memory storage; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }
}

impl PartialEq for MemoryStorage {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}
