use std::cell::Cell;
use std::rc::Rc;
use crate::error::StorageError;
use crate::utils::{ MemoryStore, PreferenceStore };

/// Memory store that counts writes, so tests can see every `set` reach it.
#[derive(Clone, Default)]
pub struct CountingStore {
    pub inner: MemoryStore,
    pub writes: Rc<Cell<usize>>,
}

impl CountingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for CountingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes.set(self.writes.get() + 1);
        self.inner.set(key, value)
    }
}

/// Reads succeed from the wrapped store, writes are rejected like a full quota.
#[derive(Clone, Default)]
pub struct ReadOnlyStore {
    pub inner: MemoryStore,
}

impl PreferenceStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("QuotaExceededError".to_string()))
    }
}

pub fn ambient_dark() -> bool {
    true
}

pub fn ambient_light() -> bool {
    false
}
