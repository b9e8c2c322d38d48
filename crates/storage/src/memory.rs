use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

use palestra_domain as domain;

use crate::KeyValueStore;

/// In-memory key-value store.
///
/// Clones share their entries, so a clone can be used to inspect what was written through
/// another. Marking the store as unavailable makes all reads and writes fail.
#[derive(Clone, Default)]
pub struct Memory {
    entries: Rc<RefCell<HashMap<String, String>>>,
    unavailable: Rc<Cell<bool>>,
}

impl Memory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    #[must_use]
    pub fn get_entry(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }
}

impl KeyValueStore for Memory {
    async fn get(&self, key: &str) -> Result<Option<String>, domain::StorageError> {
        if self.unavailable.get() {
            return Err(domain::StorageError::Unavailable);
        }
        Ok(self.get_entry(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), domain::StorageError> {
        if self.unavailable.get() {
            return Err(domain::StorageError::Unavailable);
        }
        self.entries.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_get_set() {
        let memory = Memory::new();

        assert_eq!(block_on(memory.get("a")).unwrap(), None);

        block_on(memory.set("a", "1".to_string())).unwrap();
        block_on(memory.set("b", "2".to_string())).unwrap();
        block_on(memory.set("a", "3".to_string())).unwrap();

        assert_eq!(block_on(memory.get("a")).unwrap(), Some("3".to_string()));
        assert_eq!(block_on(memory.get("b")).unwrap(), Some("2".to_string()));
    }

    #[test]
    fn test_clones_share_entries() {
        let memory = Memory::new();
        let clone = memory.clone();

        block_on(clone.set("a", "1".to_string())).unwrap();

        assert_eq!(memory.get_entry("a"), Some("1".to_string()));
    }

    #[test]
    fn test_unavailable() {
        let memory = Memory::new();
        memory.insert("a", "1");
        memory.set_unavailable(true);

        assert!(matches!(
            block_on(memory.get("a")),
            Err(domain::StorageError::Unavailable)
        ));
        assert!(matches!(
            block_on(memory.set("a", "2".to_string())),
            Err(domain::StorageError::Unavailable)
        ));

        memory.set_unavailable(false);

        assert_eq!(block_on(memory.get("a")).unwrap(), Some("1".to_string()));
    }
}
