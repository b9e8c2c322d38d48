#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use palestra_domain as domain;

pub mod codec;
pub mod local_storage;
pub mod memory;

/// Key under which the muscle groups are stored.
pub const STORAGE_KEY: &str = "palestrapp_groups_v1";

#[allow(async_fn_in_trait)]
pub trait KeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, domain::StorageError>;
    async fn set(&self, key: &str, value: String) -> Result<(), domain::StorageError>;
}

/// Stores the complete collection as JSON under a single key.
pub struct KeyValueRepository<S> {
    store: S,
    key: String,
}

impl<S> KeyValueRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
        }
    }
}

impl<S: KeyValueStore> domain::CollectionRepository for KeyValueRepository<S> {
    async fn read_collection(&self) -> Result<Option<domain::Collection>, domain::ReadError> {
        match self.store.get(&self.key).await? {
            Some(text) if !text.is_empty() => codec::decode(&text)
                .map(Some)
                .map_err(|err| domain::ReadError::Decode(Box::new(err))),
            _ => Ok(None),
        }
    }

    async fn write_collection(
        &self,
        collection: &domain::Collection,
    ) -> Result<(), domain::WriteError> {
        let text =
            codec::encode(collection).map_err(|err| domain::WriteError::Encode(Box::new(err)))?;
        Ok(self.store.set(&self.key, text).await?)
    }
}
