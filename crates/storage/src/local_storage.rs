use gloo_storage::Storage as GlooStorage;
use palestra_domain as domain;

use crate::KeyValueStore;

/// Browser `localStorage`.
#[derive(Clone, Copy)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, domain::StorageError> {
        gloo_storage::LocalStorage::raw()
            .get_item(key)
            .map_err(|err| domain::StorageError::Other(format!("{err:?}").into()))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), domain::StorageError> {
        gloo_storage::LocalStorage::raw()
            .set_item(key, &value)
            .map_err(|err| domain::StorageError::Other(format!("{err:?}").into()))
    }
}
