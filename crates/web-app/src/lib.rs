#![warn(clippy::pedantic)]

use std::sync::{Arc, Mutex};

use futures_util::future::LocalBoxFuture;

use palestra_domain as domain;
use palestra_storage::{KeyValueRepository, local_storage::LocalStorage};

pub mod log;

pub type Store = domain::Store<KeyValueRepository<LocalStorage>>;

/// Installs the logger and loads the muscle groups from the browser storage.
///
/// Writes triggered by the returned store run on the browser's microtask queue.
pub async fn start() -> Store {
    if let Err(err) = log::init(Arc::new(Mutex::new(LocalStorage))) {
        ::log::warn!("failed to initialize logger: {err}");
    }

    domain::Store::load(
        KeyValueRepository::new(LocalStorage),
        wasm_bindgen_futures::spawn_local::<LocalBoxFuture<'static, ()>>,
    )
    .await
}
