use log::{debug, error};

use crate::{Collection, CollectionRepository, CollectionService, ReadError, WriteError};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::Unavailable) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: CollectionRepository> CollectionService for Service<R> {
    async fn get_collection(&self) -> Result<Option<Collection>, ReadError> {
        log_on_error!(
            self.repository.read_collection(),
            ReadError,
            "get",
            "muscle groups"
        )
    }

    async fn set_collection(&self, collection: &Collection) -> Result<(), WriteError> {
        log_on_error!(
            self.repository.write_collection(collection),
            WriteError,
            "set",
            "muscle groups"
        )
    }
}
