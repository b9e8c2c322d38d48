#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod exercise;
mod muscle_group;
mod name;
mod service;
mod store;
mod weight;

pub use error::{ReadError, StorageError, WriteError};
pub use exercise::{Exercise, ExerciseID, IdError};
pub use muscle_group::{
    Collection, CollectionError, CollectionRepository, CollectionService, FALLBACK_TITLE,
    MuscleGroup, MuscleGroupID,
};
pub use name::{Name, NameError};
pub use service::Service;
pub use store::{Origin, Spawn, Store};
pub use weight::{WEIGHT_STEP, Weight};
