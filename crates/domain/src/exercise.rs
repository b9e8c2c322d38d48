use chrono::Utc;
use derive_more::{AsRef, Display};
use uuid::Uuid;

use crate::{Name, NameError, Weight};

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub kg: Weight,
}

impl Exercise {
    /// Creates an exercise with a fresh identifier from raw user input.
    pub fn new(name: &str, kg: &str) -> Result<Self, NameError> {
        Ok(Self {
            id: ExerciseID::generate(),
            name: Name::new(name)?,
            kg: Weight::parse(kg),
        })
    }
}

#[derive(AsRef, Debug, Display, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[as_ref(str)]
pub struct ExerciseID(String);

impl ExerciseID {
    /// Builds an identifier from the current time in milliseconds and a random suffix.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!(
            "{}_{}",
            Utc::now().timestamp_millis(),
            &Uuid::new_v4().simple().to_string()[..12]
        ))
    }

    pub fn new(id: &str) -> Result<Self, IdError> {
        if id.is_empty() {
            return Err(IdError::Empty);
        }
        Ok(Self(id.to_string()))
    }
}

#[cfg(test)]
impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum IdError {
    #[error("ID must not be empty")]
    Empty,
}
