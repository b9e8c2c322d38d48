//! JSON representation of the muscle group collection
//!
//! The collection is stored as an array of muscle groups, each containing an array of
//! exercises. Groups without `exercises` and exercises without `kg` are accepted; every other
//! deviation from the expected shape is rejected.

use palestra_domain as domain;

pub fn encode(collection: &domain::Collection) -> Result<String, EncodeError> {
    Ok(serde_json::to_string(&Collection::from(collection))?)
}

pub fn decode(text: &str) -> Result<domain::Collection, DecodeError> {
    domain::Collection::try_from(serde_json::from_str::<Collection>(text)?)
}

#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct EncodeError(#[from] serde_json::Error);

#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Id(#[from] domain::IdError),
    #[error(transparent)]
    Name(#[from] domain::NameError),
    #[error(transparent)]
    Collection(#[from] domain::CollectionError),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Collection(Vec<MuscleGroup>);

impl From<&domain::Collection> for Collection {
    fn from(value: &domain::Collection) -> Self {
        Self(value.groups().map(MuscleGroup::from).collect())
    }
}

impl TryFrom<Collection> for domain::Collection {
    type Error = DecodeError;

    fn try_from(value: Collection) -> Result<Self, Self::Error> {
        Ok(domain::Collection::new(
            value
                .0
                .into_iter()
                .map(domain::MuscleGroup::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        )?)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct MuscleGroup {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub exercises: Option<Vec<Exercise>>,
}

impl From<&domain::MuscleGroup> for MuscleGroup {
    fn from(value: &domain::MuscleGroup) -> Self {
        Self {
            id: value.id.to_string(),
            title: value.title.clone(),
            exercises: Some(value.exercises.iter().map(Exercise::from).collect()),
        }
    }
}

impl TryFrom<MuscleGroup> for domain::MuscleGroup {
    type Error = DecodeError;

    fn try_from(value: MuscleGroup) -> Result<Self, Self::Error> {
        Ok(Self {
            id: domain::MuscleGroupID::new(&value.id)?,
            title: value.title,
            exercises: value
                .exercises
                .unwrap_or_default()
                .into_iter()
                .map(domain::Exercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub kg: Option<f32>,
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.to_string(),
            kg: Some(value.kg.into()),
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = DecodeError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: domain::ExerciseID::new(&value.id)?,
            name: domain::Name::new(&value.name)?,
            kg: domain::Weight::new(value.kg.unwrap_or_default()),
        })
    }
}
