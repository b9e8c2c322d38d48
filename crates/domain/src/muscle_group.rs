use std::{collections::HashSet, rc::Rc};

use derive_more::{AsRef, Display};

use crate::{Exercise, ExerciseID, IdError, Name, ReadError, Weight, WriteError};

#[allow(async_fn_in_trait)]
pub trait CollectionService {
    async fn get_collection(&self) -> Result<Option<Collection>, ReadError>;
    async fn set_collection(&self, collection: &Collection) -> Result<(), WriteError>;
}

#[allow(async_fn_in_trait)]
pub trait CollectionRepository {
    async fn read_collection(&self) -> Result<Option<Collection>, ReadError>;
    async fn write_collection(&self, collection: &Collection) -> Result<(), WriteError>;
}

/// Screen title used when a group cannot be resolved.
pub const FALLBACK_TITLE: &str = "Exercises";

#[derive(Debug, Clone, PartialEq)]
pub struct MuscleGroup {
    pub id: MuscleGroupID,
    pub title: String,
    pub exercises: Vec<Exercise>,
}

impl MuscleGroup {
    #[must_use]
    pub fn exercise(&self, id: &ExerciseID) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == *id)
    }
}

#[derive(AsRef, Debug, Display, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[as_ref(str)]
pub struct MuscleGroupID(String);

impl MuscleGroupID {
    pub fn new(id: &str) -> Result<Self, IdError> {
        if id.is_empty() {
            return Err(IdError::Empty);
        }
        Ok(Self(id.to_string()))
    }
}

#[cfg(test)]
impl From<&str> for MuscleGroupID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Ordered muscle groups with their exercises.
///
/// Groups are reference counted, so a modified collection shares all groups that were not
/// touched by the modification with its predecessor.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection(Vec<Rc<MuscleGroup>>);

impl Collection {
    pub fn new(groups: Vec<MuscleGroup>) -> Result<Self, CollectionError> {
        let mut ids = HashSet::new();
        for group in &groups {
            if !ids.insert(&group.id) {
                return Err(CollectionError::DuplicateGroup(group.id.to_string()));
            }
            let mut exercise_ids = HashSet::new();
            for exercise in &group.exercises {
                if !exercise_ids.insert(&exercise.id) {
                    return Err(CollectionError::DuplicateExercise(
                        group.id.to_string(),
                        exercise.id.to_string(),
                    ));
                }
            }
        }
        Ok(Self(groups.into_iter().map(Rc::new).collect()))
    }

    #[must_use]
    pub fn seed() -> Self {
        let group = |id: &str, title: &str, exercises: &[(&str, &str, f32)]| MuscleGroup {
            id: MuscleGroupID(id.to_string()),
            title: title.to_string(),
            exercises: exercises
                .iter()
                .filter_map(|(id, name, kg)| {
                    Some(Exercise {
                        id: ExerciseID::new(id).ok()?,
                        name: Name::new(name).ok()?,
                        kg: Weight::new(*kg),
                    })
                })
                .collect(),
        };

        Self(
            [
                group(
                    "chest",
                    "Chest",
                    &[
                        ("db_bench", "Dumbbell Bench Press", 11.0),
                        ("pec_deck", "Pec Deck (Machine Fly)", 20.0),
                    ],
                ),
                group(
                    "triceps",
                    "Triceps",
                    &[
                        ("pushdown", "Triceps Pushdown (Machine/Cable)", 15.0),
                        (
                            "db_ext",
                            "Standing Dumbbell Triceps Extension (Two-Arm)",
                            12.5,
                        ),
                    ],
                ),
                group("back", "Back", &[]),
                group("legs", "Legs", &[]),
                group("shoulders", "Shoulders", &[]),
                group("biceps", "Biceps", &[]),
                group("core", "Core", &[]),
            ]
            .into_iter()
            .map(Rc::new)
            .collect(),
        )
    }

    pub fn groups(&self) -> impl Iterator<Item = &MuscleGroup> {
        self.0.iter().map(|group| &**group)
    }

    #[must_use]
    pub fn group(&self, id: &MuscleGroupID) -> Option<&MuscleGroup> {
        self.groups().find(|g| g.id == *id)
    }

    #[must_use]
    pub fn title_of(&self, id: &MuscleGroupID) -> &str {
        self.group(id).map_or(FALLBACK_TITLE, |g| g.title.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a copy with `exercise` appended to the given group.
    #[must_use]
    pub fn with_exercise(&self, group_id: &MuscleGroupID, exercise: Exercise) -> Option<Self> {
        self.with_group(group_id, |group| {
            let mut group = group.clone();
            group.exercises.push(exercise);
            Some(group)
        })
    }

    /// Returns a copy in which the weight of the given exercise is changed by `delta`,
    /// together with the updated exercise.
    #[must_use]
    pub fn with_adjusted_weight(
        &self,
        group_id: &MuscleGroupID,
        exercise_id: &ExerciseID,
        delta: f32,
    ) -> Option<(Self, Exercise)> {
        let mut updated = None;
        let collection = self.with_group(group_id, |group| {
            let mut group = group.clone();
            let exercise = group.exercises.iter_mut().find(|e| e.id == *exercise_id)?;
            exercise.kg = exercise.kg.adjusted(delta);
            updated = Some(exercise.clone());
            Some(group)
        })?;
        Some((collection, updated?))
    }

    /// Returns a copy without the given exercise, together with the removed exercise.
    #[must_use]
    pub fn without_exercise(
        &self,
        group_id: &MuscleGroupID,
        exercise_id: &ExerciseID,
    ) -> Option<(Self, Exercise)> {
        let mut removed = None;
        let collection = self.with_group(group_id, |group| {
            let idx = group.exercises.iter().position(|e| e.id == *exercise_id)?;
            let mut group = group.clone();
            removed = Some(group.exercises.remove(idx));
            Some(group)
        })?;
        Some((collection, removed?))
    }

    fn with_group(
        &self,
        group_id: &MuscleGroupID,
        update: impl FnOnce(&MuscleGroup) -> Option<MuscleGroup>,
    ) -> Option<Self> {
        let idx = self.0.iter().position(|g| g.id == *group_id)?;
        let group = update(&self.0[idx])?;
        let mut groups = self.0.clone();
        groups[idx] = Rc::new(group);
        Some(Self(groups))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CollectionError {
    #[error("Muscle group ID must be unique ({0})")]
    DuplicateGroup(String),
    #[error("Exercise ID must be unique within muscle group {0} ({1})")]
    DuplicateExercise(String, String),
}
