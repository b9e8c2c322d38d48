//! Store
//!
//! The `Store` owns the current collection of muscle groups. Every modification replaces the
//! collection by a new snapshot and schedules a write of the complete snapshot. Writes run
//! detached on the executor passed to `Store::load`; their outcome is only logged, the
//! in-memory state stays authoritative.

use std::rc::Rc;

use futures_util::future::LocalBoxFuture;
use log::{debug, info, warn};
use strum::Display;

use crate::{
    Collection, CollectionRepository, CollectionService, Exercise, ExerciseID, MuscleGroupID,
    ReadError, Service, WEIGHT_STEP,
};

pub trait Spawn {
    fn spawn(&self, future: LocalBoxFuture<'static, ()>);
}

impl<F> Spawn for F
where
    F: Fn(LocalBoxFuture<'static, ()>),
{
    fn spawn(&self, future: LocalBoxFuture<'static, ()>) {
        self(future);
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    #[strum(serialize = "storage")]
    Storage,
    #[strum(serialize = "seed data")]
    Seed,
}

pub struct Store<R> {
    collection: Rc<Collection>,
    origin: Origin,
    service: Rc<Service<R>>,
    spawner: Box<dyn Spawn>,
}

impl<R: CollectionRepository + 'static> Store<R> {
    /// Reads the stored collection, falling back to the seed data if nothing is stored or the
    /// stored data cannot be read. The seed data is written back immediately.
    pub async fn load(repository: R, spawner: impl Spawn + 'static) -> Self {
        let service = Rc::new(Service::new(repository));

        let (collection, origin) = match service.get_collection().await {
            Ok(Some(collection)) => (collection, Origin::Storage),
            Err(ReadError::Decode(_)) => {
                warn!("replacing undecodable muscle groups by seed data");
                (Collection::seed(), Origin::Seed)
            }
            Ok(None) | Err(_) => (Collection::seed(), Origin::Seed),
        };

        info!("loaded {} muscle groups from {origin}", collection.len());

        let store = Self {
            collection: Rc::new(collection),
            origin,
            service,
            spawner: Box::new(spawner),
        };

        if origin == Origin::Seed {
            store.persist();
        }

        store
    }

    #[must_use]
    pub fn collection(&self) -> Rc<Collection> {
        Rc::clone(&self.collection)
    }

    #[must_use]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn add_exercise(
        &mut self,
        group_id: &MuscleGroupID,
        name: &str,
        kg: &str,
    ) -> Option<Exercise> {
        let exercise = match Exercise::new(name, kg) {
            Ok(exercise) => exercise,
            Err(err) => {
                debug!("rejected exercise for {group_id}: {err}");
                return None;
            }
        };

        let Some(collection) = self.collection.with_exercise(group_id, exercise.clone()) else {
            debug!("rejected exercise: unknown muscle group {group_id}");
            return None;
        };

        self.commit(collection);
        Some(exercise)
    }

    pub fn adjust_weight(
        &mut self,
        group_id: &MuscleGroupID,
        exercise_id: &ExerciseID,
        delta: f32,
    ) -> Option<Exercise> {
        let Some((collection, exercise)) =
            self.collection
                .with_adjusted_weight(group_id, exercise_id, delta)
        else {
            debug!("rejected weight adjustment: unknown exercise {group_id}/{exercise_id}");
            return None;
        };

        self.commit(collection);
        Some(exercise)
    }

    pub fn increment_weight(
        &mut self,
        group_id: &MuscleGroupID,
        exercise_id: &ExerciseID,
    ) -> Option<Exercise> {
        self.adjust_weight(group_id, exercise_id, WEIGHT_STEP)
    }

    pub fn decrement_weight(
        &mut self,
        group_id: &MuscleGroupID,
        exercise_id: &ExerciseID,
    ) -> Option<Exercise> {
        self.adjust_weight(group_id, exercise_id, -WEIGHT_STEP)
    }

    pub fn remove_exercise(
        &mut self,
        group_id: &MuscleGroupID,
        exercise_id: &ExerciseID,
    ) -> Option<Exercise> {
        let Some((collection, exercise)) =
            self.collection.without_exercise(group_id, exercise_id)
        else {
            debug!("rejected removal: unknown exercise {group_id}/{exercise_id}");
            return None;
        };

        self.commit(collection);
        Some(exercise)
    }

    fn commit(&mut self, collection: Collection) {
        if collection == *self.collection {
            return;
        }
        self.collection = Rc::new(collection);
        self.persist();
    }

    fn persist(&self) {
        let service = Rc::clone(&self.service);
        let collection = Rc::clone(&self.collection);
        self.spawner.spawn(Box::pin(async move {
            // Failures are logged by the service.
            let _ = service.set_collection(&collection).await;
        }));
    }
}
