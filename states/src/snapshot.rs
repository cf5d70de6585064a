use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

use log::warn;

use crate::StateError;

type Entries = BTreeMap<TypeId, Box<dyn Any + Send>>;

/// Owned copy of every snapshot-capable state and compute, taken when a
/// command is flushed. Commands read their inputs from here so the async
/// part never touches the live context.
#[derive(Default)]
pub struct CommandSnapshot {
    states: Entries,
    computes: Entries,
}

impl CommandSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_state(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.states.insert(id, value);
    }

    pub fn insert_compute(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.computes.insert(id, value);
    }

    pub fn try_state<T: Clone + 'static>(&self) -> Result<T, StateError> {
        lookup::<T>(&self.states)
    }

    pub fn try_compute<T: Clone + 'static>(&self) -> Result<T, StateError> {
        lookup::<T>(&self.computes)
    }

    /// Cloned state, or `T::default()` when it was not captured.
    pub fn state<T: Clone + Default + 'static>(&self) -> T {
        self.try_state::<T>().unwrap_or_else(|err| {
            warn!("{err}, using default");
            T::default()
        })
    }

    /// Cloned compute, or `T::default()` when it was not captured.
    pub fn compute<T: Clone + Default + 'static>(&self) -> T {
        self.try_compute::<T>().unwrap_or_else(|err| {
            warn!("{err}, using default");
            T::default()
        })
    }
}

fn lookup<T: Clone + 'static>(entries: &Entries) -> Result<T, StateError> {
    entries
        .get(&TypeId::of::<T>())
        .and_then(|boxed| boxed.downcast_ref::<T>())
        .cloned()
        .ok_or_else(|| {
            warn!("snapshot lookup failed for {}", type_name::<T>());
            StateError::snapshot_missing::<T>()
        })
}
