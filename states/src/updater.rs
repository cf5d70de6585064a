use std::any::{Any, TypeId, type_name};

use flume::Sender;
use log::debug;

use crate::{Compute, TaskId};

/// A pending compute replacement travelling from a task to the UI thread.
pub(crate) struct Update {
    pub(crate) target: TypeId,
    pub(crate) origin: Option<TaskId>,
    pub(crate) value: Box<dyn Any + Send>,
}

/// Sends new compute values to the owning [`crate::StateCtx`].
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<Update>,
}

impl Updater {
    pub(crate) fn new(send: Sender<Update>) -> Self {
        Self { send }
    }

    pub fn set<T: Compute>(&self, value: T) {
        self.send_update(None, value);
    }

    fn send_update<T: Compute>(&self, origin: Option<TaskId>, value: T) {
        let update = Update {
            target: TypeId::of::<T>(),
            origin,
            value: Box::new(value),
        };
        if self.send.send(update).is_err() {
            debug!("Updater: context dropped, discarding {}", type_name::<T>());
        }
    }
}

/// Updater bound to one dispatch of a command.
///
/// Every value is tagged with the task's [`TaskId`]; the context applies it only
/// while that task is still the latest dispatch of its command.
#[derive(Debug, Clone)]
pub struct LatestOnlyUpdater {
    inner: Updater,
    task: TaskId,
}

impl LatestOnlyUpdater {
    pub(crate) fn new(inner: Updater, task: TaskId) -> Self {
        Self { inner, task }
    }

    pub fn task_id(&self) -> TaskId {
        self.task
    }

    pub fn set<T: Compute>(&self, value: T) {
        self.inner.send_update(Some(self.task), value);
    }
}
