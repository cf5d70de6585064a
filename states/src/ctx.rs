use std::any::{TypeId, type_name};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use flume::{Receiver, Sender};
use log::{debug, error, warn};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::updater::Update;
use crate::{
    Command, CommandSnapshot, Compute, LatestOnlyUpdater, State, StateError, TaskHandle, TaskId,
    Updater,
};

/// Owner of every state, compute and command of the application.
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, Box<dyn Compute>>,
    commands: BTreeMap<TypeId, Arc<dyn Command>>,

    // dispatched this frame, spawned on flush
    queue: Vec<TypeId>,

    send: Sender<Update>,
    recv: Receiver<Update>,

    tasks: JoinSet<()>,
    latest: HashMap<TypeId, TaskHandle>,
    generations: HashMap<TypeId, u64>,
}

impl fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("computes", &self.computes.len())
            .field("commands", &self.commands.len())
            .field("queued", &self.queue.len())
            .field("tasks", &self.tasks.len())
            .finish()
    }
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            commands: BTreeMap::new(),
            queue: Vec::new(),
            send,
            recv,
            tasks: JoinSet::new(),
            latest: HashMap::new(),
            generations: HashMap::new(),
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        self.computes.insert(TypeId::of::<T>(), Box::new(compute));
    }

    pub fn record_command<C: Command>(&mut self, command: C) {
        self.commands.insert(TypeId::of::<C>(), Arc::new(command));
    }

    pub fn try_state<T: State>(&self) -> Result<&T, StateError> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any().downcast_ref::<T>())
            .ok_or_else(StateError::state_not_found::<T>)
    }

    /// # Panics
    /// Panics when `T` was never registered with [`Self::add_state`].
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// # Panics
    /// Panics when `T` was never registered with [`Self::add_state`].
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("{}", StateError::state_not_found::<T>()))
    }

    /// Mutates a registered state in place. Unregistered states are logged and skipped.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        match self
            .states
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any_mut().downcast_mut::<T>())
        {
            Some(state) => f(state),
            None => warn!("update: {}", StateError::state_not_found::<T>()),
        }
    }

    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any().downcast_ref::<T>())
    }

    /// # Panics
    /// Panics when `T` was never registered with [`Self::record_compute`].
    pub fn compute<T: Compute>(&self) -> &T {
        self.cached::<T>()
            .unwrap_or_else(|| panic!("{}", StateError::compute_not_found::<T>()))
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    /// Queues a command; it is spawned by the next [`Self::flush_commands`].
    pub fn dispatch<C: Command>(&mut self) {
        let id = TypeId::of::<C>();
        if !self.commands.contains_key(&id) {
            error!("dispatch: {}", StateError::command_not_found::<C>());
            return;
        }
        debug!("dispatch: {}", type_name::<C>());
        self.queue.push(id);
    }

    /// Spawns every queued command.
    ///
    /// Each spawn bumps the command's generation and cancels the task it replaces.
    pub fn flush_commands(&mut self) {
        let queue = std::mem::take(&mut self.queue);
        for id in queue {
            let Some(command) = self.commands.get(&id).cloned() else {
                continue;
            };

            let generation = self.generations.entry(id).or_insert(0);
            *generation += 1;
            let task = TaskId::new(id, *generation);

            let token = CancellationToken::new();
            if let Some(previous) = self
                .latest
                .insert(id, TaskHandle::new(task, token.clone()))
            {
                debug!(
                    "flush_commands: superseding generation {}",
                    previous.id().generation()
                );
                previous.cancel();
            }

            let updater = LatestOnlyUpdater::new(self.updater(), task);
            let future = command.run(self.snapshot(), updater, token);
            self.tasks.spawn(future);
        }
    }

    /// Cancels the running dispatch of `C`, if any. Anything it still sends is dropped.
    pub fn cancel<C: Command>(&mut self) {
        let id = TypeId::of::<C>();
        self.queue.retain(|queued| *queued != id);
        if let Some(handle) = self.latest.remove(&id) {
            debug!(
                "cancel: {} generation {}",
                type_name::<C>(),
                handle.id().generation()
            );
            handle.cancel();
        }
    }

    /// Applies every pending update and reaps finished tasks.
    ///
    /// Updates from a superseded dispatch are dropped.
    pub fn sync_computes(&mut self) {
        while let Some(joined) = self.tasks.try_join_next() {
            if let Err(err) = joined
                && err.is_panic()
            {
                error!("command task panicked: {err}");
            }
        }

        while let Ok(update) = self.recv.try_recv() {
            self.apply(update);
        }
    }

    fn apply(&mut self, update: Update) {
        if let Some(origin) = update.origin
            && !self.is_latest(origin)
        {
            debug!(
                "sync_computes: dropped stale update from generation {}",
                origin.generation()
            );
            return;
        }

        if let Some(compute) = self.computes.get_mut(&update.target) {
            compute.assign_box(update.value);
        } else if let Some(state) = self.states.get_mut(&update.target) {
            state.assign_box(update.value);
        } else {
            warn!("sync_computes: update for unregistered type {:?}", update.target);
        }
    }

    fn is_latest(&self, task: TaskId) -> bool {
        self.latest
            .get(&task.type_id())
            .is_some_and(|handle| handle.id() == task)
    }

    fn snapshot(&self) -> CommandSnapshot {
        let mut snap = CommandSnapshot::new();
        for (id, state) in &self.states {
            if let Some(value) = state.clone_boxed() {
                snap.insert_state(*id, value);
            }
        }
        for (id, compute) in &self.computes {
            if let Some(value) = compute.clone_boxed() {
                snap.insert_compute(*id, value);
            }
        }
        snap
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn task_set_mut(&mut self) -> &mut JoinSet<()> {
        &mut self.tasks
    }

    /// Cancels every running command and waits for the tasks to stop.
    pub async fn shutdown(&mut self) {
        for handle in self.latest.values() {
            handle.cancel();
        }
        self.tasks.shutdown().await;
        self.queue.clear();
    }
}
