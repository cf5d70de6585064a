//! Task identity and cooperative cancellation for dispatched commands.
//!
//! - `TaskId`: the command's `TypeId` plus a per-command generation counter.
//! - `TaskHandle`: a `TaskId` paired with the `CancellationToken` handed to the task.
//!
//! Dispatching a command again bumps the generation and cancels the previous
//! handle, so only the newest dispatch may publish results.

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

/// Unique identifier for a spawned task.
///
/// ```ignore
/// let first = TaskId::new(TypeId::of::<RefreshUsersCommand>(), 1);
/// let second = TaskId::new(TypeId::of::<RefreshUsersCommand>(), 2);
///
/// assert_eq!(first.type_id(), second.type_id());
/// assert!(second.is_newer_than(&first));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    /// The command type that spawned the task.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Higher generations were dispatched later.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_newer_than(&self, other: &Self) -> bool {
        self.type_id == other.type_id && self.generation > other.generation
    }
}

/// Handle to a spawned command task.
///
/// Tasks should race their IO against `token.cancelled()`:
///
/// ```ignore
/// tokio::select! {
///     _ = cancel.cancelled() => {}
///     result = api::fetch_user_list(&config, &token) => { /* publish */ }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Requests cooperative cancellation. The task stops at its next check point.
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}
