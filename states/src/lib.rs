//! Frame-driven state container for the merchant admin UI.
//!
//! The container holds three kinds of entries:
//! - [`State`]: editable values owned by the UI (form inputs, selections, route).
//! - [`Compute`]: read-only caches the UI renders from. They only change through an
//!   [`Updater`], usually from a [`Command`] running on the async runtime.
//! - [`Command`]: manual-only side effects (network IO). Each dispatch receives a
//!   [`CommandSnapshot`] of the registered values, a [`LatestOnlyUpdater`] and a
//!   cancellation token.
//!
//! A frame calls [`StateCtx::sync_computes`] first, renders, then
//! [`StateCtx::flush_commands`] to spawn whatever the frame dispatched.

mod command;
mod compute;
mod ctx;
mod error;
mod macros;
mod snapshot;
mod state;
mod task;
mod updater;

pub use command::Command;
pub use compute::Compute;
pub use ctx::StateCtx;
pub use error::StateError;
pub use snapshot::CommandSnapshot;
pub use state::{SnapshotClone, State, state_assign_impl};
pub use task::{TaskHandle, TaskId};
pub use updater::{LatestOnlyUpdater, Updater};

pub use tokio_util::sync::CancellationToken;
