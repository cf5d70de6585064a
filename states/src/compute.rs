use crate::State;

/// A compute-shaped cache.
///
/// Computes are stored apart from plain states: the UI reads them through
/// [`crate::StateCtx::cached`] and never mutates them directly. New values arrive
/// through an [`crate::Updater`] and are applied in [`crate::StateCtx::sync_computes`].
pub trait Compute: State {}
