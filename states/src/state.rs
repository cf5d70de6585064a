use std::any::{Any, type_name};
use std::fmt::Debug;

use log::warn;

/// Produces an owned, `Send` copy of a value for command snapshots.
///
/// Types that return `None` are invisible to commands.
pub trait SnapshotClone {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        None
    }
}

/// A value stored in [`crate::StateCtx`].
pub trait State: Any + Debug + Send + SnapshotClone {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Replace `self` with a boxed value of the same concrete type.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `assign_box` body: downcast and overwrite, log on type mismatch.
pub fn state_assign_impl<T: State>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *this = *value,
        Err(_) => warn!(
            "assign_box: ignored value that is not a {}",
            type_name::<T>()
        ),
    }
}
