use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, LatestOnlyUpdater};

/// A manual-only side effect.
///
/// `run` executes synchronously on the UI thread and may only read the
/// snapshot; the returned future is spawned onto the runtime. Results go back
/// through the updater, which drops them once a newer dispatch of the same
/// command exists.
pub trait Command: Send + Sync + 'static {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>>;
}
