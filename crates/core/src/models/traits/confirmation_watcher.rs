use crate::prelude::*;

pub trait ConfirmationWatcher: Send + Sync {
    /// Resolves once the transaction settled (or the watcher gave up).
    fn wait_for_confirmation(&self, hash: TxHash) -> BoxFuture<'_, Confirmation>;
}
