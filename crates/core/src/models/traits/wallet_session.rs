use crate::prelude::*;

/// The connected wallet.
pub trait WalletSession: Send + Sync {
    /// Account of the connected wallet, `None` when disconnected.
    fn account(&self) -> Option<EvmAddress>;

    fn is_connected(&self) -> bool {
        self.account().is_some()
    }

    fn chain_id(&self) -> u64;

    fn switch_chain(&self, chain_id: u64) -> BoxFuture<'_, Result<(), WalletError>>;

    fn disconnect(&self) -> BoxFuture<'_, ()>;
}
