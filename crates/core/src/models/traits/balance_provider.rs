use crate::prelude::*;

/// Looks up the balance of `account`, either in native currency
/// (`token == None`) or in the given token contract.
///
/// `Ok(None)` means the provider had nothing to report yet.
pub trait BalanceProvider: Send + Sync {
    fn fetch_balance(
        &self,
        account: EvmAddress,
        token: Option<EvmAddress>,
    ) -> BoxFuture<'_, Result<Option<TokenBalance>, BalanceError>>;
}
