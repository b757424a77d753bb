use crate::prelude::*;

const FALLBACK_NATIVE_SYMBOL: &str = "ETH";

async fn lookup_balance<P>(
    provider: &P,
    account: EvmAddress,
    token: Option<EvmAddress>,
) -> Option<TokenBalance>
where
    P: BalanceProvider + ?Sized,
{
    match provider.fetch_balance(account, token).await {
        Ok(balance) => balance,
        Err(e) => {
            warn!("Balance lookup for {account} failed, metadata unknown: {e}");
            None
        }
    }
}

/// Resolves the metadata for `selection` as seen from `account`.
///
/// The native currency always gets metadata (18 decimals, symbol from the
/// balance or `ETH`). A token gets metadata only when its address is well
/// formed and the lookup reported a balance; otherwise decimals fall back to
/// [`DEFAULT_DECIMALS`].
pub async fn resolve_token_descriptor<P>(
    provider: &P,
    account: EvmAddress,
    selection: TokenSelection,
    config: &DisperseConfig,
) -> TokenDescriptor
where
    P: BalanceProvider + ?Sized,
{
    let metadata = match &selection {
        TokenSelection::Native => {
            let balance = lookup_balance(provider, account, None).await;
            let symbol = balance
                .as_ref()
                .map(|b| b.symbol().clone())
                .unwrap_or_else(|| FALLBACK_NATIVE_SYMBOL.to_owned());
            Some(
                TokenMetadata::builder()
                    .name(config.chain_name().clone())
                    .symbol(symbol)
                    .decimals(DEFAULT_DECIMALS)
                    .maybe_balance(balance)
                    .build(),
            )
        }
        TokenSelection::Token(address) => match selection.contract() {
            None => {
                debug!("Token address {address} is malformed, skipping lookup");
                None
            }
            Some(contract) => {
                let balance = lookup_balance(provider, account, Some(contract)).await;
                balance.map(|balance| {
                    TokenMetadata::builder()
                        .name(balance.symbol().clone())
                        .symbol(balance.symbol().clone())
                        .decimals(*balance.decimals())
                        .balance(balance)
                        .build()
                })
            }
        },
    };

    TokenDescriptor::builder()
        .token(selection)
        .maybe_metadata(metadata)
        .build()
}
