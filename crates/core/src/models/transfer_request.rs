use crate::prelude::*;

/// A batch transfer ready to be encoded, see [`build_transfer_request`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Builder, Serialize)]
pub struct TransferRequest {
    #[getset(get = "pub")]
    target_contract: EvmAddress,

    #[getset(get = "pub")]
    variant: DisperseVariant,

    /// Valid recipient addresses in input order.
    #[getset(get = "pub")]
    recipients: Vec<String>,

    /// Scaled amounts, index aligned with `recipients`.
    #[getset(get = "pub")]
    amounts: Vec<U256>,

    /// Native currency attached to the call. Zero for token variants.
    #[getset(get = "pub")]
    attached_value: U256,

    #[getset(get = "pub")]
    token_address: Option<String>,
}

impl TransferRequest {
    pub fn token_contract(&self) -> Option<EvmAddress> {
        self.token_address.as_deref().and_then(|a| a.parse().ok())
    }

    /// Sum of all amounts, `None` on overflow.
    pub fn total_amount(&self) -> Option<U256> {
        self.amounts
            .iter()
            .try_fold(U256::ZERO, |total, amount| total.checked_add(*amount))
    }

    /// Whether this request may be handed to the wallet.
    pub fn is_submittable(&self) -> bool {
        !self.recipients.is_empty()
            && self.recipients.len() == self.amounts.len()
            && self.amounts.iter().all(|amount| !amount.is_zero())
            && (!self.variant.is_token() || self.token_contract().is_some())
    }
}
