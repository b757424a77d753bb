use crate::prelude::*;

/// One `address amount` line of the recipient list.
///
/// The amount is kept as the user typed it (with a decimal comma already
/// replaced by a point) and only scaled once the token decimals are known.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, CopyGetters, Serialize)]
pub struct Recipient {
    #[getset(get = "pub")]
    address: String,

    #[getset(get = "pub")]
    amount: String,

    /// Recipients with a malformed address are kept for display but never
    /// end up in a transfer request.
    #[getset(get_copy = "pub")]
    valid: bool,
}

impl Recipient {
    pub fn new(address: impl Into<String>, amount: impl Into<String>) -> Self {
        let address = address.into();
        let valid = EvmAddress::is_valid(&address);
        Self {
            address,
            amount: amount.into(),
            valid,
        }
    }

    pub fn scaled_amount(&self, decimals: u8) -> Result<U256, ScaleAmountError> {
        scale_amount(&self.amount, decimals)
    }
}
