use crate::prelude::*;

/// The encoded contract call handed to a [`TransactionSubmitter`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, Builder)]
pub struct DisperseCall {
    #[getset(get = "pub")]
    variant: DisperseVariant,

    #[getset(get = "pub")]
    to: Address,

    #[getset(get = "pub")]
    data: Bytes,

    #[getset(get = "pub")]
    value: U256,
}
