use crate::prelude::*;
use std::path::PathBuf;

#[derive(Debug, Clone, Getters, Builder)]
pub struct PlanParameters {
    #[getset(get = "pub")]
    recipients: PathBuf,

    #[getset(get = "pub")]
    token: TokenSelection,

    #[getset(get = "pub")]
    decimals: u8,

    /// Token entry point preference, ignored for the native currency.
    #[getset(get = "pub")]
    variant: DisperseVariant,

    #[getset(get = "pub")]
    config: DisperseConfig,
}
