use crate::prelude::*;

use alloy_primitives::address;

pub const BASE_CHAIN_ID: u64 = 8453;
pub const DEFAULT_EXPLORER_URL: &str = "https://basescan.org/tx/";

fn default_contract_address() -> EvmAddress {
    EvmAddress::from(address!("3e59c87d81a21cc9ff818e85db23715d362c8faa"))
}

fn default_native_symbols() -> Vec<String> {
    vec!["ETH".to_owned(), "SHM".to_owned()]
}

fn default_explorer_url() -> Url {
    Url::parse(DEFAULT_EXPLORER_URL).expect("Explorer url literal is valid; qed")
}

/// Deployment the client talks to. Every field has a default targeting the
/// Disperse deployment on Base.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Builder)]
pub struct DisperseConfig {
    #[getset(get = "pub")]
    #[builder(default = default_contract_address())]
    contract_address: EvmAddress,

    #[getset(get = "pub")]
    #[builder(default = BASE_CHAIN_ID)]
    chain_id: u64,

    #[getset(get = "pub")]
    #[builder(into, default = "Base".to_owned())]
    chain_name: String,

    /// Symbols the balance lookup reports for the native currency.
    #[getset(get = "pub")]
    #[builder(default = default_native_symbols())]
    native_symbols: Vec<String>,

    /// Base url a transaction hash is appended to.
    #[getset(get = "pub")]
    #[builder(default = default_explorer_url())]
    explorer_url: Url,
}

impl Default for DisperseConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl DisperseConfig {
    pub fn transaction_url(&self, hash: TxHash) -> Option<Url> {
        self.explorer_url.join(&hash.to_string()).ok()
    }

    pub fn is_native_symbol(&self, symbol: &str) -> bool {
        self.native_symbols.iter().any(|s| s == symbol)
    }
}
