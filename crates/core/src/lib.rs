mod logic;
mod models;

pub mod prelude {
    pub use crate::logic::*;
    pub use crate::models::*;

    // Ethereum Crates
    pub use alloy_primitives::{Address, Bytes, TxHash, U256};

    // Third Party Crates
    pub use bon::Builder;
    pub use derive_more::{Deref, From};
    pub use futures::future::BoxFuture;
    pub use getset::{CopyGetters, Getters};
    pub use log::{debug, error, info, trace, warn};
    pub use serde::{Deserialize, Serialize};
    pub use url::Url;
}
