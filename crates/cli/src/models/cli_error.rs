use crate::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum InvalidCliArgs {
    #[error("Token address invalid {bad_value}")]
    TokenAddressInvalid { bad_value: String },

    #[error("Contract address invalid {bad_value}")]
    ContractAddressInvalid { bad_value: String },

    #[error("Native currency always has 18 decimals, got --decimals {decimals}")]
    DecimalsForNativeCurrency { decimals: u8 },

    #[error("Explorer url invalid {bad_value}")]
    ExplorerUrlInvalid { bad_value: String },
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid CLI arguments: {0}")]
    InvalidCliArgs(#[from] InvalidCliArgs),

    #[error("Failed to read recipients from {source_name}: {underlying}")]
    ReadRecipients {
        source_name: String,
        underlying: String,
    },

    #[error("Failed to serialize plan: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("{0}")]
    CoreError(#[from] Error),
}

impl From<ParseRecipientsError> for CliError {
    fn from(e: ParseRecipientsError) -> Self {
        Self::CoreError(e.into())
    }
}

impl From<BuildTransferRequestError> for CliError {
    fn from(e: BuildTransferRequestError) -> Self {
        Self::CoreError(e.into())
    }
}

impl From<EncodeCallError> for CliError {
    fn from(e: EncodeCallError) -> Self {
        Self::CoreError(e.into())
    }
}
