use crate::prelude::*;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Parse recipients error {0}")]
    ParseRecipients(#[from] ParseRecipientsError),

    #[error("Build transfer request error {0}")]
    BuildTransferRequest(#[from] BuildTransferRequestError),

    #[error("Encode call error {0}")]
    EncodeCall(#[from] EncodeCallError),
}

/// Fatal problems found while reading the recipient list. Line numbers are
/// 1-based and only count non-blank lines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseRecipientsError {
    #[error("Line {line} has an invalid format. Expected: \"address amount\"")]
    InvalidFormat { line: usize },

    #[error("Line {line} has an invalid amount. Amount must be a positive number.")]
    InvalidAmount { line: usize, amount: String },
}

impl ParseRecipientsError {
    pub fn line(&self) -> usize {
        match self {
            Self::InvalidFormat { line } | Self::InvalidAmount { line, .. } => *line,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScaleAmountError {
    #[error("Amount `{amount}` is not a decimal number")]
    NotADecimal { amount: String },

    #[error("Amount `{amount}` has more than {decimals} fractional digits")]
    TooManyDecimals { amount: String, decimals: u8 },

    #[error("Amount `{amount}` does not fit in 256 bits")]
    Overflow { amount: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildTransferRequestError {
    #[error("Invalid amount for recipient {address}: {underlying}")]
    InvalidRecipientAmount {
        address: String,
        underlying: ScaleAmountError,
    },

    #[error("Total amount does not fit in 256 bits")]
    TotalOverflow,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeCallError {
    #[error("Transfer request is not submittable")]
    NotSubmittable,

    #[error("Cannot encode call: {0}")]
    InvalidAddress(#[from] InvalidAddress),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Transaction rejected by wallet: {reason}")]
    Rejected { reason: String },

    #[error("Failed to send transaction: {underlying}")]
    SendFailed { underlying: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    #[error("Failed to switch to chain {chain_id}: {underlying}")]
    SwitchChainFailed { chain_id: u64, underlying: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BalanceError {
    #[error("Failed to fetch balance: {underlying}")]
    FetchFailed { underlying: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Failed to search users: {underlying}")]
    RequestFailed { underlying: String },
}

/// Reasons [`Disperser::submit`] refuses or fails to hand a call to the
/// wallet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Wallet not connected")]
    WalletNotConnected,

    #[error("Wallet is on chain {actual}, expected {expected}")]
    WrongChain { expected: u64, actual: u64 },

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("Nothing to submit")]
    NothingToSubmit,

    #[error(transparent)]
    Build(#[from] BuildTransferRequestError),

    #[error(transparent)]
    Encode(#[from] EncodeCallError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}
