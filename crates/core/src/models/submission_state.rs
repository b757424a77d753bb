use crate::prelude::*;

/// Progress of handing a call to the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded(TxHash),
    Failed(String),
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn transaction_hash(&self) -> Option<TxHash> {
        match self {
            Self::Succeeded(hash) => Some(*hash),
            _ => None,
        }
    }
}

/// Settlement of a submitted transaction as reported by a
/// [`ConfirmationWatcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    Pending,
    Confirmed,
    Failed(String),
}
