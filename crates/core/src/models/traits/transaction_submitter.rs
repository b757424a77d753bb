use crate::prelude::*;

/// Signs and broadcasts a call, resolving to the transaction hash.
pub trait TransactionSubmitter: Send + Sync {
    fn send_transaction<'a>(
        &'a self,
        call: &'a DisperseCall,
    ) -> BoxFuture<'a, Result<TxHash, SubmissionError>>;
}
