use crate::prelude::*;

impl Disperser {
    /// Asks the wallet to switch to the configured chain if it is elsewhere.
    pub async fn ensure_chain<W>(&self, wallet: &W) -> Result<(), WalletError>
    where
        W: WalletSession + ?Sized,
    {
        let expected = *self.config.chain_id();
        let actual = wallet.chain_id();
        if actual == expected {
            return Ok(());
        }
        info!("Switching wallet from chain {actual} to {expected}");
        wallet.switch_chain(expected).await
    }

    /// Encodes the current request and hands it to `submitter`.
    ///
    /// Refused while another submission is pending. A pending submission
    /// whose future was dropped stays pending until
    /// [`Disperser::abandon_submission`] is called, since the transaction may
    /// already be out. Failures are recorded and returned, never retried.
    pub async fn submit<W, S>(&mut self, wallet: &W, submitter: &S) -> Result<TxHash, SubmitError>
    where
        W: WalletSession + ?Sized,
        S: TransactionSubmitter + ?Sized,
    {
        if self.submission.is_pending() {
            return Err(SubmitError::SubmissionInFlight);
        }
        if !wallet.is_connected() {
            return Err(SubmitError::WalletNotConnected);
        }
        let expected = *self.config.chain_id();
        let actual = wallet.chain_id();
        if actual != expected {
            return Err(SubmitError::WrongChain { expected, actual });
        }

        let request = self.transfer_request()?;
        if !request.is_submittable() {
            return Err(SubmitError::NothingToSubmit);
        }
        let call = request.encode()?;

        info!(
            "Submitting {} to {} recipients",
            call.variant(),
            request.recipients().len()
        );
        self.submission = SubmissionState::Pending;
        self.confirmation = None;

        match submitter.send_transaction(&call).await {
            Ok(hash) => {
                info!("Transaction submitted: {hash}");
                self.submission = SubmissionState::Succeeded(hash);
                Ok(hash)
            }
            Err(e) => {
                error!("Transaction failed: {e}");
                self.submission = SubmissionState::Failed(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Waits for the last submitted transaction to settle. Returns `None` if
    /// nothing was submitted.
    pub async fn await_confirmation<C>(&mut self, watcher: &C) -> Option<Confirmation>
    where
        C: ConfirmationWatcher + ?Sized,
    {
        let hash = self.submission.transaction_hash()?;
        self.confirmation = Some(Confirmation::Pending);
        let confirmation = watcher.wait_for_confirmation(hash).await;
        match &confirmation {
            Confirmation::Confirmed => info!("Transaction {hash} confirmed"),
            Confirmation::Failed(reason) => warn!("Transaction {hash} failed: {reason}"),
            Confirmation::Pending => debug!("Transaction {hash} still pending"),
        }
        self.confirmation = Some(confirmation.clone());
        Some(confirmation)
    }

    pub async fn disconnect<W>(&mut self, wallet: &W)
    where
        W: WalletSession + ?Sized,
    {
        wallet.disconnect().await;
        self.abandon_submission();
    }

    /// Explorer link for the submitted transaction.
    pub fn transaction_url(&self) -> Option<Url> {
        self.submission
            .transaction_hash()
            .and_then(|hash| self.config.transaction_url(hash))
    }

    pub fn status_message(&self) -> Option<String> {
        match (&self.submission, &self.confirmation) {
            (SubmissionState::Idle, _) => None,
            (SubmissionState::Pending, _) => Some("Processing...".to_owned()),
            (SubmissionState::Failed(reason), _)
            | (SubmissionState::Succeeded(_), Some(Confirmation::Failed(reason))) => {
                Some(format!("Transaction failed: {reason}"))
            }
            (SubmissionState::Succeeded(_), Some(Confirmation::Confirmed)) => {
                Some("Transaction Successful!".to_owned())
            }
            (SubmissionState::Succeeded(_), _) => Some("Transaction Submitted".to_owned()),
        }
    }
}
