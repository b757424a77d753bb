use crate::prelude::*;

impl Disperser {
    pub fn new(config: DisperseConfig) -> Self {
        Self::builder().config(config).build()
    }

    /// Replaces the recipient text and re-parses it.
    ///
    /// On a parse error the previous list is kept and the error is stored in
    /// [`Disperser::parse_error`].
    pub fn set_recipients_text(
        &mut self,
        text: impl Into<String>,
    ) -> Result<(), ParseRecipientsError> {
        self.input_text = text.into();
        match parse_recipients(&self.input_text) {
            Ok(recipients) => {
                self.recipients = recipients;
                self.parse_error = None;
                self.clear_submission();
                Ok(())
            }
            Err(e) => {
                debug!("Keeping previous {} recipients: {e}", self.recipients.len());
                self.parse_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Appends an `address amount` line, e.g. for a user picked from search.
    pub fn append_recipient(
        &mut self,
        address: EvmAddress,
        amount: &str,
    ) -> Result<(), ParseRecipientsError> {
        let mut text = self.input_text.trim_end().to_owned();
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(&format!("{address} {amount}"));
        self.set_recipients_text(text)
    }

    /// Updates the token field. Metadata of a previous selection is dropped.
    pub fn set_token(&mut self, input: &str) {
        let token = TokenSelection::from_input(input);
        if token != self.token {
            self.metadata = None;
        }
        self.token = token;
        self.clear_submission();
    }

    /// Records metadata from the balance lookup. The first metadata seen for
    /// a selection preselects the entry point from its symbol.
    pub fn observe_token_metadata(&mut self, metadata: TokenMetadata) {
        if self.metadata.is_none() {
            self.variant = DisperseVariant::for_metadata(&metadata, self.config.native_symbols());
            debug!("Preselected {} for {}", self.variant, metadata.symbol());
        }
        self.metadata = Some(metadata);
    }

    /// Switches between `disperseToken` and `disperseTokenSimple`. Does
    /// nothing for the native currency.
    pub fn toggle_token_method(&mut self) {
        if self.token.is_native() {
            return;
        }
        self.variant = self.variant.for_token().toggled();
    }

    pub fn descriptor(&self) -> TokenDescriptor {
        TokenDescriptor::builder()
            .token(self.token.clone())
            .maybe_metadata(self.metadata.clone())
            .build()
    }

    pub fn transfer_request(&self) -> Result<TransferRequest, BuildTransferRequestError> {
        build_transfer_request(
            &self.recipients,
            &self.descriptor(),
            self.variant,
            &self.config,
        )
    }

    /// Whether the submit action should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.submission.is_pending()
            && self
                .transfer_request()
                .is_ok_and(|request| request.is_submittable())
    }

    pub fn summary(&self) -> DisperseSummary {
        let descriptor = self.descriptor();
        let decimals = descriptor.decimals();
        DisperseSummary {
            recipients: self.recipients.len(),
            valid: self.recipients.valid_count(),
            total: self
                .recipients
                .total_amount(decimals)
                .ok()
                .map(|total| format_amount(total, decimals)),
            symbol: descriptor.symbol().map(str::to_owned),
        }
    }

    /// Stops tracking the last submission. A transaction that already went
    /// out is not affected.
    pub fn abandon_submission(&mut self) {
        if self.submission.is_pending() {
            warn!("Abandoning tracking of a pending submission");
        }
        self.submission = SubmissionState::Idle;
        self.confirmation = None;
    }

    fn clear_submission(&mut self) {
        if !self.submission.is_pending() {
            self.submission = SubmissionState::Idle;
            self.confirmation = None;
        }
    }
}
