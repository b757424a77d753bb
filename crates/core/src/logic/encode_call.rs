use crate::prelude::*;

use alloy_sol_types::{sol, SolCall};

sol! {
    /// Entry points of the batch transfer contract.
    interface IDisperse {
        function disperseETH(address[] recipients, uint256[] values) external payable;
        function disperseToken(address token, address[] recipients, uint256[] values) external;
        function disperseTokenSimple(address token, address[] recipients, uint256[] values) external;
    }
}

impl DisperseVariant {
    /// Solidity signature of the entry point, e.g. `disperseETH(address[],uint256[])`.
    pub fn signature(&self) -> &'static str {
        match self {
            Self::Ether => IDisperse::disperseETHCall::SIGNATURE,
            Self::Token => IDisperse::disperseTokenCall::SIGNATURE,
            Self::TokenSimple => IDisperse::disperseTokenSimpleCall::SIGNATURE,
        }
    }

    pub fn selector(&self) -> [u8; 4] {
        match self {
            Self::Ether => IDisperse::disperseETHCall::SELECTOR,
            Self::Token => IDisperse::disperseTokenCall::SELECTOR,
            Self::TokenSimple => IDisperse::disperseTokenSimpleCall::SELECTOR,
        }
    }
}

impl TransferRequest {
    /// ABI encodes the request into the call a wallet signs.
    pub fn encode(&self) -> Result<DisperseCall, EncodeCallError> {
        if !self.is_submittable() {
            return Err(EncodeCallError::NotSubmittable);
        }

        let recipients = self
            .recipients()
            .iter()
            .map(|address| address.parse::<EvmAddress>().map(Address::from))
            .collect::<Result<Vec<_>, _>>()?;
        let values = self.amounts().clone();
        let token = || -> Result<Address, EncodeCallError> {
            let address = self.token_address().as_deref().unwrap_or_default();
            Ok(address.parse::<EvmAddress>()?.into())
        };

        let data = match self.variant() {
            DisperseVariant::Ether => {
                IDisperse::disperseETHCall { recipients, values }.abi_encode()
            }
            DisperseVariant::Token => IDisperse::disperseTokenCall {
                token: token()?,
                recipients,
                values,
            }
            .abi_encode(),
            DisperseVariant::TokenSimple => IDisperse::disperseTokenSimpleCall {
                token: token()?,
                recipients,
                values,
            }
            .abi_encode(),
        };

        debug!(
            "Encoded {} for {} recipients ({} bytes)",
            self.variant(),
            self.recipients().len(),
            data.len()
        );

        Ok(DisperseCall::builder()
            .variant(*self.variant())
            .to(Address::from(*self.target_contract()))
            .data(Bytes::from(data))
            .value(*self.attached_value())
            .build())
    }
}
