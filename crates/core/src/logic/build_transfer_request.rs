use crate::prelude::*;

/// Plans the batch transfer for the valid entries of `recipients`.
///
/// Native selections always use [`DisperseVariant::Ether`] and attach the
/// total as call value. Token selections use `preference` to pick between the
/// two token entry points. Amounts are scaled with the descriptor's decimals
/// (18 when unknown).
pub fn build_transfer_request(
    recipients: &RecipientList,
    descriptor: &TokenDescriptor,
    preference: DisperseVariant,
    config: &DisperseConfig,
) -> Result<TransferRequest, BuildTransferRequestError> {
    let decimals = descriptor.decimals();

    let (addresses, amounts): (Vec<String>, Vec<U256>) = recipients
        .valid_recipients()
        .map(|recipient| {
            let address = recipient.address().clone();
            match recipient.scaled_amount(decimals) {
                Ok(amount) => Ok((address, amount)),
                Err(underlying) => Err(BuildTransferRequestError::InvalidRecipientAmount {
                    address,
                    underlying,
                }),
            }
        })
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .unzip();

    let variant = match descriptor.token() {
        TokenSelection::Native => DisperseVariant::Ether,
        TokenSelection::Token(_) => preference.for_token(),
    };

    let attached_value = if variant.is_token() {
        U256::ZERO
    } else {
        amounts
            .iter()
            .try_fold(U256::ZERO, |total, amount| total.checked_add(*amount))
            .ok_or(BuildTransferRequestError::TotalOverflow)?
    };

    Ok(TransferRequest::builder()
        .target_contract(*config.contract_address())
        .variant(variant)
        .recipients(addresses)
        .amounts(amounts)
        .attached_value(attached_value)
        .maybe_token_address(descriptor.token().token_address().map(str::to_owned))
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";
    const BOB: &str = "0x742D35cC6634c0532925a3B844BC9E7595F0beBB";
    const USDC: &str = "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913";

    fn recipients() -> RecipientList {
        let text = format!("{ALICE} 1.5\nnotanaddress 9\n{BOB} 2,25\n{ALICE} 1");
        parse_recipients(&text).unwrap()
    }

    fn usdc(decimals: Option<u8>) -> TokenDescriptor {
        TokenDescriptor::builder()
            .token(TokenSelection::from(USDC))
            .maybe_metadata(decimals.map(|decimals| {
                TokenMetadata::builder()
                    .name("USD Coin")
                    .symbol("USDC")
                    .decimals(decimals)
                    .build()
            }))
            .build()
    }

    fn build(
        list: &RecipientList,
        descriptor: &TokenDescriptor,
        preference: DisperseVariant,
    ) -> Result<TransferRequest, BuildTransferRequestError> {
        build_transfer_request(list, descriptor, preference, &DisperseConfig::default())
    }

    #[test]
    fn native_request_attaches_the_total() {
        let native = TokenDescriptor::native();
        let request = build(&recipients(), &native, DisperseVariant::TokenSimple).unwrap();

        assert_eq!(*request.variant(), DisperseVariant::Ether);
        assert_eq!(
            *request.recipients(),
            vec![ALICE.to_owned(), BOB.to_owned(), ALICE.to_owned()]
        );
        assert_eq!(request.amounts().len(), 3);
        assert_eq!(
            *request.attached_value(),
            U256::from(4_750_000_000_000_000_000u128)
        );
        assert_eq!(request.total_amount(), Some(*request.attached_value()));
        assert_eq!(*request.token_address(), None);
        assert!(request.is_submittable());
    }

    #[test]
    fn token_request_follows_preference_and_attaches_nothing() {
        let usdc = usdc(Some(6));
        let single = build(&recipients(), &usdc, DisperseVariant::Token).unwrap();
        assert_eq!(*single.variant(), DisperseVariant::Token);
        assert_eq!(*single.attached_value(), U256::ZERO);
        assert_eq!(single.token_address().as_deref(), Some(USDC));
        assert_eq!(
            *single.amounts(),
            vec![
                U256::from(1_500_000u64),
                U256::from(2_250_000u64),
                U256::from(1_000_000u64)
            ]
        );

        let simple = build(&recipients(), &usdc, DisperseVariant::TokenSimple).unwrap();
        assert_eq!(*simple.variant(), DisperseVariant::TokenSimple);

        let fallback = build(&recipients(), &usdc, DisperseVariant::Ether).unwrap();
        assert_eq!(*fallback.variant(), DisperseVariant::Token);
    }

    #[test]
    fn unknown_metadata_scales_with_eighteen_decimals() {
        let request = build(&recipients(), &usdc(None), DisperseVariant::Token).unwrap();
        let one = U256::from(10u64).pow(U256::from(18u64));
        assert_eq!(request.amounts()[2], one);
    }

    #[test]
    fn excess_precision_is_rejected() {
        let list = parse_recipients(&format!("{ALICE} 0.0000001")).unwrap();
        let error = build(&list, &usdc(Some(6)), DisperseVariant::Token).unwrap_err();
        assert_eq!(
            error,
            BuildTransferRequestError::InvalidRecipientAmount {
                address: ALICE.to_owned(),
                underlying: ScaleAmountError::TooManyDecimals {
                    amount: "0.0000001".to_owned(),
                    decimals: 6,
                },
            }
        );
    }

    #[test]
    fn building_is_idempotent() {
        let usdc = usdc(Some(6));
        let first = build(&recipients(), &usdc, DisperseVariant::Token);
        let second = build(&recipients(), &usdc, DisperseVariant::Token);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_or_invalid_only_lists_are_not_submittable() {
        let native = TokenDescriptor::native();
        for text in ["", "\n \n", "notanaddress 1"] {
            let list = parse_recipients(text).unwrap();
            let request = build(&list, &native, DisperseVariant::Ether).unwrap();
            assert!(request.recipients().is_empty());
            assert!(!request.is_submittable());
        }
    }

    #[test]
    fn malformed_token_address_is_not_submittable() {
        let descriptor = TokenDescriptor::builder()
            .token(TokenSelection::from("0x1234"))
            .build();
        let request = build(&recipients(), &descriptor, DisperseVariant::Token).unwrap();
        assert_eq!(request.token_address().as_deref(), Some("0x1234"));
        assert!(!request.is_submittable());
    }
}
