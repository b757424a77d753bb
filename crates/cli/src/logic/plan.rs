use crate::prelude::*;

/// Parses the recipient text and encodes the call for `parameters`.
pub fn plan(text: &str, parameters: &PlanParameters) -> Result<PlanOutput, CliError> {
    let recipients = parse_recipients(text)?;

    let metadata = TokenMetadata::builder()
        .name(parameters.token().to_string())
        .symbol(parameters.token().to_string())
        .decimals(*parameters.decimals())
        .build();
    let descriptor = TokenDescriptor::builder()
        .token(parameters.token().clone())
        .metadata(metadata)
        .build();

    let request = build_transfer_request(
        &recipients,
        &descriptor,
        *parameters.variant(),
        parameters.config(),
    )?;
    let call = request.encode()?;

    let skipped = recipients
        .iter()
        .filter(|r| !r.valid())
        .map(|r| r.address().clone())
        .collect::<Vec<_>>();
    if !skipped.is_empty() {
        warn!("Skipping {} recipients with invalid address", skipped.len());
    }

    let total = request
        .total_amount()
        .map(|total| format_amount(total, *parameters.decimals()))
        .ok_or(BuildTransferRequestError::TotalOverflow)?;

    Ok(PlanOutput {
        chain_id: *parameters.config().chain_id(),
        to: EvmAddress::from(*call.to()).to_string(),
        function: call.variant().to_string(),
        signature: call.variant().signature().to_owned(),
        token: request.token_contract().map(|t| t.to_string()),
        value: call.value().to_string(),
        data: call.data().to_string(),
        recipients: request.recipients().len(),
        total,
        skipped,
    })
}
