use crate::prelude::*;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct PlanArgs {
    /// File with one `address amount` pair per line, `-` reads stdin.
    #[arg(long, short)]
    pub recipients: PathBuf,

    /// Token contract to disperse. Leave out (or pass the native sentinel)
    /// to disperse the chain's native currency.
    #[arg(long)]
    pub token: Option<String>,

    /// Decimal precision of the token, 18 when left out. The native
    /// currency always uses 18.
    #[arg(long)]
    pub decimals: Option<u8>,

    /// Use `disperseTokenSimple` (one `transferFrom` per recipient) instead
    /// of `disperseToken`.
    #[arg(long, default_value_t = false)]
    pub simple: bool,

    /// Address of the Disperse contract, defaults to the Base deployment.
    #[arg(long)]
    pub contract: Option<String>,

    /// Chain the plan targets.
    #[arg(long, default_value_t = BASE_CHAIN_ID)]
    pub chain_id: u64,

    /// Base url the transaction hash is appended to for explorer links.
    #[arg(long, default_value_t = DEFAULT_EXPLORER_URL.to_owned())]
    pub explorer_url: String,
}

impl TryFrom<PlanArgs> for PlanParameters {
    type Error = InvalidCliArgs;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let token = TokenSelection::from_input(args.token.as_deref().unwrap_or_default());
        if let TokenSelection::Token(address) = &token {
            if !EvmAddress::is_valid(address) {
                return Err(InvalidCliArgs::TokenAddressInvalid {
                    bad_value: address.clone(),
                });
            }
        }

        let decimals = match (&token, args.decimals) {
            (TokenSelection::Native, Some(decimals)) if decimals != DEFAULT_DECIMALS => {
                return Err(InvalidCliArgs::DecimalsForNativeCurrency { decimals });
            }
            (_, decimals) => decimals.unwrap_or(DEFAULT_DECIMALS),
        };

        let Ok(explorer_url) = Url::parse(&args.explorer_url) else {
            return Err(InvalidCliArgs::ExplorerUrlInvalid {
                bad_value: args.explorer_url.clone(),
            });
        };

        let contract_address = args
            .contract
            .as_deref()
            .map(|contract| {
                contract
                    .parse::<EvmAddress>()
                    .map_err(|_| InvalidCliArgs::ContractAddressInvalid {
                        bad_value: contract.to_owned(),
                    })
            })
            .transpose()?;

        let config = DisperseConfig::builder()
            .maybe_contract_address(contract_address)
            .chain_id(args.chain_id)
            .explorer_url(explorer_url)
            .build();

        let variant = if args.simple {
            DisperseVariant::TokenSimple
        } else {
            DisperseVariant::Token
        };

        Ok(PlanParameters::builder()
            .recipients(args.recipients)
            .token(token)
            .decimals(decimals)
            .variant(variant)
            .config(config)
            .build())
    }
}
