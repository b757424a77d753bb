use crate::prelude::*;

/// Entry point of the Disperse contract a request is sent to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum DisperseVariant {
    /// `disperseETH`: native currency, the total is attached as call value.
    #[default]
    #[display("disperseETH")]
    Ether,

    /// `disperseToken`: the contract pulls the total once and pays every
    /// recipient from its own balance. One allowance for the total.
    #[display("disperseToken")]
    Token,

    /// `disperseTokenSimple`: the contract calls `transferFrom` once per
    /// recipient. Cheaper to approve, more gas per recipient.
    #[display("disperseTokenSimple")]
    TokenSimple,
}

impl DisperseVariant {
    pub fn is_token(&self) -> bool {
        !matches!(self, Self::Ether)
    }

    /// Variant to preselect the first time metadata is seen for a selection.
    pub fn for_metadata(metadata: &TokenMetadata, native_symbols: &[String]) -> Self {
        if native_symbols.iter().any(|s| s == metadata.symbol()) {
            Self::Ether
        } else {
            Self::Token
        }
    }

    /// Token entry point to use for a token transfer given this preference.
    pub fn for_token(self) -> Self {
        match self {
            Self::TokenSimple => Self::TokenSimple,
            Self::Ether | Self::Token => Self::Token,
        }
    }

    /// Flips between the two token entry points.
    pub fn toggled(self) -> Self {
        match self {
            Self::Ether => Self::Ether,
            Self::Token => Self::TokenSimple,
            Self::TokenSimple => Self::Token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(symbol: &str) -> TokenMetadata {
        TokenMetadata::builder()
            .name(symbol)
            .symbol(symbol)
            .decimals(18)
            .build()
    }

    #[test]
    fn native_symbol_preselects_ether() {
        let natives = vec!["ETH".to_owned(), "SHM".to_owned()];
        assert_eq!(
            DisperseVariant::for_metadata(&metadata("SHM"), &natives),
            DisperseVariant::Ether
        );
        assert_eq!(
            DisperseVariant::for_metadata(&metadata("WETH"), &natives),
            DisperseVariant::Token
        );
    }

    #[test]
    fn toggle_only_touches_token_variants() {
        use DisperseVariant::*;

        assert_eq!(Ether.toggled(), Ether);
        assert_eq!(Token.toggled(), TokenSimple);
        assert_eq!(TokenSimple.toggled(), Token);
    }

    #[test]
    fn display_is_the_contract_function_name() {
        assert_eq!(DisperseVariant::Ether.to_string(), "disperseETH");
        assert_eq!(
            DisperseVariant::TokenSimple.to_string(),
            "disperseTokenSimple"
        );
    }
}
