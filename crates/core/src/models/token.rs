use crate::prelude::*;

/// What the user wants to disperse, as typed in the token field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum TokenSelection {
    /// The chain's native currency.
    #[default]
    #[display("native")]
    Native,

    /// A token contract address, possibly malformed.
    #[display("{_0}")]
    Token(String),
}

impl TokenSelection {
    /// An empty field or the native sentinel (in any case) selects the native
    /// currency, anything else is taken as a token address.
    pub fn from_input(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() || input.eq_ignore_ascii_case(NATIVE_TOKEN_SENTINEL) {
            Self::Native
        } else {
            Self::Token(input.to_owned())
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native)
    }

    pub fn token_address(&self) -> Option<&str> {
        match self {
            Self::Native => None,
            Self::Token(address) => Some(address),
        }
    }

    /// The token contract, if the selection is a well formed address.
    pub fn contract(&self) -> Option<EvmAddress> {
        self.token_address().and_then(|a| a.parse().ok())
    }
}

impl From<&str> for TokenSelection {
    fn from(input: &str) -> Self {
        Self::from_input(input)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Getters, Builder, Serialize, Deserialize)]
pub struct TokenBalance {
    #[getset(get = "pub")]
    #[builder(into)]
    symbol: String,

    #[getset(get = "pub")]
    #[builder(into)]
    formatted: String,

    #[getset(get = "pub")]
    decimals: u8,

    #[getset(get = "pub")]
    value: U256,
}

#[derive(Debug, Clone, PartialEq, Eq, Getters, Builder, Serialize, Deserialize)]
pub struct TokenMetadata {
    #[getset(get = "pub")]
    #[builder(into)]
    name: String,

    #[getset(get = "pub")]
    #[builder(into)]
    symbol: String,

    #[getset(get = "pub")]
    decimals: u8,

    #[getset(get = "pub")]
    balance: Option<TokenBalance>,
}

/// The selected asset together with whatever metadata the balance lookup
/// produced for it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Builder)]
pub struct TokenDescriptor {
    #[getset(get = "pub")]
    #[builder(default)]
    token: TokenSelection,

    #[getset(get = "pub")]
    metadata: Option<TokenMetadata>,
}

impl TokenDescriptor {
    pub fn native() -> Self {
        Self::default()
    }

    /// Decimals from the metadata, or [`DEFAULT_DECIMALS`] when unknown.
    pub fn decimals(&self) -> u8 {
        self.metadata
            .as_ref()
            .map(|m| *m.decimals())
            .unwrap_or(DEFAULT_DECIMALS)
    }

    pub fn symbol(&self) -> Option<&str> {
        self.metadata.as_ref().map(|m| m.symbol().as_str())
    }
}
