use crate::prelude::*;

/// Address used wherever a token address is expected to mean "the chain's
/// native currency" rather than a token contract.
pub const NATIVE_TOKEN_SENTINEL: &str = "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE";

const ADDRESS_HEX_LEN: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid address {bad_value}")]
pub struct InvalidAddress {
    pub bad_value: String,
}

/// A 20 byte account identifier.
///
/// Parsing is checksum agnostic: any mix of upper and lower case hex digits
/// is accepted as long as the input is `0x` followed by exactly 40 of them.
/// [`Display`](std::fmt::Display) renders the EIP-55 checksummed form.
#[derive(Eq, PartialEq, Copy, Clone, Default, PartialOrd, Ord, Hash)]
pub struct EvmAddress(pub [u8; 20]);

impl EvmAddress {
    /// Returns `true` if `input` is a well formed address.
    pub fn is_valid(input: &str) -> bool {
        input.parse::<Self>().is_ok()
    }

    pub fn is_native_sentinel(&self) -> bool {
        self.to_string() == NATIVE_TOKEN_SENTINEL
    }
}

impl std::fmt::Display for EvmAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&Address::from(self.0).to_checksum(None))
    }
}

impl std::fmt::Debug for EvmAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl std::str::FromStr for EvmAddress {
    type Err = InvalidAddress;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidAddress {
            bad_value: input.to_owned(),
        };
        let digits = input.strip_prefix("0x").ok_or_else(invalid)?;
        if digits.len() != ADDRESS_HEX_LEN {
            return Err(invalid());
        }
        let address = digits.parse::<Address>().map_err(|_| invalid())?;
        Ok(Self::from(address))
    }
}

impl From<[u8; 20]> for EvmAddress {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl From<EvmAddress> for [u8; 20] {
    fn from(value: EvmAddress) -> Self {
        value.0
    }
}

impl From<Address> for EvmAddress {
    fn from(address: Address) -> Self {
        Self(address.0 .0)
    }
}

impl From<EvmAddress> for Address {
    fn from(value: EvmAddress) -> Self {
        Address::from(value.0)
    }
}

impl Serialize for EvmAddress {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EvmAddress {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let input = String::deserialize(deserializer)?;
        input.parse().map_err(serde::de::Error::custom)
    }
}
