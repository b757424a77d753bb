use crate::prelude::*;

/// A candidate account returned by an [`IdentitySearch`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, Builder, Serialize, Deserialize)]
pub struct SearchedUser {
    #[getset(get = "pub")]
    fid: u64,

    #[getset(get = "pub")]
    #[builder(into)]
    username: String,

    #[getset(get = "pub")]
    #[builder(into)]
    display_name: Option<String>,

    #[getset(get = "pub")]
    #[builder(into)]
    pfp_url: Option<String>,

    #[getset(get = "pub")]
    custody_address: Option<EvmAddress>,
}
