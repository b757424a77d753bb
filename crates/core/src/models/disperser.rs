use crate::prelude::*;

/// State of one disperse form: the recipient text, the selected asset and the
/// progress of the last submission.
///
/// Every input change goes through a `&mut self` method that re-runs the pure
/// parse/build functions, so the last applied input always wins.
#[derive(Debug, Clone, Getters, Builder)]
pub struct Disperser {
    #[getset(get = "pub")]
    #[builder(default)]
    pub(crate) config: DisperseConfig,

    #[getset(get = "pub")]
    #[builder(skip)]
    pub(crate) input_text: String,

    /// Last successfully parsed list.
    #[getset(get = "pub")]
    #[builder(skip)]
    pub(crate) recipients: RecipientList,

    /// Error of the latest parse, if it failed.
    #[getset(get = "pub")]
    #[builder(skip)]
    pub(crate) parse_error: Option<ParseRecipientsError>,

    #[getset(get = "pub")]
    #[builder(skip)]
    pub(crate) token: TokenSelection,

    #[getset(get = "pub")]
    #[builder(skip)]
    pub(crate) metadata: Option<TokenMetadata>,

    #[getset(get = "pub")]
    #[builder(skip)]
    pub(crate) variant: DisperseVariant,

    #[getset(get = "pub")]
    #[builder(skip)]
    pub(crate) submission: SubmissionState,

    #[getset(get = "pub")]
    #[builder(skip)]
    pub(crate) confirmation: Option<Confirmation>,
}

/// Figures shown next to the recipient list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct DisperseSummary {
    #[getset(get = "pub")]
    pub(crate) recipients: usize,

    #[getset(get = "pub")]
    pub(crate) valid: usize,

    /// Total of all listed amounts, `None` if it cannot be computed with the
    /// current decimals.
    #[getset(get = "pub")]
    pub(crate) total: Option<String>,

    #[getset(get = "pub")]
    pub(crate) symbol: Option<String>,
}
