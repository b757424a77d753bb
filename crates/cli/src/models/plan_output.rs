use crate::prelude::*;

/// What `disperse plan` prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanOutput {
    pub chain_id: u64,
    pub to: String,
    pub function: String,
    pub signature: String,
    pub token: Option<String>,
    pub value: String,
    pub data: String,
    pub recipients: usize,
    pub total: String,
    /// Addresses left out because they are malformed.
    pub skipped: Vec<String>,
}
