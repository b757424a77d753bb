use crate::prelude::*;

/// Recipients in input order. Duplicated addresses are kept as separate
/// entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, From, Serialize)]
#[serde(transparent)]
pub struct RecipientList(Vec<Recipient>);

impl RecipientList {
    pub fn valid_recipients(&self) -> impl Iterator<Item = &Recipient> {
        self.0.iter().filter(|r| r.valid())
    }

    pub fn valid_count(&self) -> usize {
        self.valid_recipients().count()
    }

    pub fn invalid_count(&self) -> usize {
        self.len() - self.valid_count()
    }

    /// Sum of every listed amount, valid address or not, in smallest units.
    pub fn total_amount(&self, decimals: u8) -> Result<U256, ScaleAmountError> {
        self.0.iter().try_fold(U256::ZERO, |total, recipient| {
            let amount = recipient.scaled_amount(decimals)?;
            total
                .checked_add(amount)
                .ok_or_else(|| ScaleAmountError::Overflow {
                    amount: recipient.amount().clone(),
                })
        })
    }
}

impl IntoIterator for RecipientList {
    type Item = Recipient;
    type IntoIter = std::vec::IntoIter<Recipient>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<Recipient> for RecipientList {
    fn from_iter<I: IntoIterator<Item = Recipient>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
