//! Loan case records and outcome labels.

use serde::{Deserialize, Serialize};

/// True outcome of a loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Fully repaid (negative class).
    Good,
    /// Charged off or defaulted (positive class).
    Bad,
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good => write!(f, "good"),
            Self::Bad => write!(f, "bad"),
        }
    }
}

/// One loan record in the evaluation set.
///
/// Financial fields are optional: upstream data frequently drops one or the
/// other, and the profit simulation tolerates the gap rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    /// Model-predicted probability of default, in [0, 1].
    pub predicted_probability: f64,

    /// True outcome.
    pub label: Label,

    /// Amount disbursed, original scale.
    #[serde(default)]
    pub amount: Option<f64>,

    /// Total amount repaid, original scale.
    #[serde(default)]
    pub total_paid: Option<f64>,
}

impl Case {
    /// Realized profit for this loan: total paid minus amount disbursed.
    ///
    /// `None` when either financial field is missing.
    pub fn profit(&self) -> Option<f64> {
        match (self.total_paid, self.amount) {
            (Some(paid), Some(amount)) => Some(paid - amount),
            _ => None,
        }
    }
}
