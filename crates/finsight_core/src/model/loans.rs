//! Loan records

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ids::LoanId;

/// A loan or other amortizing debt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub loan_id: LoanId,
    pub name: String,
    /// Amount originally borrowed
    pub principal: f64,
    /// Outstanding balance. May exceed `principal` once fees or missed
    /// interest are folded in; never negative.
    pub current_balance: f64,
    /// Interest rate as a monthly percentage (2.0 means 2% per month).
    /// Not an APR.
    pub interest_rate: f64,
    /// Contractual minimum payment per month
    pub minimum_payment: f64,
    /// Next payment due date
    pub due_date: Date,
    /// Extra monthly percentage charged while the loan is past due
    #[serde(default)]
    pub penalty_rate: Option<f64>,
    /// One-off charges already assessed (processing fees, late fees)
    #[serde(default)]
    pub other_charges: f64,
    #[serde(default = "default_true")]
    pub active: bool,
}

impl Loan {
    /// Monthly rate in effect at `today`: the contract rate, plus the
    /// penalty rate once the due date has passed.
    #[must_use]
    pub fn effective_rate(&self, today: Date) -> f64 {
        match self.penalty_rate {
            Some(penalty) if today > self.due_date => self.interest_rate + penalty,
            _ => self.interest_rate,
        }
    }
}

fn default_true() -> bool {
    true
}
