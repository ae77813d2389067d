//! Boundary validation errors
//!
//! Ordinary financial situations (zero income, unpayable debt, deficits) are
//! modeled as output states, not errors. The only failures this crate
//! reports are malformed inputs caught by [`crate::Snapshot::validate`]
//! before the scorers run; past that point every function is total.

use std::fmt;

/// Malformed input detected at the boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// An amount is NaN or infinite
    NonFinite {
        field: &'static str,
        record: String,
    },
    /// An amount that must be non-negative is below zero
    NegativeAmount {
        field: &'static str,
        record: String,
    },
    /// A loan balance is below zero
    NegativeLoanBalance { loan: String },
    /// An account reports more overdraft drawn than its facility allows
    OverdraftAboveLimit { account: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NonFinite { field, record } => {
                write!(f, "{field} of '{record}' is not a finite number")
            }
            ValidationError::NegativeAmount { field, record } => {
                write!(f, "{field} of '{record}' is negative")
            }
            ValidationError::NegativeLoanBalance { loan } => {
                write!(f, "loan '{loan}' has a negative balance")
            }
            ValidationError::OverdraftAboveLimit { account } => {
                write!(
                    f,
                    "account '{account}' has more overdraft drawn than its limit"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
