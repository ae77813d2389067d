//! Unique identifiers for financial records
//!
//! Each record type has its own id type so cross-references between derived
//! recommendations and the records they came from cannot mix kinds.

use serde::{Deserialize, Serialize};

/// Unique identifier for an income source
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IncomeId(pub u32);

/// Unique identifier for a recurring expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ExpenseId(pub u32);

/// Unique identifier for a bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BillId(pub u32);

/// Unique identifier for a loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LoanId(pub u32);

/// Unique identifier for a bank account
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(pub u32);

/// Unique identifier for a savings goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GoalId(pub u32);

/// Unique identifier for a journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId(pub u32);

/// Identifies one obligation in a debt plan: a loan, or the synthetic debt
/// carried by an overdrawn account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObligationId {
    Loan(LoanId),
    Account(AccountId),
}

/// Identifies the record behind a payment suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuggestionId {
    Obligation(ObligationId),
    Bill(BillId),
}
