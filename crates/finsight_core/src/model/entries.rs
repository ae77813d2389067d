//! One-off journal entries and pending expected payments
//!
//! Journal entries capture ad-hoc daily spending and business income that
//! recurring records miss. Expected payments track receivables and payables;
//! they stay informational until marked paid. Both refine the month's
//! effective totals without touching the recurring baseline.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ids::EntryId;

/// Kind of a one-off journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// Ad-hoc daily spending, an outflow
    Daily,
    /// Business income, an inflow
    Business,
}

/// A dated one-off cash entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub entry_id: EntryId,
    pub name: String,
    pub amount: f64,
    pub date: Date,
    pub kind: EntryKind,
}

/// Direction of an expected payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentDirection {
    Incoming,
    Outgoing,
}

/// A pending receivable or payable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedPayment {
    pub name: String,
    pub amount: f64,
    pub due_date: Date,
    pub direction: PaymentDirection,
    /// Unpaid expected payments never enter the totals
    #[serde(default)]
    pub paid: bool,
}
