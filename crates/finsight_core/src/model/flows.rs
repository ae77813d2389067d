//! Recurring money flows: incomes, expenses, and bills
//!
//! Everything here is normalized to a monthly equivalent before scoring, so
//! records with different cadences can be summed directly.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ids::{AccountId, BillId, ExpenseId, IncomeId};

/// How often a recurring flow occurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    Weekly,
    BiWeekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Factor converting one occurrence at this cadence to a monthly amount.
    ///
    /// Weekly uses 4.33 (52 weeks over 12 months) and bi-weekly 2.1667.
    /// These constants are load-bearing: dashboards built on earlier versions
    /// of the engine show totals derived from exactly these factors.
    #[must_use]
    pub fn monthly_factor(&self) -> f64 {
        match self {
            Frequency::Weekly => 4.33,
            Frequency::BiWeekly => 2.1667,
            Frequency::Monthly => 1.0,
            Frequency::Yearly => 1.0 / 12.0,
        }
    }
}

/// A recurring income source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub income_id: IncomeId,
    pub name: String,
    /// Amount per occurrence, in major units of the display currency
    pub amount: f64,
    pub frequency: Frequency,
    /// Account the income lands in, when tracked
    #[serde(default)]
    pub account_id: Option<AccountId>,
    #[serde(default = "default_true")]
    pub active: bool,
}

impl Income {
    /// Monthly-equivalent amount
    #[must_use]
    pub fn monthly_amount(&self) -> f64 {
        self.amount * self.frequency.monthly_factor()
    }
}

/// Whether an expense is essential or discretionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Need,
    Want,
}

/// A recurring expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub expense_id: ExpenseId,
    pub name: String,
    pub amount: f64,
    pub frequency: Frequency,
    #[serde(default = "default_category")]
    pub category: ExpenseCategory,
    /// Account the expense is drawn from, when tracked
    #[serde(default)]
    pub account_id: Option<AccountId>,
    #[serde(default = "default_true")]
    pub active: bool,
}

impl Expense {
    /// Monthly-equivalent amount
    #[must_use]
    pub fn monthly_amount(&self) -> f64 {
        self.amount * self.frequency.monthly_factor()
    }
}

/// A recurring bill with a concrete next due date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub bill_id: BillId,
    pub name: String,
    pub amount: f64,
    pub frequency: Frequency,
    /// Next date the bill falls due
    pub due_date: Date,
    /// Whether the upcoming occurrence has already been paid
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub account_id: Option<AccountId>,
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

fn default_category() -> ExpenseCategory {
    ExpenseCategory::Need
}
