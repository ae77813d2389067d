//! Bank account records

use serde::{Deserialize, Serialize};

use super::ids::AccountId;

/// Broad account kind, used for liquidity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    Checking,
    Savings,
    Investment,
    Other,
}

/// A bank account. The balance may be negative when the account is
/// overdrawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub account_id: AccountId,
    pub name: String,
    pub balance: f64,
    pub kind: AccountKind,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Whether the account has an overdraft facility attached
    #[serde(default)]
    pub has_overdraft: bool,
    /// Size of the overdraft facility
    #[serde(default)]
    pub overdraft_limit: f64,
    /// Drawn portion of the facility; never above `overdraft_limit`
    #[serde(default)]
    pub overdraft_used: f64,
}

impl BankAccount {
    /// True for kinds counted as liquid savings
    #[must_use]
    pub fn is_liquid(&self) -> bool {
        matches!(self.kind, AccountKind::Checking | AccountKind::Savings)
    }

    /// Debt carried by this account: the negative part of the balance plus
    /// any drawn overdraft. The two are distinct owed amounts and both
    /// count.
    #[must_use]
    pub fn account_debt(&self) -> f64 {
        (-self.balance).max(0.0) + self.overdraft_used
    }

    /// True when the account carries any debt
    #[must_use]
    pub fn carries_debt(&self) -> bool {
        self.account_debt() > 0.0
    }
}

fn default_true() -> bool {
    true
}
