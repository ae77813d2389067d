//! User preferences steering the engine
//!
//! Preferences are passed explicitly into every call; the engine holds no
//! settings of its own.

use serde::{Deserialize, Serialize};

use crate::money::Currency;

/// How the auto-allocator splits the monthly surplus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AllocationStrategy {
    /// 70% debt, 20% savings, 10% discretionary
    DebtFocused,
    /// 40% debt, 40% savings, 20% discretionary
    #[default]
    Balanced,
    /// 20% debt, 60% savings, 20% discretionary
    SavingsFocused,
}

/// Debt payoff ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DebtStrategy {
    /// Highest interest rate first
    #[default]
    Avalanche,
    /// Smallest balance first
    Snowball,
    /// Composite of rate, balance, and due-date urgency
    Hybrid,
}

impl DebtStrategy {
    /// Lowercase label for display
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            DebtStrategy::Avalanche => "avalanche",
            DebtStrategy::Snowball => "snowball",
            DebtStrategy::Hybrid => "hybrid",
        }
    }
}

/// Appetite for risk. Carried for display; the scorers do not read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RiskTolerance {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

/// Settings the caller passes alongside the record snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub strategy: AllocationStrategy,
    #[serde(default)]
    pub risk_tolerance: RiskTolerance,
    /// Target emergency fund size, in months of expenses
    #[serde(default = "default_fund_months")]
    pub emergency_fund_months: u8,
    #[serde(default)]
    pub debt_strategy: DebtStrategy,
    /// Let the engine pick the payoff strategy from the records themselves
    #[serde(default)]
    pub auto_suggest_strategy: bool,
    /// Display currency. A label only; amounts are never converted.
    #[serde(default)]
    pub currency: Currency,
}

impl Default for UserPreferences {
    fn default() -> Self {
        UserPreferences {
            strategy: AllocationStrategy::default(),
            risk_tolerance: RiskTolerance::default(),
            emergency_fund_months: default_fund_months(),
            debt_strategy: DebtStrategy::default(),
            auto_suggest_strategy: false,
            currency: Currency::default(),
        }
    }
}

fn default_fund_months() -> u8 {
    6
}
