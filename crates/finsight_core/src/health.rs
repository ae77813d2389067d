//! Financial health scoring
//!
//! The composite score weighs savings rate, debt-to-income, and emergency
//! fund coverage, then knocks off a solvency penalty for accounts sitting in
//! overdraft. Components are clamped to [0, 1] before weighting; the
//! reported ratios stay unclamped so callers can see how far out of band a
//! budget really is.

use jiff::civil::Date;

use crate::metrics::{
    effective_monthly_expenses, effective_monthly_income, liquid_assets, total_minimum_payments,
};
use crate::model::{FinancialHealth, UserPreferences};
use crate::snapshot::Snapshot;

/// Divisor floor so zero income or expenses never divides by zero
pub(crate) const MIN_DENOMINATOR: f64 = 0.01;

/// Health score below which the engine shifts defensive
pub(crate) const LOW_HEALTH_SCORE: f64 = 50.0;

/// Savings rate earning full credit
const FULL_CREDIT_SAVINGS_RATE: f64 = 0.20;
/// Debt-to-income percentage at which the debt component bottoms out
const DTI_ZERO_CREDIT: f64 = 40.0;

const SAVINGS_WEIGHT: f64 = 0.4;
const DEBT_WEIGHT: f64 = 0.3;
const EMERGENCY_WEIGHT: f64 = 0.3;

/// Points deducted per insolvent account (negative balance or drawn
/// overdraft), capped across the snapshot
const SOLVENCY_PENALTY_PER_ACCOUNT: f64 = 5.0;
const SOLVENCY_PENALTY_CAP: f64 = 15.0;

/// Compute the composite financial health of the snapshot as of `today`.
#[must_use]
pub fn financial_health(
    snapshot: &Snapshot,
    preferences: &UserPreferences,
    today: Date,
) -> FinancialHealth {
    let income = effective_monthly_income(snapshot, today);
    let expenses = effective_monthly_expenses(snapshot, today);

    let savings_rate = (income - expenses) / income.max(MIN_DENOMINATOR);

    let minimums = total_minimum_payments(&snapshot.loans, &snapshot.accounts);
    let debt_to_income_ratio = minimums / income.max(MIN_DENOMINATOR) * 100.0;

    let target_fund = expenses.max(MIN_DENOMINATOR) * f64::from(preferences.emergency_fund_months);
    let emergency_fund_ratio = liquid_assets(&snapshot.accounts) / target_fund.max(MIN_DENOMINATOR);

    let savings_component = (savings_rate / FULL_CREDIT_SAVINGS_RATE).clamp(0.0, 1.0);
    let debt_component = (1.0 - debt_to_income_ratio / DTI_ZERO_CREDIT).clamp(0.0, 1.0);
    let emergency_component = emergency_fund_ratio.clamp(0.0, 1.0);

    let weighted = SAVINGS_WEIGHT * savings_component
        + DEBT_WEIGHT * debt_component
        + EMERGENCY_WEIGHT * emergency_component;

    let insolvent = snapshot
        .accounts
        .iter()
        .filter(|a| a.is_active && (a.balance < 0.0 || a.overdraft_used > 0.0))
        .count();
    let penalty = (insolvent as f64 * SOLVENCY_PENALTY_PER_ACCOUNT).min(SOLVENCY_PENALTY_CAP);

    FinancialHealth {
        score: (100.0 * weighted - penalty).clamp(0.0, 100.0),
        savings_rate,
        debt_to_income_ratio,
        emergency_fund_ratio,
    }
}
