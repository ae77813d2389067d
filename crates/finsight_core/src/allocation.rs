//! Automatic surplus allocation
//!
//! Splits the monthly surplus across debt, emergency fund, goals, and
//! discretionary spending according to the user's strategy, nudged by the
//! current health score. The split is settled in integer cents with the
//! rounding remainder folded into the largest bucket, so the buckets always
//! sum to the surplus exactly.

use jiff::civil::Date;

use crate::health::LOW_HEALTH_SCORE;
use crate::metrics::{
    effective_monthly_expenses, effective_monthly_income, total_debt, total_minimum_payments,
};
use crate::model::{
    AllocationBreakdown, AllocationStrategy, AutoAllocation, FinancialHealth, UserPreferences,
};
use crate::money::{from_cents, to_cents};
use crate::snapshot::Snapshot;

/// Share pulled out of discretionary when health is low
const LOW_HEALTH_SHIFT: f64 = 0.10;

/// Base split by strategy: (debt, savings, discretionary)
fn base_split(strategy: AllocationStrategy) -> (f64, f64, f64) {
    match strategy {
        AllocationStrategy::DebtFocused => (0.70, 0.20, 0.10),
        AllocationStrategy::Balanced => (0.40, 0.40, 0.20),
        AllocationStrategy::SavingsFocused => (0.20, 0.60, 0.20),
    }
}

/// Split the monthly surplus into named buckets.
///
/// Surplus is income minus expenses minus minimum debt payments; when it is
/// not positive the result is a [`AutoAllocation::Deficit`] carrying the
/// shortfall instead of a zeroed breakdown.
#[must_use]
pub fn auto_allocate(
    snapshot: &Snapshot,
    preferences: &UserPreferences,
    health: &FinancialHealth,
    today: Date,
) -> AutoAllocation {
    let income = effective_monthly_income(snapshot, today);
    let expenses = effective_monthly_expenses(snapshot, today);
    let minimums = total_minimum_payments(&snapshot.loans, &snapshot.accounts);

    let surplus = income - expenses - minimums;
    if surplus <= 0.0 {
        return AutoAllocation::Deficit {
            shortfall: (-surplus).max(0.0),
        };
    }

    let (mut debt_share, savings_share, mut discretionary_share) =
        base_split(preferences.strategy);

    let has_debt = total_debt(&snapshot.loans, &snapshot.accounts) > 0.0;

    // A struggling budget gives up discretionary spending first
    if health.score < LOW_HEALTH_SCORE {
        let shift = LOW_HEALTH_SHIFT.min(discretionary_share);
        discretionary_share -= shift;
        debt_share += shift;
    }

    let mut goal_share;
    let mut emergency_share;
    if health.emergency_fund_ratio >= 1.0 {
        // Fund is full: the whole savings share is freed for debt, or for
        // goals once debt-free
        emergency_share = 0.0;
        goal_share = if has_debt { 0.0 } else { savings_share };
        if has_debt {
            debt_share += savings_share;
        }
    } else {
        let gap = (1.0 - health.emergency_fund_ratio).clamp(0.0, 1.0);
        emergency_share = savings_share * gap;
        goal_share = savings_share - emergency_share;
    }

    // Debt-free snapshots fold the debt share into savings
    if !has_debt && debt_share > 0.0 {
        if health.emergency_fund_ratio >= 1.0 {
            goal_share += debt_share;
        } else {
            let gap = (1.0 - health.emergency_fund_ratio).clamp(0.0, 1.0);
            emergency_share += debt_share * gap;
            goal_share += debt_share * (1.0 - gap);
        }
        debt_share = 0.0;
    }

    // Nothing to contribute to without goals
    if snapshot.goals.is_empty() {
        discretionary_share += goal_share;
        goal_share = 0.0;
    }

    let surplus_cents = to_cents(surplus);
    let mut cents = [
        to_cents(surplus * debt_share),
        to_cents(surplus * emergency_share),
        to_cents(surplus * goal_share),
        to_cents(surplus * discretionary_share),
    ];
    let assigned: i64 = cents.iter().sum();
    let remainder = surplus_cents - assigned;
    let largest = cents
        .iter()
        .enumerate()
        .max_by_key(|(_, c)| **c)
        .map(|(i, _)| i)
        .unwrap_or(0);
    cents[largest] += remainder;

    AutoAllocation::Allocated {
        surplus: from_cents(surplus_cents),
        breakdown: AllocationBreakdown {
            debt_payment: from_cents(cents[0]),
            emergency_fund: from_cents(cents[1]),
            goal_contributions: from_cents(cents[2]),
            discretionary: from_cents(cents[3]),
        },
    }
}
