//! Emergency preparedness scoring
//!
//! Measures how well the budget would absorb an income shock: months of
//! expenses covered by liquid assets, debt service load, income source
//! diversity, and the cushion liquid assets provide against total debt.
//! Unlike [`crate::health`], the components here are tiered rather than
//! continuous; crossing a funding threshold moves the score in steps.

use jiff::civil::Date;

use crate::health::MIN_DENOMINATOR;
use crate::metrics::{
    active_income_sources, effective_monthly_expenses, effective_monthly_income, liquid_assets,
    total_debt, total_minimum_payments,
};
use crate::model::{EmergencyReadiness, ReadinessLevel, UserPreferences};
use crate::snapshot::Snapshot;

/// DTI percentage above which the debt recommendation is attached
const HIGH_DTI: f64 = 40.0;

/// Stability heuristic: two or more active income sources is "diversified".
/// A binary stand-in for a volatility measure, kept coarse on purpose.
const STABLE_INCOME: f64 = 0.8;
const SINGLE_INCOME: f64 = 0.6;

/// Score liquidity resilience for the snapshot as of `today`.
///
/// A snapshot with no records at all scores exactly 0 with bootstrap
/// recommendations; there is nothing to measure yet and a computed score
/// would just be noise.
#[must_use]
pub fn emergency_readiness(
    snapshot: &Snapshot,
    preferences: &UserPreferences,
    today: Date,
) -> EmergencyReadiness {
    if snapshot.is_empty() {
        return EmergencyReadiness {
            score: 0.0,
            level: ReadinessLevel::Unprepared,
            fund_months: 0.0,
            debt_to_income_ratio: 0.0,
            income_stability: 0.0,
            recommendations: vec![
                "Add accounts, income, and expenses to measure readiness".to_string(),
                "Start with a one-month expense buffer in a savings account".to_string(),
            ],
        };
    }

    let income = effective_monthly_income(snapshot, today);
    let expenses = effective_monthly_expenses(snapshot, today);
    let liquid = liquid_assets(&snapshot.accounts);
    let debt = total_debt(&snapshot.loans, &snapshot.accounts);
    let minimums = total_minimum_payments(&snapshot.loans, &snapshot.accounts);

    let fund_months = liquid / expenses.max(MIN_DENOMINATOR);
    let debt_to_income_ratio = minimums / income.max(MIN_DENOMINATOR) * 100.0;
    let income_stability = if active_income_sources(&snapshot.incomes) >= 2 {
        STABLE_INCOME
    } else {
        SINGLE_INCOME
    };

    let cushion = if debt > 0.0 {
        10.0 * (liquid / debt).clamp(0.0, 1.0)
    } else {
        10.0
    };

    let score = fund_component(fund_months)
        + debt_component(debt_to_income_ratio)
        + 20.0 * income_stability
        + cushion;

    let mut recommendations = Vec::new();
    let target = expenses * f64::from(preferences.emergency_fund_months);
    let gap = target - liquid;
    if gap > 0.0 {
        recommendations.push(format!(
            "Grow the emergency fund by {} to cover {} months of expenses",
            preferences.currency.format(gap),
            preferences.emergency_fund_months
        ));
    }
    if debt_to_income_ratio > HIGH_DTI {
        recommendations.push(format!(
            "Minimum debt payments take {debt_to_income_ratio:.0}% of income; \
             reducing them frees the fastest resilience gains"
        ));
    }
    if active_income_sources(&snapshot.incomes) < 2 {
        recommendations
            .push("Income depends on a single source; a second stream cuts the risk".to_string());
    }

    EmergencyReadiness {
        score,
        level: ReadinessLevel::from_score(score),
        fund_months,
        debt_to_income_ratio,
        income_stability,
        recommendations,
    }
}

/// Fund coverage, 40 points: full credit at six months, stepped credit down
/// to one month, linear below that.
fn fund_component(fund_months: f64) -> f64 {
    if fund_months >= 6.0 {
        40.0
    } else if fund_months >= 3.0 {
        28.0
    } else if fund_months >= 1.0 {
        16.0
    } else {
        16.0 * fund_months.max(0.0)
    }
}

/// Debt service, 30 points: stepped down at 20/40/60 percent of income
fn debt_component(dti: f64) -> f64 {
    if dti <= 20.0 {
        30.0
    } else if dti <= 40.0 {
        20.0
    } else if dti <= 60.0 {
        10.0
    } else {
        0.0
    }
}
