//! Top-level report orchestration
//!
//! [`evaluate`] wires the scorers together in dependency order and returns
//! everything a dashboard needs in one pass. Each component stays callable
//! on its own; this module adds no logic beyond strategy auto-suggestion
//! and the wiring itself. `today` and the extra payment budget are explicit
//! arguments, so identical inputs always produce identical reports.

use jiff::civil::Date;

use crate::allocation::auto_allocate;
use crate::debt::{Obligation, build_plan, collect_obligations};
use crate::emergency::emergency_readiness;
use crate::forecast::forecast_goals;
use crate::health::{LOW_HEALTH_SCORE, financial_health};
use crate::model::{AdviceReport, DebtStrategy, FinancialHealth, UserPreferences};
use crate::snapshot::Snapshot;
use crate::suggestions::payment_suggestions;

/// Monthly-rate spread (percentage points) across obligations above which
/// rate ordering beats everything else
const AVALANCHE_RATE_SPREAD: f64 = 0.5;

/// Compute the full advice report for one record snapshot.
#[must_use]
pub fn evaluate(
    snapshot: &Snapshot,
    preferences: &UserPreferences,
    today: Date,
    extra_payment: f64,
) -> AdviceReport {
    let health = financial_health(snapshot, preferences, today);

    let strategy = if preferences.auto_suggest_strategy {
        let obligations = collect_obligations(&snapshot.loans, &snapshot.accounts, today);
        suggest_strategy(&obligations, &health, preferences.debt_strategy)
    } else {
        preferences.debt_strategy
    };

    let debt_plan = build_plan(
        &snapshot.loans,
        &snapshot.accounts,
        strategy,
        extra_payment,
        today,
    );
    let suggestions = payment_suggestions(&debt_plan, snapshot, today);
    let allocation = auto_allocate(snapshot, preferences, &health, today);
    let goal_forecasts = forecast_goals(snapshot, preferences, today);
    let emergency = emergency_readiness(snapshot, preferences, today);

    AdviceReport {
        health,
        debt_plan,
        suggestions,
        allocation,
        goal_forecasts,
        emergency,
    }
}

/// Pick a payoff strategy from the records themselves.
///
/// A struggling budget gets snowball for quick wins; a wide rate spread
/// makes avalanche clearly cheapest; otherwise the hybrid composite is the
/// safe middle. With nothing to pay off the configured strategy stands.
#[must_use]
pub fn suggest_strategy(
    obligations: &[Obligation],
    health: &FinancialHealth,
    configured: DebtStrategy,
) -> DebtStrategy {
    if obligations.is_empty() {
        return configured;
    }
    if health.score < LOW_HEALTH_SCORE {
        return DebtStrategy::Snowball;
    }

    let max_rate = obligations
        .iter()
        .map(|o| o.monthly_rate)
        .fold(f64::MIN, f64::max);
    let min_rate = obligations
        .iter()
        .map(|o| o.monthly_rate)
        .fold(f64::MAX, f64::min);
    if max_rate - min_rate >= AVALANCHE_RATE_SPREAD {
        DebtStrategy::Avalanche
    } else {
        DebtStrategy::Hybrid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LoanId, ObligationId, ObligationKind};

    fn obligation(id: u32, rate: f64) -> Obligation {
        Obligation {
            id: ObligationId::Loan(LoanId(id)),
            name: format!("loan-{id}"),
            kind: ObligationKind::Loan,
            balance: 1000.0,
            monthly_rate: rate,
            minimum_payment: 50.0,
            due_date: None,
            fees: 0.0,
        }
    }

    fn health(score: f64) -> FinancialHealth {
        FinancialHealth {
            score,
            savings_rate: 0.1,
            debt_to_income_ratio: 10.0,
            emergency_fund_ratio: 0.5,
        }
    }

    #[test]
    fn no_obligations_keeps_the_configured_strategy() {
        let picked = suggest_strategy(&[], &health(80.0), DebtStrategy::Snowball);
        assert_eq!(picked, DebtStrategy::Snowball);
    }

    #[test]
    fn low_health_prefers_quick_wins() {
        let obligations = vec![obligation(1, 1.0), obligation(2, 5.0)];
        let picked = suggest_strategy(&obligations, &health(35.0), DebtStrategy::Avalanche);
        assert_eq!(picked, DebtStrategy::Snowball);
    }

    #[test]
    fn wide_rate_spread_prefers_avalanche() {
        let obligations = vec![obligation(1, 1.0), obligation(2, 1.6)];
        let picked = suggest_strategy(&obligations, &health(70.0), DebtStrategy::Snowball);
        assert_eq!(picked, DebtStrategy::Avalanche);
    }

    #[test]
    fn tight_rate_spread_prefers_hybrid() {
        let obligations = vec![obligation(1, 1.8), obligation(2, 2.0)];
        let picked = suggest_strategy(&obligations, &health(70.0), DebtStrategy::Avalanche);
        assert_eq!(picked, DebtStrategy::Hybrid);
    }
}
