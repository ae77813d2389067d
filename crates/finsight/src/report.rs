//! Plain-text rendering of an advice report
//!
//! One section per engine component, written for a terminal. Amounts are
//! formatted in the user's display currency; writes to the output string
//! are infallible and their results discarded.

use std::fmt::Write;

use finsight_core::debt::NEVER_AMORTIZES;
use finsight_core::model::{
    AdviceReport, AutoAllocation, DebtPlan, EmergencyReadiness, FinancialHealth, GoalForecast,
    PaymentSuggestion, UserPreferences,
};
use finsight_core::money::Currency;
use jiff::civil::Date;

/// Render the full report as display text.
#[must_use]
pub fn render(report: &AdviceReport, preferences: &UserPreferences, today: Date) -> String {
    let currency = preferences.currency;
    let mut out = String::new();

    let _ = writeln!(out, "Financial report as of {today}");
    let _ = writeln!(out);

    health_section(&mut out, &report.health);
    debt_section(&mut out, &report.debt_plan, currency);
    suggestions_section(&mut out, &report.suggestions, currency);
    allocation_section(&mut out, &report.allocation, currency);
    goals_section(&mut out, &report.goal_forecasts, currency);
    emergency_section(&mut out, &report.emergency);

    out
}

fn health_section(out: &mut String, health: &FinancialHealth) {
    let _ = writeln!(out, "Financial health: {:.1}/100", health.score);
    let _ = writeln!(
        out,
        "  Savings rate:   {:.1}% of income",
        health.savings_rate * 100.0
    );
    let _ = writeln!(
        out,
        "  Debt-to-income: {:.1}%",
        health.debt_to_income_ratio
    );
    let _ = writeln!(
        out,
        "  Emergency fund: {:.0}% of target",
        health.emergency_fund_ratio * 100.0
    );
    let _ = writeln!(out);
}

fn debt_section(out: &mut String, plan: &DebtPlan, currency: Currency) {
    if plan.is_debt_free() {
        let _ = writeln!(out, "Debt plan: debt-free");
        let _ = writeln!(out);
        return;
    }

    if plan.extra_payment > 0.0 {
        let _ = writeln!(
            out,
            "Debt plan ({} strategy, {} extra on the top debt)",
            plan.strategy.label(),
            currency.format(plan.extra_payment)
        );
    } else {
        let _ = writeln!(out, "Debt plan ({} strategy)", plan.strategy.label());
    }

    for entry in &plan.entries {
        if entry.payoff_months == NEVER_AMORTIZES {
            let _ = writeln!(
                out,
                "  {}. {}: pay {}/mo, never pays off at this payment ({})",
                entry.priority,
                entry.name,
                currency.format(entry.suggested_payment),
                entry.reason
            );
        } else {
            let _ = writeln!(
                out,
                "  {}. {}: pay {}/mo, debt-free in {} {} ({})",
                entry.priority,
                entry.name,
                currency.format(entry.suggested_payment),
                entry.payoff_months,
                months_word(entry.payoff_months),
                entry.reason
            );
        }
    }
    let _ = writeln!(
        out,
        "  Projected interest: {}",
        currency.format(plan.total_projected_interest())
    );
    let _ = writeln!(out);
}

fn suggestions_section(out: &mut String, suggestions: &[PaymentSuggestion], currency: Currency) {
    if suggestions.is_empty() {
        return;
    }
    let _ = writeln!(out, "Payments needing attention");
    for suggestion in suggestions {
        let _ = writeln!(
            out,
            "  {}. [{}] {}: {} ({})",
            suggestion.priority,
            suggestion.urgency.label(),
            suggestion.name,
            currency.format(suggestion.amount),
            suggestion.reason
        );
    }
    let _ = writeln!(out);
}

fn allocation_section(out: &mut String, allocation: &AutoAllocation, currency: Currency) {
    match allocation {
        AutoAllocation::Deficit { shortfall } => {
            let _ = writeln!(
                out,
                "Monthly budget: obligations exceed income by {}",
                currency.format(*shortfall)
            );
        }
        AutoAllocation::Allocated { surplus, breakdown } => {
            let _ = writeln!(
                out,
                "Monthly allocation of {} surplus",
                currency.format(*surplus)
            );
            let _ = writeln!(
                out,
                "  Debt payment:   {}",
                currency.format(breakdown.debt_payment)
            );
            let _ = writeln!(
                out,
                "  Emergency fund: {}",
                currency.format(breakdown.emergency_fund)
            );
            let _ = writeln!(
                out,
                "  Goals:          {}",
                currency.format(breakdown.goal_contributions)
            );
            let _ = writeln!(
                out,
                "  Discretionary:  {}",
                currency.format(breakdown.discretionary)
            );
        }
    }
    let _ = writeln!(out);
}

fn goals_section(out: &mut String, forecasts: &[GoalForecast], currency: Currency) {
    if forecasts.is_empty() {
        return;
    }
    let _ = writeln!(out, "Goal outlook");
    for forecast in forecasts {
        let _ = writeln!(
            out,
            "  {}: {:.0}% on-time chance, {} {} left",
            forecast.name,
            forecast.probability_of_success,
            forecast.months_remaining,
            months_word(forecast.months_remaining)
        );
        let _ = writeln!(
            out,
            "    needs {}/mo, budget frees {}/mo",
            currency.format(forecast.monthly_contribution_needed),
            currency.format(forecast.available_monthly)
        );
        let next = forecast
            .milestones
            .iter()
            .find(|m| !m.achieved && m.estimated_date.is_some());
        if let Some(milestone) = next
            && let Some(date) = milestone.estimated_date
        {
            let _ = writeln!(
                out,
                "    next milestone: {}% ({}) around {}",
                milestone.percent,
                currency.format(milestone.amount),
                date
            );
        }
        for recommendation in &forecast.recommendations {
            let _ = writeln!(out, "    - {recommendation}");
        }
    }
    let _ = writeln!(out);
}

fn emergency_section(out: &mut String, emergency: &EmergencyReadiness) {
    let _ = writeln!(
        out,
        "Emergency readiness: {:.1}/100 ({})",
        emergency.score,
        emergency.level.label()
    );
    let _ = writeln!(
        out,
        "  Fund covers {:.1} months of expenses",
        emergency.fund_months
    );
    for recommendation in &emergency.recommendations {
        let _ = writeln!(out, "  - {recommendation}");
    }
}

fn months_word(months: u32) -> &'static str {
    if months == 1 { "month" } else { "months" }
}
