//! Goal completion forecasting
//!
//! Projects each savings goal against the monthly amount the budget can
//! spare, expressed as an on-time probability with milestone dates. The
//! probability is floored at 20 so a goal is never rendered as hopeless;
//! the point of the number is to prompt a plan change, not to condemn.

use jiff::civil::Date;

use crate::dates::{add_months, months_until};
use crate::metrics::{effective_monthly_expenses, effective_monthly_income};
use crate::model::{FinancialGoal, GoalForecast, Milestone, UserPreferences};
use crate::money::Currency;
use crate::snapshot::Snapshot;

/// Probability floor for underfunded goals
const PROBABILITY_FLOOR: f64 = 20.0;
/// Probability above which a goal is comfortably ahead of plan
const AHEAD_OF_PLAN: f64 = 95.0;
/// Probability below which corrective hints are attached
const NEEDS_ATTENTION: f64 = 80.0;
/// Milestone checkpoints as percent of target
const MILESTONE_PERCENTS: [u8; 4] = [25, 50, 75, 100];
/// Projections further out than a century are noise; cap the month count
/// before it reaches the calendar math
const MAX_PROJECTION_MONTHS: i32 = 1200;

/// Monthly amount the budget can put toward goals: net savings scaled by
/// the savings rate, so a tight budget contributes proportionally less of
/// its nominal surplus.
#[must_use]
pub fn available_for_goals(income: f64, expenses: f64) -> f64 {
    let savings = (income - expenses).max(0.0);
    if income <= 0.0 {
        return 0.0;
    }
    let rate = (savings / income).clamp(0.0, 1.0);
    savings * rate
}

/// Forecast every goal in the snapshot against the current budget.
#[must_use]
pub fn forecast_goals(
    snapshot: &Snapshot,
    preferences: &UserPreferences,
    today: Date,
) -> Vec<GoalForecast> {
    let income = effective_monthly_income(snapshot, today);
    let expenses = effective_monthly_expenses(snapshot, today);
    let available = available_for_goals(income, expenses);

    snapshot
        .goals
        .iter()
        .map(|goal| forecast_goal(goal, available, preferences.currency, today))
        .collect()
}

/// Forecast a single goal given the monthly amount available for goals.
#[must_use]
pub fn forecast_goal(
    goal: &FinancialGoal,
    available_monthly: f64,
    currency: Currency,
    today: Date,
) -> GoalForecast {
    let months_remaining = months_until(today, goal.target_date);
    let remaining = goal.remaining();
    let monthly_contribution_needed = remaining / f64::from(months_remaining);

    let probability_of_success = if monthly_contribution_needed <= 0.0 {
        100.0
    } else if available_monthly >= monthly_contribution_needed {
        100.0
    } else {
        (100.0 * available_monthly.max(0.0) / monthly_contribution_needed).max(PROBABILITY_FLOOR)
    };

    let milestones = MILESTONE_PERCENTS
        .iter()
        .map(|&percent| milestone(goal, percent, available_monthly, today))
        .collect();

    let mut recommendations = Vec::new();
    if probability_of_success < NEEDS_ATTENTION {
        let gap = monthly_contribution_needed - available_monthly.max(0.0);
        recommendations.push(format!(
            "Increase monthly contributions by {} to finish on schedule",
            currency.format(gap)
        ));
        if available_monthly > 0.0 {
            let months_at_pace =
                ((remaining / available_monthly).ceil() as i32).clamp(1, MAX_PROJECTION_MONTHS);
            recommendations.push(format!(
                "Or move the target date to {}",
                add_months(today, months_at_pace)
            ));
        } else {
            recommendations
                .push("No monthly savings are available; review expenses first".to_string());
        }
    } else if probability_of_success > AHEAD_OF_PLAN && remaining > 0.0 {
        recommendations
            .push("Ahead of plan: consider raising the target or investing the surplus".to_string());
    }

    GoalForecast {
        goal_id: goal.goal_id,
        name: goal.name.clone(),
        months_remaining,
        monthly_contribution_needed,
        available_monthly,
        probability_of_success,
        milestones,
        recommendations,
    }
}

fn milestone(goal: &FinancialGoal, percent: u8, available_monthly: f64, today: Date) -> Milestone {
    let amount = goal.target_amount * f64::from(percent) / 100.0;
    if goal.current_amount >= amount {
        return Milestone {
            percent,
            amount,
            achieved: true,
            estimated_date: Some(today),
        };
    }
    let estimated_date = if available_monthly > 0.0 {
        let months = (((amount - goal.current_amount) / available_monthly).ceil() as i32)
            .clamp(1, MAX_PROJECTION_MONTHS);
        Some(add_months(today, months))
    } else {
        None
    };
    Milestone {
        percent,
        amount,
        achieved: false,
        estimated_date,
    }
}
