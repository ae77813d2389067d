//! Tests for goal completion forecasting

use jiff::civil::{Date, date};

use crate::forecast::{available_for_goals, forecast_goal, forecast_goals};
use crate::model::{
    Expense, ExpenseCategory, ExpenseId, FinancialGoal, Frequency, GoalId, GoalPriority, Income,
    IncomeId, UserPreferences,
};
use crate::money::Currency;
use crate::snapshot::Snapshot;

fn goal(target: f64, current: f64, target_date: Date) -> FinancialGoal {
    FinancialGoal {
        goal_id: GoalId(1),
        name: "House fund".to_string(),
        target_amount: target,
        current_amount: current,
        target_date,
        priority: GoalPriority::High,
    }
}

#[test]
fn twelve_month_goal_needs_exactly_a_twelfth_per_month() {
    let today = date(2025, 1, 1);
    // 360 days out is exactly twelve 30-day months
    let forecast = forecast_goal(
        &goal(12_000.0, 0.0, date(2025, 12, 27)),
        1_000.0,
        Currency::Usd,
        today,
    );

    assert_eq!(forecast.months_remaining, 12);
    assert_eq!(forecast.monthly_contribution_needed, 1_000.0);
    assert_eq!(forecast.probability_of_success, 100.0);
}

#[test]
fn probability_scales_with_the_funding_shortfall() {
    let today = date(2025, 1, 1);
    let target = goal(12_000.0, 0.0, date(2025, 12, 27));

    let underfunded = forecast_goal(&target, 600.0, Currency::Usd, today);
    assert_eq!(underfunded.probability_of_success, 60.0);

    // Floored at 20 so the goal never reads as hopeless
    let hopeless = forecast_goal(&target, 50.0, Currency::Usd, today);
    assert_eq!(hopeless.probability_of_success, 20.0);
    let broke = forecast_goal(&target, 0.0, Currency::Usd, today);
    assert_eq!(broke.probability_of_success, 20.0);
}

#[test]
fn achieved_goals_forecast_clean() {
    let today = date(2025, 1, 1);
    let forecast = forecast_goal(
        &goal(5_000.0, 5_000.0, date(2025, 12, 27)),
        0.0,
        Currency::Usd,
        today,
    );

    assert_eq!(forecast.probability_of_success, 100.0);
    assert!(forecast.recommendations.is_empty());
    assert!(forecast.milestones.iter().all(|m| m.achieved));
}

#[test]
fn past_target_dates_floor_at_one_month() {
    let today = date(2025, 6, 15);
    let forecast = forecast_goal(
        &goal(1_200.0, 0.0, date(2025, 1, 1)),
        100.0,
        Currency::Usd,
        today,
    );

    assert_eq!(forecast.months_remaining, 1);
    assert_eq!(forecast.monthly_contribution_needed, 1_200.0);
}

#[test]
fn milestones_mark_progress_and_project_dates() {
    let today = date(2025, 6, 15);
    let forecast = forecast_goal(
        &goal(1_000.0, 500.0, date(2026, 6, 15)),
        100.0,
        Currency::Usd,
        today,
    );

    let percents: Vec<u8> = forecast.milestones.iter().map(|m| m.percent).collect();
    assert_eq!(percents, vec![25, 50, 75, 100]);
    let amounts: Vec<f64> = forecast.milestones.iter().map(|m| m.amount).collect();
    assert_eq!(amounts, vec![250.0, 500.0, 750.0, 1_000.0]);

    // Halfway there: 25 and 50 are achieved and dated today
    assert!(forecast.milestones[0].achieved);
    assert!(forecast.milestones[1].achieved);
    assert_eq!(forecast.milestones[1].estimated_date, Some(today));

    // 250 and 500 still to save at 100/month
    assert!(!forecast.milestones[2].achieved);
    assert_eq!(forecast.milestones[2].estimated_date, Some(date(2025, 9, 15)));
    assert!(!forecast.milestones[3].achieved);
    assert_eq!(forecast.milestones[3].estimated_date, Some(date(2025, 11, 15)));
}

#[test]
fn no_available_money_leaves_future_milestones_undated() {
    let today = date(2025, 6, 15);
    let forecast = forecast_goal(
        &goal(1_000.0, 0.0, date(2026, 6, 15)),
        0.0,
        Currency::Usd,
        today,
    );

    assert!(forecast.milestones.iter().all(|m| !m.achieved));
    assert!(forecast.milestones.iter().all(|m| m.estimated_date.is_none()));
    assert!(
        forecast
            .recommendations
            .iter()
            .any(|r| r.contains("review expenses first"))
    );
}

#[test]
fn struggling_goals_quote_the_contribution_gap() {
    let today = date(2025, 1, 1);
    // Needs 1000/month, has 400: the hint quotes the 600 gap and a
    // realistic alternative date 30 months out
    let forecast = forecast_goal(
        &goal(12_000.0, 0.0, date(2025, 12, 27)),
        400.0,
        Currency::Usd,
        today,
    );

    assert!(forecast.probability_of_success < 80.0);
    assert!(
        forecast.recommendations[0]
            .contains("Increase monthly contributions by $600.00")
    );
    assert!(forecast.recommendations[1].contains("2027-07-01"));
}

#[test]
fn comfortably_ahead_goals_get_a_stretch_hint() {
    let today = date(2025, 1, 1);
    let forecast = forecast_goal(
        &goal(12_000.0, 0.0, date(2025, 12, 27)),
        2_000.0,
        Currency::Usd,
        today,
    );

    assert_eq!(forecast.probability_of_success, 100.0);
    assert!(forecast.recommendations[0].starts_with("Ahead of plan"));
}

#[test]
fn available_money_scales_by_the_savings_rate() {
    // A 50% savings rate contributes half the nominal surplus
    assert_eq!(available_for_goals(3_000.0, 1_500.0), 750.0);
    assert_eq!(available_for_goals(0.0, 500.0), 0.0);
    assert_eq!(available_for_goals(2_000.0, 2_500.0), 0.0);
}

#[test]
fn snapshot_forecasts_derive_available_from_the_budget() {
    let today = date(2025, 6, 15);
    let snapshot = Snapshot {
        incomes: vec![Income {
            income_id: IncomeId(1),
            name: "Salary".to_string(),
            amount: 3_000.0,
            frequency: Frequency::Monthly,
            account_id: None,
            active: true,
        }],
        expenses: vec![Expense {
            expense_id: ExpenseId(1),
            name: "Rent".to_string(),
            amount: 1_500.0,
            frequency: Frequency::Monthly,
            category: ExpenseCategory::Need,
            account_id: None,
            active: true,
        }],
        goals: vec![goal(9_000.0, 0.0, date(2026, 6, 15))],
        ..Default::default()
    };

    let forecasts = forecast_goals(&snapshot, &UserPreferences::default(), today);
    assert_eq!(forecasts.len(), 1);
    assert_eq!(forecasts[0].available_monthly, 750.0);
}
