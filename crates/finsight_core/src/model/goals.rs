//! Savings goal records

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ids::GoalId;

/// Relative importance of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GoalPriority {
    High,
    Medium,
    Low,
}

/// A savings goal with a target amount and date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialGoal {
    pub goal_id: GoalId,
    pub name: String,
    pub target_amount: f64,
    /// Amount saved so far. Edits may transiently push this above
    /// `target_amount`; derived math clamps instead of rejecting.
    pub current_amount: f64,
    pub target_date: Date,
    #[serde(default = "default_priority")]
    pub priority: GoalPriority,
}

impl FinancialGoal {
    /// Amount still to save, never negative
    #[must_use]
    pub fn remaining(&self) -> f64 {
        (self.target_amount - self.current_amount).max(0.0)
    }

    /// Fraction of the target reached, clamped to [0, 1]
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.target_amount <= 0.0 {
            1.0
        } else {
            (self.current_amount / self.target_amount).clamp(0.0, 1.0)
        }
    }
}

fn default_priority() -> GoalPriority {
    GoalPriority::Medium
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn overfunded_goal_clamps_instead_of_going_negative() {
        let goal = FinancialGoal {
            goal_id: GoalId(1),
            name: "Trip".to_string(),
            target_amount: 1000.0,
            current_amount: 1200.0,
            target_date: date(2026, 1, 1),
            priority: GoalPriority::Low,
        };
        assert_eq!(goal.remaining(), 0.0);
        assert_eq!(goal.progress(), 1.0);
    }
}
