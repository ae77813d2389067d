//! Derived outputs of the recommendation engine
//!
//! Everything here is recomputed from the record snapshot on every call and
//! is never persisted. Ratios in [`FinancialHealth`] are reported as
//! computed; only the composite score is clamped.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ids::{GoalId, ObligationId, SuggestionId};
use super::preferences::DebtStrategy;

/// Composite financial health
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialHealth {
    /// Composite score in [0, 100]
    pub score: f64,
    /// (income - expenses) / income, unclamped; negative when spending
    /// exceeds income
    pub savings_rate: f64,
    /// Minimum debt payments as a percentage of income
    pub debt_to_income_ratio: f64,
    /// Liquid assets over the target emergency fund, unclamped
    pub emergency_fund_ratio: f64,
}

/// How soon a payment needs attention. Sorts most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Urgency {
    Critical,
    High,
    Medium,
    Low,
}

impl Urgency {
    /// Classify by days until the due date; negative means overdue.
    #[must_use]
    pub fn from_days_until(days: i32) -> Self {
        if days <= 3 {
            Urgency::Critical
        } else if days <= 7 {
            Urgency::High
        } else if days <= 14 {
            Urgency::Medium
        } else {
            Urgency::Low
        }
    }

    /// Lowercase label for display
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Critical => "critical",
            Urgency::High => "high",
            Urgency::Medium => "medium",
            Urgency::Low => "low",
        }
    }
}

/// Kind of obligation behind a debt plan entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObligationKind {
    Loan,
    /// Negative balance or drawn overdraft on a bank account
    AccountDebt,
}

/// Per-debt recommendation produced by the strategy simulator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPlanEntry {
    pub id: ObligationId,
    pub name: String,
    pub kind: ObligationKind,
    /// 1-based rank in the payoff ordering
    pub priority: u32,
    /// Minimum payment, plus the whole extra budget for the top-ranked debt
    pub suggested_payment: f64,
    /// Months to payoff at the suggested payment, or the 999 sentinel when
    /// the payment can never amortize the balance
    pub payoff_months: u32,
    /// Interest paid over the payoff. At the sentinel this is the punitive
    /// balance-times-ten figure rather than a projection.
    pub total_interest: f64,
    /// One-off charges already assessed on the obligation
    pub fees: f64,
    /// Why the strategy ranked this debt where it did
    pub reason: String,
}

impl DebtPlanEntry {
    /// Projected cost of carrying this debt to payoff
    #[must_use]
    pub fn projected_cost(&self) -> f64 {
        self.total_interest + self.fees
    }
}

/// Ranked payoff plan across loans and account debts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPlan {
    pub strategy: DebtStrategy,
    /// Entries in payoff order; empty when debt-free
    pub entries: Vec<DebtPlanEntry>,
    /// Extra monthly budget applied to the top-ranked entry
    pub extra_payment: f64,
}

impl DebtPlan {
    /// True when there is nothing to pay off
    #[must_use]
    pub fn is_debt_free(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of projected interest across all entries
    #[must_use]
    pub fn total_projected_interest(&self) -> f64 {
        self.entries.iter().map(|e| e.total_interest).sum()
    }

    /// Sum of suggested payments across all entries
    #[must_use]
    pub fn total_suggested_payment(&self) -> f64 {
        self.entries.iter().map(|e| e.suggested_payment).sum()
    }
}

/// A single ranked, actionable payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSuggestion {
    /// Record the suggestion refers to
    pub id: SuggestionId,
    pub name: String,
    pub amount: f64,
    /// 1-based rank in the suggestion list
    pub priority: u32,
    pub urgency: Urgency,
    pub reason: String,
    /// Whether the user has acted on it; always false when freshly derived
    pub completed: bool,
}

/// Named surplus buckets, in major units. The four buckets always sum to the
/// allocated surplus exactly at cent precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationBreakdown {
    pub debt_payment: f64,
    pub emergency_fund: f64,
    pub goal_contributions: f64,
    pub discretionary: f64,
}

impl AllocationBreakdown {
    pub const ZERO: AllocationBreakdown = AllocationBreakdown {
        debt_payment: 0.0,
        emergency_fund: 0.0,
        goal_contributions: 0.0,
        discretionary: 0.0,
    };

    /// Sum of the four buckets
    #[must_use]
    pub fn total(&self) -> f64 {
        self.debt_payment + self.emergency_fund + self.goal_contributions + self.discretionary
    }
}

/// Result of auto-allocating the monthly surplus
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AutoAllocation {
    /// Monthly obligations exceed income; there is nothing to allocate
    Deficit { shortfall: f64 },
    /// Surplus split across the buckets
    Allocated {
        surplus: f64,
        breakdown: AllocationBreakdown,
    },
}

impl AutoAllocation {
    /// True when obligations exceed income
    #[must_use]
    pub fn is_deficit(&self) -> bool {
        matches!(self, AutoAllocation::Deficit { .. })
    }

    /// Buckets of the allocation; all zero in a deficit
    #[must_use]
    pub fn breakdown(&self) -> AllocationBreakdown {
        match self {
            AutoAllocation::Deficit { .. } => AllocationBreakdown::ZERO,
            AutoAllocation::Allocated { breakdown, .. } => *breakdown,
        }
    }
}

/// A 25/50/75/100 percent checkpoint on the way to a goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Percent of the target this checkpoint marks
    pub percent: u8,
    /// Absolute amount at this checkpoint
    pub amount: f64,
    pub achieved: bool,
    /// Projected date at the available monthly contribution. `None` when
    /// nothing is available to contribute; achieved checkpoints carry the
    /// report date.
    pub estimated_date: Option<Date>,
}

/// Completion outlook for a single goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalForecast {
    pub goal_id: GoalId,
    pub name: String,
    /// Whole months until the target date, floored at one
    pub months_remaining: u32,
    /// Monthly contribution that lands exactly on the target date
    pub monthly_contribution_needed: f64,
    /// Monthly amount the budget can currently put toward goals
    pub available_monthly: f64,
    /// Chance of hitting the target on time, in [20, 100]
    pub probability_of_success: f64,
    pub milestones: Vec<Milestone>,
    /// Free-text hints; empty when the goal is comfortably on track
    pub recommendations: Vec<String>,
}

impl GoalForecast {
    /// True when no corrective hint is warranted
    #[must_use]
    pub fn on_track(&self) -> bool {
        self.probability_of_success >= 80.0
    }
}

/// Preparedness banding over the emergency readiness score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReadinessLevel {
    Unprepared,
    Basic,
    Prepared,
    WellPrepared,
}

impl ReadinessLevel {
    /// Threshold lookup on the composite score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score < 40.0 {
            ReadinessLevel::Unprepared
        } else if score < 60.0 {
            ReadinessLevel::Basic
        } else if score < 80.0 {
            ReadinessLevel::Prepared
        } else {
            ReadinessLevel::WellPrepared
        }
    }

    /// Lowercase label for display
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ReadinessLevel::Unprepared => "unprepared",
            ReadinessLevel::Basic => "basic",
            ReadinessLevel::Prepared => "prepared",
            ReadinessLevel::WellPrepared => "well-prepared",
        }
    }
}

/// Liquidity-resilience assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyReadiness {
    /// Composite score in [0, 100]
    pub score: f64,
    pub level: ReadinessLevel,
    /// Months of expenses covered by liquid assets
    pub fund_months: f64,
    /// Minimum debt payments as a percentage of income
    pub debt_to_income_ratio: f64,
    /// Binary stability heuristic: 0.8 with two or more active income
    /// sources, 0.6 otherwise
    pub income_stability: f64,
    pub recommendations: Vec<String>,
}

/// Everything the dashboard needs, computed in one pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceReport {
    pub health: FinancialHealth,
    pub debt_plan: DebtPlan,
    pub suggestions: Vec<PaymentSuggestion>,
    pub allocation: AutoAllocation,
    pub goal_forecasts: Vec<GoalForecast>,
    pub emergency: EmergencyReadiness,
}
