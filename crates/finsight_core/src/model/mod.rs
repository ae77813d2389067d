mod accounts;
mod entries;
mod flows;
mod goals;
mod ids;
mod loans;
mod preferences;
mod results;

pub use accounts::{AccountKind, BankAccount};
pub use entries::{EntryKind, ExpectedPayment, JournalEntry, PaymentDirection};
pub use flows::{Bill, Expense, ExpenseCategory, Frequency, Income};
pub use goals::{FinancialGoal, GoalPriority};
pub use ids::{
    AccountId, BillId, EntryId, ExpenseId, GoalId, IncomeId, LoanId, ObligationId, SuggestionId,
};
pub use loans::Loan;
pub use preferences::{AllocationStrategy, DebtStrategy, RiskTolerance, UserPreferences};
pub use results::{
    AdviceReport, AllocationBreakdown, AutoAllocation, DebtPlan, DebtPlanEntry,
    EmergencyReadiness, FinancialHealth, GoalForecast, Milestone, ObligationKind,
    PaymentSuggestion, ReadinessLevel, Urgency,
};
