//! Aggregate monthly totals over the record set
//!
//! Shared building blocks for every scorer. The plain totals read only the
//! recurring records; the `effective_*` variants additionally fold in
//! journal entries and paid expected payments dated in the report month.
//! Inactive records never contribute.

use jiff::civil::Date;

use crate::dates::same_month;
use crate::model::{BankAccount, EntryKind, Expense, Income, Loan, PaymentDirection};
use crate::snapshot::Snapshot;

/// Sum of monthly-equivalent amounts over active incomes
#[must_use]
pub fn total_monthly_income(incomes: &[Income]) -> f64 {
    incomes
        .iter()
        .filter(|i| i.active)
        .map(Income::monthly_amount)
        .sum()
}

/// Sum of monthly-equivalent amounts over active expenses
#[must_use]
pub fn total_monthly_expenses(expenses: &[Expense]) -> f64 {
    expenses
        .iter()
        .filter(|e| e.active)
        .map(Expense::monthly_amount)
        .sum()
}

/// Total debt: active loan balances plus account debt. An account's negative
/// balance and its drawn overdraft are distinct owed amounts and both count.
#[must_use]
pub fn total_debt(loans: &[Loan], accounts: &[BankAccount]) -> f64 {
    let loan_debt: f64 = loans
        .iter()
        .filter(|l| l.active)
        .map(|l| l.current_balance)
        .sum();
    let account_debt: f64 = accounts
        .iter()
        .filter(|a| a.is_active)
        .map(BankAccount::account_debt)
        .sum();
    loan_debt + account_debt
}

/// Sum of contractual minimum payments across active loans. Account debt
/// carries no contractual minimum and contributes nothing.
#[must_use]
pub fn total_minimum_payments(loans: &[Loan], _accounts: &[BankAccount]) -> f64 {
    loans
        .iter()
        .filter(|l| l.active)
        .map(|l| l.minimum_payment)
        .sum()
}

/// Liquid assets: positive balances across active checking and savings
/// accounts. Negative balances are debt, not negative liquidity.
#[must_use]
pub fn liquid_assets(accounts: &[BankAccount]) -> f64 {
    accounts
        .iter()
        .filter(|a| a.is_active && a.is_liquid())
        .map(|a| a.balance.max(0.0))
        .sum()
}

/// Monthly income plus this month's business entries and paid incoming
/// expected payments
#[must_use]
pub fn effective_monthly_income(snapshot: &Snapshot, today: Date) -> f64 {
    let business: f64 = snapshot
        .entries
        .iter()
        .filter(|e| e.kind == EntryKind::Business && same_month(e.date, today))
        .map(|e| e.amount)
        .sum();
    let received: f64 = snapshot
        .expected_payments
        .iter()
        .filter(|p| {
            p.paid && p.direction == PaymentDirection::Incoming && same_month(p.due_date, today)
        })
        .map(|p| p.amount)
        .sum();
    total_monthly_income(&snapshot.incomes) + business + received
}

/// Monthly expenses plus this month's daily entries and paid outgoing
/// expected payments
#[must_use]
pub fn effective_monthly_expenses(snapshot: &Snapshot, today: Date) -> f64 {
    let daily: f64 = snapshot
        .entries
        .iter()
        .filter(|e| e.kind == EntryKind::Daily && same_month(e.date, today))
        .map(|e| e.amount)
        .sum();
    let sent: f64 = snapshot
        .expected_payments
        .iter()
        .filter(|p| {
            p.paid && p.direction == PaymentDirection::Outgoing && same_month(p.due_date, today)
        })
        .map(|p| p.amount)
        .sum();
    total_monthly_expenses(&snapshot.expenses) + daily + sent
}

/// Number of active income sources
#[must_use]
pub fn active_income_sources(incomes: &[Income]) -> usize {
    incomes.iter().filter(|i| i.active).count()
}
