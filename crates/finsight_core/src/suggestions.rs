//! Ranked payment suggestions
//!
//! Turns a debt plan plus the live record set into the actionable list a
//! dashboard shows. Plan entries are cross-referenced against the current
//! records; an id that no longer resolves is skipped silently, since the
//! user may have deleted the record after the plan was computed and stale
//! rows are worse than missing ones. Unpaid bills due soon are appended so
//! the list covers everything that needs money this month.

use jiff::civil::Date;
use rustc_hash::FxHashMap;

use crate::dates::days_until;
use crate::model::{
    AccountId, BankAccount, DebtPlan, Loan, LoanId, ObligationId, PaymentSuggestion, SuggestionId,
    Urgency,
};
use crate::snapshot::Snapshot;

/// Bills further out than this never make the list
const BILL_WINDOW_DAYS: i32 = 30;

/// Assemble the ranked payment list for the dashboard as of `today`.
///
/// Ordering is urgency first, then larger amounts, then name; ranks are
/// assigned after the sort so priorities are always 1..=n with no gaps.
#[must_use]
pub fn payment_suggestions(
    plan: &DebtPlan,
    snapshot: &Snapshot,
    today: Date,
) -> Vec<PaymentSuggestion> {
    let loans: FxHashMap<LoanId, &Loan> =
        snapshot.loans.iter().map(|l| (l.loan_id, l)).collect();
    let accounts: FxHashMap<AccountId, &BankAccount> = snapshot
        .accounts
        .iter()
        .map(|a| (a.account_id, a))
        .collect();

    let mut suggestions = Vec::new();

    for entry in &plan.entries {
        let (name, urgency) = match entry.id {
            ObligationId::Loan(loan_id) => match loans.get(&loan_id) {
                Some(loan) => (
                    loan.name.clone(),
                    Urgency::from_days_until(days_until(today, loan.due_date)),
                ),
                None => continue,
            },
            ObligationId::Account(account_id) => match accounts.get(&account_id) {
                // Overdraft has no due date but accrues daily
                Some(account) => (account.name.clone(), Urgency::High),
                None => continue,
            },
        };
        suggestions.push(PaymentSuggestion {
            id: SuggestionId::Obligation(entry.id),
            name,
            amount: entry.suggested_payment,
            priority: 0,
            urgency,
            reason: entry.reason.clone(),
            completed: false,
        });
    }

    for bill in snapshot.bills.iter().filter(|b| b.active && !b.paid) {
        let days = days_until(today, bill.due_date);
        if days > BILL_WINDOW_DAYS {
            continue;
        }
        suggestions.push(PaymentSuggestion {
            id: SuggestionId::Bill(bill.bill_id),
            name: bill.name.clone(),
            amount: bill.amount,
            priority: 0,
            urgency: Urgency::from_days_until(days),
            reason: "Upcoming bill".to_string(),
            completed: false,
        });
    }

    suggestions.sort_by(|a, b| {
        a.urgency
            .cmp(&b.urgency)
            .then_with(|| b.amount.total_cmp(&a.amount))
            .then_with(|| a.name.cmp(&b.name))
    });
    for (index, suggestion) in suggestions.iter_mut().enumerate() {
        suggestion.priority = index as u32 + 1;
    }

    suggestions
}
