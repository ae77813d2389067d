//! Debt payoff strategy simulation
//!
//! Loans and overdrawn accounts are folded into one obligation list, ranked
//! by the chosen strategy, and projected to payoff with closed-form
//! amortization. The extra payment budget is a greedy waterfall: the whole
//! amount goes to the single top-ranked debt rather than being split, which
//! is what makes both avalanche and snowball actually converge fast.

use std::cmp::Ordering;

use jiff::civil::Date;

use crate::dates::days_until;
use crate::model::{
    BankAccount, DebtPlan, DebtPlanEntry, DebtStrategy, Loan, ObligationId, ObligationKind,
};

/// Sentinel month count: the payment can never amortize the balance
pub const NEVER_AMORTIZES: u32 = 999;

/// Synthetic monthly rate (percent) for account debt. Overdraft money is
/// costlier than most consumer loans and ranks accordingly under avalanche.
pub const ACCOUNT_DEBT_RATE: f64 = 3.0;

/// Days of due-date headroom over which hybrid urgency ramps to zero
const URGENCY_HORIZON_DAYS: f64 = 90.0;

/// A single rankable debt: a loan, or the debt carried by an account
#[derive(Debug, Clone, PartialEq)]
pub struct Obligation {
    pub id: ObligationId,
    pub name: String,
    pub kind: ObligationKind,
    pub balance: f64,
    /// Monthly rate in percent, penalty included for overdue loans
    pub monthly_rate: f64,
    pub minimum_payment: f64,
    /// Account debt has no due date
    pub due_date: Option<Date>,
    /// One-off charges already assessed
    pub fees: f64,
}

/// Collect the open obligations from loans and accounts as of `today`.
///
/// Inactive records and zero balances are skipped. Account debt is
/// synthesized as a pseudo-loan at [`ACCOUNT_DEBT_RATE`] with no minimum
/// payment and no due date.
#[must_use]
pub fn collect_obligations(
    loans: &[Loan],
    accounts: &[BankAccount],
    today: Date,
) -> Vec<Obligation> {
    let mut obligations = Vec::new();

    for loan in loans.iter().filter(|l| l.active && l.current_balance > 0.0) {
        obligations.push(Obligation {
            id: ObligationId::Loan(loan.loan_id),
            name: loan.name.clone(),
            kind: ObligationKind::Loan,
            balance: loan.current_balance,
            monthly_rate: loan.effective_rate(today),
            minimum_payment: loan.minimum_payment,
            due_date: Some(loan.due_date),
            fees: loan.other_charges,
        });
    }

    for account in accounts.iter().filter(|a| a.is_active && a.carries_debt()) {
        obligations.push(Obligation {
            id: ObligationId::Account(account.account_id),
            name: account.name.clone(),
            kind: ObligationKind::AccountDebt,
            balance: account.account_debt(),
            monthly_rate: ACCOUNT_DEBT_RATE,
            minimum_payment: 0.0,
            due_date: None,
            fees: 0.0,
        });
    }

    obligations
}

/// Sort obligations into payoff order for `strategy`.
///
/// Every ordering ends in an id comparison, so the result is a total order
/// and does not depend on the input ordering.
pub fn rank_obligations(obligations: &mut [Obligation], strategy: DebtStrategy, today: Date) {
    match strategy {
        DebtStrategy::Avalanche => {
            obligations.sort_by(|a, b| {
                b.monthly_rate
                    .total_cmp(&a.monthly_rate)
                    .then_with(|| b.balance.total_cmp(&a.balance))
                    .then_with(|| id_order(a.id).cmp(&id_order(b.id)))
            });
        }
        DebtStrategy::Snowball => {
            obligations.sort_by(|a, b| {
                a.balance
                    .total_cmp(&b.balance)
                    .then_with(|| cmp_due_dates(a.due_date, b.due_date))
                    .then_with(|| id_order(a.id).cmp(&id_order(b.id)))
            });
        }
        DebtStrategy::Hybrid => {
            let max_rate = obligations
                .iter()
                .map(|o| o.monthly_rate)
                .fold(0.0_f64, f64::max);
            let min_balance = obligations
                .iter()
                .map(|o| o.balance)
                .fold(f64::INFINITY, f64::min);
            obligations.sort_by(|a, b| {
                hybrid_score(b, max_rate, min_balance, today)
                    .total_cmp(&hybrid_score(a, max_rate, min_balance, today))
                    .then_with(|| id_order(a.id).cmp(&id_order(b.id)))
            });
        }
    }
}

/// Months to pay off `balance` at `monthly_rate` percent with a fixed
/// monthly `payment`, or [`NEVER_AMORTIZES`] when the payment does not beat
/// the monthly interest accrual.
#[must_use]
pub fn payoff_months(balance: f64, payment: f64, monthly_rate: f64) -> u32 {
    if balance <= 0.0 {
        return 0;
    }
    if payment <= 0.0 {
        return NEVER_AMORTIZES;
    }
    let r = monthly_rate / 100.0;
    if r <= 0.0 {
        return (balance / payment).ceil() as u32;
    }
    if payment <= balance * r {
        return NEVER_AMORTIZES;
    }
    let months = -(1.0 - balance * r / payment).ln() / (1.0 + r).ln();
    (months.ceil() as u32).max(1)
}

/// Interest paid over the payoff: `payment x months - balance` with the
/// month count from [`payoff_months`]. A debt that never amortizes reports
/// the punitive ten-times-balance figure instead, so strategy comparisons
/// still rank it as the most expensive thing on the books.
#[must_use]
pub fn total_interest(balance: f64, payment: f64, monthly_rate: f64) -> f64 {
    if balance <= 0.0 {
        return 0.0;
    }
    let months = payoff_months(balance, payment, monthly_rate);
    if months == NEVER_AMORTIZES {
        balance * 10.0
    } else {
        (payment * f64::from(months) - balance).max(0.0)
    }
}

/// Build the ranked payoff plan as of `today`.
///
/// Every obligation gets its minimum payment; the whole `extra_payment`
/// budget lands on the single top-ranked debt. A negative budget is treated
/// as zero.
#[must_use]
pub fn build_plan(
    loans: &[Loan],
    accounts: &[BankAccount],
    strategy: DebtStrategy,
    extra_payment: f64,
    today: Date,
) -> DebtPlan {
    let mut obligations = collect_obligations(loans, accounts, today);
    rank_obligations(&mut obligations, strategy, today);

    let extra = extra_payment.max(0.0);
    let entries = obligations
        .iter()
        .enumerate()
        .map(|(index, obligation)| {
            let boost = if index == 0 { extra } else { 0.0 };
            let payment = obligation.minimum_payment + boost;
            DebtPlanEntry {
                id: obligation.id,
                name: obligation.name.clone(),
                kind: obligation.kind,
                priority: index as u32 + 1,
                suggested_payment: payment,
                payoff_months: payoff_months(obligation.balance, payment, obligation.monthly_rate),
                total_interest: total_interest(obligation.balance, payment, obligation.monthly_rate),
                fees: obligation.fees,
                reason: entry_reason(obligation, strategy),
            }
        })
        .collect();

    DebtPlan {
        strategy,
        entries,
        extra_payment: extra,
    }
}

/// Composite hybrid priority: rate dominates, small balances and near due
/// dates pull a debt forward.
fn hybrid_score(obligation: &Obligation, max_rate: f64, min_balance: f64, today: Date) -> f64 {
    let rate_part = if max_rate > 0.0 {
        obligation.monthly_rate / max_rate
    } else {
        0.0
    };
    let balance_part = if obligation.balance > 0.0 {
        (min_balance / obligation.balance).clamp(0.0, 1.0)
    } else {
        1.0
    };
    0.5 * rate_part + 0.3 * balance_part + 0.2 * urgency_weight(obligation.due_date, today)
}

/// Linear urgency ramp: overdue or due now is 1, ninety days out is 0
fn urgency_weight(due_date: Option<Date>, today: Date) -> f64 {
    match due_date {
        Some(due) => {
            let days = f64::from(days_until(today, due));
            ((URGENCY_HORIZON_DAYS - days) / URGENCY_HORIZON_DAYS).clamp(0.0, 1.0)
        }
        None => 0.0,
    }
}

/// Dated obligations sort before undated ones
fn cmp_due_dates(a: Option<Date>, b: Option<Date>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn id_order(id: ObligationId) -> (u8, u32) {
    match id {
        ObligationId::Loan(loan_id) => (0, loan_id.0),
        ObligationId::Account(account_id) => (1, account_id.0),
    }
}

fn entry_reason(obligation: &Obligation, strategy: DebtStrategy) -> String {
    match obligation.kind {
        ObligationKind::AccountDebt => "Account debt".to_string(),
        ObligationKind::Loan => match strategy {
            DebtStrategy::Avalanche => {
                format!("{:.1}% monthly interest", obligation.monthly_rate)
            }
            DebtStrategy::Snowball => "Smallest balance, fastest win".to_string(),
            DebtStrategy::Hybrid => "Best payoff value per dollar".to_string(),
        },
    }
}
