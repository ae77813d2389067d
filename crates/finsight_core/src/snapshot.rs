//! The input record set
//!
//! A [`Snapshot`] is the immutable collection of records one engine call
//! reads. Callers rebuild (or memoize) it whenever any record changes; the
//! engine never mutates it. Validation is a boundary concern: the hosting
//! application calls [`Snapshot::validate`] once on ingest, and the scorers
//! then assume finite numbers and clamp instead of checking.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::{
    BankAccount, Bill, Expense, ExpectedPayment, FinancialGoal, Income, JournalEntry, Loan,
};

/// All records the engine consumes, as of one point in time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub incomes: Vec<Income>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub bills: Vec<Bill>,
    #[serde(default)]
    pub loans: Vec<Loan>,
    #[serde(default)]
    pub accounts: Vec<BankAccount>,
    #[serde(default)]
    pub goals: Vec<FinancialGoal>,
    #[serde(default)]
    pub entries: Vec<JournalEntry>,
    #[serde(default)]
    pub expected_payments: Vec<ExpectedPayment>,
}

impl Snapshot {
    /// True when no records of any kind are present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty()
            && self.expenses.is_empty()
            && self.bills.is_empty()
            && self.loans.is_empty()
            && self.accounts.is_empty()
            && self.goals.is_empty()
            && self.entries.is_empty()
            && self.expected_payments.is_empty()
    }

    /// Reject malformed numeric input before it reaches the scorers.
    ///
    /// Account balances may be negative (overdraft); every other amount must
    /// be finite and non-negative, loan balances included.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for income in &self.incomes {
            non_negative("amount", &income.name, income.amount)?;
        }
        for expense in &self.expenses {
            non_negative("amount", &expense.name, expense.amount)?;
        }
        for bill in &self.bills {
            non_negative("amount", &bill.name, bill.amount)?;
        }
        for loan in &self.loans {
            finite("balance", &loan.name, loan.current_balance)?;
            if loan.current_balance < 0.0 {
                return Err(ValidationError::NegativeLoanBalance {
                    loan: loan.name.clone(),
                });
            }
            non_negative("principal", &loan.name, loan.principal)?;
            non_negative("interest rate", &loan.name, loan.interest_rate)?;
            non_negative("minimum payment", &loan.name, loan.minimum_payment)?;
            if let Some(penalty) = loan.penalty_rate {
                non_negative("penalty rate", &loan.name, penalty)?;
            }
            non_negative("other charges", &loan.name, loan.other_charges)?;
        }
        for account in &self.accounts {
            finite("balance", &account.name, account.balance)?;
            non_negative("overdraft limit", &account.name, account.overdraft_limit)?;
            non_negative("overdraft used", &account.name, account.overdraft_used)?;
            if account.overdraft_used > account.overdraft_limit {
                return Err(ValidationError::OverdraftAboveLimit {
                    account: account.name.clone(),
                });
            }
        }
        for goal in &self.goals {
            non_negative("target amount", &goal.name, goal.target_amount)?;
            non_negative("current amount", &goal.name, goal.current_amount)?;
        }
        for entry in &self.entries {
            non_negative("amount", &entry.name, entry.amount)?;
        }
        for payment in &self.expected_payments {
            non_negative("amount", &payment.name, payment.amount)?;
        }
        Ok(())
    }
}

fn finite(field: &'static str, record: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite {
            field,
            record: record.to_string(),
        })
    }
}

fn non_negative(field: &'static str, record: &str, value: f64) -> Result<(), ValidationError> {
    finite(field, record, value)?;
    if value < 0.0 {
        return Err(ValidationError::NegativeAmount {
            field,
            record: record.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AccountId, AccountKind, Frequency, IncomeId, LoanId};
    use jiff::civil::date;

    fn income(amount: f64) -> Income {
        Income {
            income_id: IncomeId(1),
            name: "Salary".to_string(),
            amount,
            frequency: Frequency::Monthly,
            account_id: None,
            active: true,
        }
    }

    #[test]
    fn empty_snapshot_is_valid_and_empty() {
        let snapshot = Snapshot::default();
        assert!(snapshot.is_empty());
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn nan_amounts_are_rejected() {
        let snapshot = Snapshot {
            incomes: vec![income(f64::NAN)],
            ..Default::default()
        };
        assert!(matches!(
            snapshot.validate(),
            Err(ValidationError::NonFinite { .. })
        ));
    }

    #[test]
    fn negative_loan_balances_are_rejected() {
        let snapshot = Snapshot {
            loans: vec![Loan {
                loan_id: LoanId(1),
                name: "Card".to_string(),
                principal: 1000.0,
                current_balance: -10.0,
                interest_rate: 2.0,
                minimum_payment: 50.0,
                due_date: date(2025, 7, 1),
                penalty_rate: None,
                other_charges: 0.0,
                active: true,
            }],
            ..Default::default()
        };
        assert!(matches!(
            snapshot.validate(),
            Err(ValidationError::NegativeLoanBalance { .. })
        ));
    }

    #[test]
    fn overdraft_cannot_exceed_its_limit() {
        let snapshot = Snapshot {
            accounts: vec![BankAccount {
                account_id: AccountId(1),
                name: "Everyday".to_string(),
                balance: 100.0,
                kind: AccountKind::Checking,
                is_active: true,
                has_overdraft: true,
                overdraft_limit: 200.0,
                overdraft_used: 350.0,
            }],
            ..Default::default()
        };
        assert!(matches!(
            snapshot.validate(),
            Err(ValidationError::OverdraftAboveLimit { .. })
        ));
    }

    #[test]
    fn negative_account_balances_are_allowed() {
        let snapshot = Snapshot {
            accounts: vec![BankAccount {
                account_id: AccountId(1),
                name: "Everyday".to_string(),
                balance: -75.0,
                kind: AccountKind::Checking,
                is_active: true,
                has_overdraft: false,
                overdraft_limit: 0.0,
                overdraft_used: 0.0,
            }],
            ..Default::default()
        };
        assert!(snapshot.validate().is_ok());
    }
}
