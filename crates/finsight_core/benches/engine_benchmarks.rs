//! Criterion benchmarks for the finsight_core engine
//!
//! Run with: cargo bench -p finsight_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use finsight_core::debt::build_plan;
use finsight_core::engine::evaluate;
use finsight_core::model::{
    AccountId, AccountKind, BankAccount, Bill, BillId, DebtStrategy, Expense, ExpenseCategory,
    ExpenseId, FinancialGoal, Frequency, GoalId, GoalPriority, Income, IncomeId, Loan, LoanId,
    UserPreferences,
};
use finsight_core::snapshot::Snapshot;

fn create_loans(count: usize) -> Vec<Loan> {
    (0..count)
        .map(|i| {
            let balance = 500.0 + (i as f64 * 137.0) % 20_000.0;
            Loan {
                loan_id: LoanId(i as u32 + 1),
                name: format!("loan-{i}"),
                principal: balance,
                current_balance: balance,
                interest_rate: 0.5 + (i % 10) as f64 * 0.3,
                minimum_payment: (balance * 0.03).max(25.0),
                due_date: jiff::civil::date(2025, 7, (i % 28) as i8 + 1),
                penalty_rate: if i % 7 == 0 { Some(1.0) } else { None },
                other_charges: 0.0,
                active: true,
            }
        })
        .collect()
}

fn create_household_snapshot(loan_count: usize) -> Snapshot {
    Snapshot {
        incomes: vec![
            Income {
                income_id: IncomeId(1),
                name: "Salary".to_string(),
                amount: 5_500.0,
                frequency: Frequency::Monthly,
                account_id: Some(AccountId(1)),
                active: true,
            },
            Income {
                income_id: IncomeId(2),
                name: "Side gig".to_string(),
                amount: 150.0,
                frequency: Frequency::Weekly,
                account_id: None,
                active: true,
            },
        ],
        expenses: vec![
            Expense {
                expense_id: ExpenseId(1),
                name: "Rent".to_string(),
                amount: 1_800.0,
                frequency: Frequency::Monthly,
                category: ExpenseCategory::Need,
                account_id: Some(AccountId(1)),
                active: true,
            },
            Expense {
                expense_id: ExpenseId(2),
                name: "Groceries".to_string(),
                amount: 160.0,
                frequency: Frequency::Weekly,
                category: ExpenseCategory::Need,
                account_id: None,
                active: true,
            },
        ],
        bills: (0..12u32)
            .map(|i| Bill {
                bill_id: BillId(i + 1),
                name: format!("bill-{i}"),
                amount: 40.0 + f64::from(i) * 15.0,
                frequency: Frequency::Monthly,
                due_date: jiff::civil::date(2025, 7, (i % 28) as i8 + 1),
                paid: i % 3 == 0,
                account_id: None,
                active: true,
            })
            .collect(),
        loans: create_loans(loan_count),
        accounts: vec![
            BankAccount {
                account_id: AccountId(1),
                name: "Everyday".to_string(),
                balance: 2_200.0,
                kind: AccountKind::Checking,
                is_active: true,
                has_overdraft: true,
                overdraft_limit: 500.0,
                overdraft_used: 120.0,
            },
            BankAccount {
                account_id: AccountId(2),
                name: "Rainy day".to_string(),
                balance: 8_000.0,
                kind: AccountKind::Savings,
                is_active: true,
                has_overdraft: false,
                overdraft_limit: 0.0,
                overdraft_used: 0.0,
            },
        ],
        goals: vec![FinancialGoal {
            goal_id: GoalId(1),
            name: "House deposit".to_string(),
            target_amount: 40_000.0,
            current_amount: 9_500.0,
            target_date: jiff::civil::date(2028, 1, 1),
            priority: GoalPriority::High,
        }],
        ..Default::default()
    }
}

fn bench_full_report(c: &mut Criterion) {
    let snapshot = create_household_snapshot(10);
    let preferences = UserPreferences::default();
    let today = jiff::civil::date(2025, 6, 15);

    c.bench_function("full_report_10_loans", |b| {
        b.iter(|| {
            evaluate(
                black_box(&snapshot),
                black_box(&preferences),
                black_box(today),
                black_box(200.0),
            )
        })
    });
}

fn bench_debt_plan_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("debt_plan");
    let snapshot = create_household_snapshot(50);
    let today = jiff::civil::date(2025, 6, 15);

    for strategy in [
        DebtStrategy::Avalanche,
        DebtStrategy::Snowball,
        DebtStrategy::Hybrid,
    ] {
        group.bench_with_input(
            BenchmarkId::new("strategy", strategy.label()),
            &strategy,
            |b, &strategy| {
                b.iter(|| {
                    build_plan(
                        black_box(&snapshot.loans),
                        black_box(&snapshot.accounts),
                        strategy,
                        black_box(300.0),
                        black_box(today),
                    )
                })
            },
        );
    }

    group.finish();
}

fn bench_report_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("report_scaling");
    let preferences = UserPreferences::default();
    let today = jiff::civil::date(2025, 6, 15);

    for loan_count in [10, 50, 200].iter() {
        let snapshot = create_household_snapshot(*loan_count);

        group.bench_with_input(
            BenchmarkId::new("loans", loan_count),
            loan_count,
            |b, _| {
                b.iter(|| {
                    evaluate(
                        black_box(&snapshot),
                        black_box(&preferences),
                        black_box(today),
                        black_box(200.0),
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_full_report,
    bench_debt_plan_strategies,
    bench_report_scaling,
);
criterion_main!(benches);
