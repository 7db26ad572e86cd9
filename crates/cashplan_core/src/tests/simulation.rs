//! Tests for month-by-month projection mechanics
//!
//! These tests verify:
//! - Horizon bounds validated at construction
//! - Balance evolution from contributions with an end month
//! - Monthly interest compounding and its labeled inflow
//! - Cross-entity effects (income deposits, expense withdrawals,
//!   liability repayment clamping)
//! - Sources without a plugin still reported
//! - `has_data` semantics and run determinism

use crate::calculator::Calculator;
use crate::config::PlanBuilder;
use crate::error::SimulationError;
use crate::model::{
    AssetRecord, Cycle, CycleId, EntityKind, ExpenseRecord, IncomeRecord, LiabilityRecord,
    Source, SourceId,
};
use crate::plugins::standard_registry;
use crate::simulation::Simulator;

#[test]
fn test_month_count_bounds() {
    let calculator = Calculator::new();
    let registry = standard_registry().unwrap();

    for months in [0, 1201, 5000] {
        let err = Simulator::new(&calculator, &registry, months).unwrap_err();
        assert!(
            matches!(err, SimulationError::InvalidMonthCount { .. }),
            "months={months} should be rejected"
        );
        // The message tells the caller the valid range.
        assert!(err.to_string().contains("between 1 and 1200"));
    }
    for months in [1, 1200] {
        assert!(
            Simulator::new(&calculator, &registry, months).is_ok(),
            "months={months} should be accepted"
        );
    }
}

#[test]
fn test_contribution_window_drives_balance_evolution() {
    let asset_id = SourceId(1);
    let setup = PlanBuilder::new()
        .months(24)
        .asset(
            AssetRecord::new(asset_id, "Savings", 1_000_000.0)
                .contribution(Cycle::monthly(CycleId(1), 50_000.0, 0).until(11)),
        )
        .build()
        .unwrap();

    let result = setup.run().unwrap();

    let balance = |month| {
        result
            .balance_at(month, EntityKind::Asset, asset_id)
            .unwrap()
    };
    assert_eq!(balance(0), 1_050_000.0);
    assert_eq!(balance(11), 1_600_000.0);
    // Contribution period over: the balance stays put.
    assert_eq!(balance(12), 1_600_000.0);
    assert_eq!(balance(23), 1_600_000.0);
}

#[test]
fn test_interest_compounds_monthly_and_is_recorded_as_inflow() {
    let asset_id = SourceId(1);
    let setup = PlanBuilder::new()
        .months(2)
        .asset(AssetRecord::new(asset_id, "Deposit", 1_200_000.0).annual_rate(0.05))
        .build()
        .unwrap();

    let result = setup.run().unwrap();

    // 1,200,000 * 0.05 / 12 = 5,000 in the first month.
    let first = &result.monthly[0];
    assert_eq!(
        first.balance(EntityKind::Asset, asset_id).unwrap(),
        1_205_000.0
    );
    assert_eq!(first.inflows.get("Deposit").copied(), Some(5_000.0));

    // The second month compounds on the grown balance.
    let second = &result.monthly[1];
    let expected = 1_205_000.0 * (1.0 + 0.05 / 12.0);
    let actual = second.balance(EntityKind::Asset, asset_id).unwrap();
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_interest_applies_after_same_month_contribution() {
    // The month's contribution lands before interest accrues, so interest
    // is earned on the contributed amount as well.
    let asset_id = SourceId(1);
    let setup = PlanBuilder::new()
        .months(1)
        .asset(
            AssetRecord::new(asset_id, "Savings", 1_000_000.0)
                .annual_rate(0.12)
                .contribution(Cycle::monthly(CycleId(1), 200_000.0, 0)),
        )
        .build()
        .unwrap();

    let result = setup.run().unwrap();

    // (1,000,000 + 200,000) * 1% = 12,000 interest.
    assert_eq!(
        result.balance_at(0, EntityKind::Asset, asset_id).unwrap(),
        1_212_000.0
    );
    assert_eq!(
        result.monthly[0].inflows.get("Savings").copied(),
        Some(12_000.0)
    );
}

#[test]
fn test_income_deposits_into_linked_asset() {
    let savings = SourceId(1);
    let setup = PlanBuilder::new()
        .months(3)
        .asset(AssetRecord::new(savings, "Savings", 0.0))
        .income(
            IncomeRecord::new(SourceId(2), "Salary")
                .cycle(Cycle::monthly(CycleId(1), 300_000.0, 0))
                .deposit_to(savings),
        )
        .build()
        .unwrap();

    let result = setup.run().unwrap();

    assert_eq!(
        result.balance_at(2, EntityKind::Asset, savings).unwrap(),
        900_000.0
    );
    // The salary is also visible as a labeled inflow and in the breakdown.
    assert_eq!(
        result.monthly[0].inflows.get("Salary").copied(),
        Some(300_000.0)
    );
    assert_eq!(
        result.monthly[0].income.get(&SourceId(2)).copied(),
        Some(300_000.0)
    );
}

#[test]
fn test_expense_can_overdraw_linked_asset() {
    let savings = SourceId(1);
    let setup = PlanBuilder::new()
        .months(2)
        .asset(AssetRecord::new(savings, "Savings", 100_000.0))
        .expense(
            ExpenseRecord::new(SourceId(2), "Rent")
                .cycle(Cycle::monthly(CycleId(1), 60_000.0, 0))
                .pay_from(savings),
        )
        .build()
        .unwrap();

    let result = setup.run().unwrap();

    assert_eq!(
        result.balance_at(0, EntityKind::Asset, savings).unwrap(),
        40_000.0
    );
    // Asset balances are not clamped; the shortfall is visible.
    assert_eq!(
        result.balance_at(1, EntityKind::Asset, savings).unwrap(),
        -20_000.0
    );
}

#[test]
fn test_liability_repayment_clamps_at_zero() {
    let savings = SourceId(1);
    let loan = SourceId(2);
    let setup = PlanBuilder::new()
        .months(4)
        .asset(AssetRecord::new(savings, "Savings", 500_000.0))
        .liability(
            LiabilityRecord::new(loan, "Car loan", 250_000.0)
                .repayment(Cycle::monthly(CycleId(1), 100_000.0, 0))
                .pay_from(savings),
        )
        .build()
        .unwrap();

    let result = setup.run().unwrap();

    let loan_balance = |month| {
        result
            .balance_at(month, EntityKind::Liability, loan)
            .unwrap()
    };
    assert_eq!(loan_balance(0), 150_000.0);
    assert_eq!(loan_balance(1), 50_000.0);
    // The debt never goes negative.
    assert_eq!(loan_balance(2), 0.0);
    assert_eq!(loan_balance(3), 0.0);

    // The funding asset keeps paying as scheduled; the repayment cycle,
    // not the outstanding balance, drives the withdrawal.
    assert_eq!(
        result.balance_at(3, EntityKind::Asset, savings).unwrap(),
        100_000.0
    );
    assert_eq!(
        result.monthly[0].outflows.get("Car loan").copied(),
        Some(100_000.0)
    );
}

#[test]
fn test_source_without_plugin_is_still_reported() {
    let mut calculator = Calculator::new();
    let mut source = Source::new(SourceId(1), "Untracked", EntityKind::Expense);
    source
        .outflows
        .push(Cycle::monthly(CycleId(1), 10_000.0, 0));
    calculator.add_source(source);

    // Only the asset plugin is registered; expenses have no handler.
    let mut registry = crate::registry::PluginRegistry::new();
    registry
        .register(Box::new(crate::plugins::AssetPlugin))
        .unwrap();

    let result = Simulator::new(&calculator, &registry, 1)
        .unwrap()
        .simulate()
        .unwrap();

    // The cash flow shows up in reporting, but no balance was tracked.
    assert_eq!(
        result.monthly[0].expense.get(&SourceId(1)).copied(),
        Some(10_000.0)
    );
    assert!(result.monthly[0].balances.is_empty());
    assert!(result.has_data);
}

#[test]
fn test_has_data_false_for_empty_plan() {
    let setup = PlanBuilder::new().months(12).build().unwrap();
    let result = setup.run().unwrap();

    assert!(!result.has_data);
    assert_eq!(result.current_cash_flow.net, 0.0);
    assert_eq!(result.months(), 12);
}

#[test]
fn test_has_data_true_with_balance_but_no_cash_flow() {
    let setup = PlanBuilder::new()
        .months(1)
        .asset(AssetRecord::new(SourceId(1), "Savings", 1_000.0))
        .build()
        .unwrap();
    let result = setup.run().unwrap();

    assert_eq!(result.current_cash_flow.income, 0.0);
    assert!(result.has_data);
}

#[test]
fn test_simulation_is_deterministic_and_repeatable() {
    let setup = PlanBuilder::new()
        .years(10)
        .asset(
            AssetRecord::new(SourceId(1), "Savings", 1_000_000.0)
                .annual_rate(0.02)
                .contribution(Cycle::monthly(CycleId(1), 30_000.0, 0)),
        )
        .income(
            IncomeRecord::new(SourceId(2), "Salary")
                .cycle(Cycle::monthly(CycleId(2), 300_000.0, 0))
                .deposit_to(SourceId(1)),
        )
        .expense(
            ExpenseRecord::new(SourceId(3), "Living")
                .cycle(Cycle::monthly(CycleId(3), 220_000.0, 0))
                .pay_from(SourceId(1)),
        )
        .build()
        .unwrap();

    let first = setup.run().unwrap();
    let second = setup.run().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.months(), 120);
}

#[test]
fn test_snapshot_balances_are_per_month_copies() {
    let setup = PlanBuilder::new()
        .months(3)
        .asset(
            AssetRecord::new(SourceId(1), "Savings", 0.0)
                .contribution(Cycle::monthly(CycleId(1), 1_000.0, 0)),
        )
        .build()
        .unwrap();

    let result = setup.run().unwrap();

    let per_month: Vec<f64> = result
        .monthly
        .iter()
        .map(|m| m.balance(EntityKind::Asset, SourceId(1)).unwrap())
        .collect();
    assert_eq!(per_month, vec![1_000.0, 2_000.0, 3_000.0]);
}
