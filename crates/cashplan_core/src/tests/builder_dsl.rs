//! Tests for the plan builder and end-to-end household scenarios
//!
//! These tests verify:
//! - Referential validation at build time
//! - The serialized plan format round-trips
//! - A realistic multi-entity household plan projects correctly

use crate::config::{Plan, PlanBuilder};
use crate::error::PlanError;
use crate::model::{
    AssetRecord, Cycle, CycleId, EntityKind, ExpenseRecord, GroupId, IncomeRecord,
    LiabilityRecord, Record, SourceId,
};
use crate::plugins::standard_registry;

#[test]
fn test_duplicate_record_ids_are_rejected() {
    let err = PlanBuilder::new()
        .asset(AssetRecord::new(SourceId(1), "Savings", 0.0))
        .income(IncomeRecord::new(SourceId(1), "Salary"))
        .build()
        .unwrap_err();

    assert_eq!(err, PlanError::DuplicateRecordId(SourceId(1)));
}

#[test]
fn test_dangling_asset_references_are_rejected() {
    let err = PlanBuilder::new()
        .income(
            IncomeRecord::new(SourceId(1), "Salary").deposit_to(SourceId(42)),
        )
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        PlanError::UnknownLinkedAsset {
            record: SourceId(1),
            target: SourceId(42),
        }
    );
}

#[test]
fn test_build_creates_one_source_per_record() {
    let setup = PlanBuilder::new()
        .asset(AssetRecord::new(SourceId(1), "Savings", 0.0))
        .income(IncomeRecord::new(SourceId(2), "Salary"))
        .expense(ExpenseRecord::new(SourceId(3), "Rent"))
        .liability(LiabilityRecord::new(SourceId(4), "Loan", 100_000.0))
        .build()
        .unwrap();

    assert_eq!(setup.calculator.len(), 4);
    let kinds: Vec<EntityKind> = setup
        .calculator
        .sources()
        .iter()
        .map(|s| s.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            EntityKind::Asset,
            EntityKind::Income,
            EntityKind::Expense,
            EntityKind::Liability,
        ]
    );
}

#[test]
fn test_plugins_expose_record_groups() {
    let registry = standard_registry().unwrap();
    let record = Record::Expense(
        ExpenseRecord::new(SourceId(1), "Home insurance").group(GroupId(7)),
    );

    let plugin = registry.get(EntityKind::Expense).unwrap();
    assert_eq!(plugin.group_id(&record), Some(GroupId(7)));

    let ungrouped = Record::Expense(ExpenseRecord::new(SourceId(2), "Groceries"));
    assert_eq!(plugin.group_id(&ungrouped), None);
}

#[test]
fn test_plan_json_round_trip() {
    let plan = PlanBuilder::new()
        .months(120)
        .start(2026, 4, 1)
        .asset(
            AssetRecord::new(SourceId(1), "Savings", 2_000_000.0)
                .annual_rate(0.015)
                .contribution(Cycle::monthly(CycleId(1), 50_000.0, 0).until(59)),
        )
        .income(
            IncomeRecord::new(SourceId(2), "Salary")
                .cycle(Cycle::monthly(CycleId(2), 320_000.0, 0))
                .deposit_to(SourceId(1)),
        )
        .plan();

    let json = serde_json::to_string_pretty(&plan).unwrap();
    let parsed: Plan = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, plan);
}

#[test]
fn test_plan_defaults_apply_when_fields_absent() {
    let plan: Plan = serde_json::from_str(r#"{"records": []}"#).unwrap();
    assert_eq!(plan.months, 360);
    assert!(plan.start.is_none());
}

#[test]
fn test_custom_cycle_json_shape() {
    let cycle = Cycle::every_months(CycleId(1), 3, 5_000.0, 2);
    let json = serde_json::to_value(&cycle).unwrap();

    assert_eq!(json["type"], "custom");
    assert_eq!(json["every"], 3);
    assert_eq!(json["unit"], "month");
    assert_eq!(json["start_month"], 2);
}

/// One household, all four entity kinds: salary deposited to savings,
/// rent and a loan repayment drawn from it.
#[test]
fn test_full_household_scenario() {
    let savings = SourceId(1);
    let loan = SourceId(4);
    let setup = PlanBuilder::new()
        .years(2)
        .asset(AssetRecord::new(savings, "Savings", 1_000_000.0))
        .income(
            IncomeRecord::new(SourceId(2), "Salary")
                .cycle(Cycle::monthly(CycleId(1), 320_000.0, 0))
                .deposit_to(savings),
        )
        .expense(
            ExpenseRecord::new(SourceId(3), "Rent")
                .cycle(Cycle::monthly(CycleId(2), 95_000.0, 0))
                .pay_from(savings),
        )
        .liability(
            LiabilityRecord::new(loan, "Student loan", 600_000.0)
                .repayment(Cycle::monthly(CycleId(3), 25_000.0, 0))
                .pay_from(savings),
        )
        .build()
        .unwrap();

    let result = setup.run().unwrap();

    // Month 0: 1,000,000 + 320,000 - 95,000 - 25,000.
    assert_eq!(
        result.balance_at(0, EntityKind::Asset, savings).unwrap(),
        1_200_000.0
    );
    assert_eq!(
        result.balance_at(0, EntityKind::Liability, loan).unwrap(),
        575_000.0
    );

    // Month 11: a year of +200,000 net per month; loan down 12 payments.
    assert_eq!(
        result.balance_at(11, EntityKind::Asset, savings).unwrap(),
        3_400_000.0
    );
    assert_eq!(
        result.balance_at(11, EntityKind::Liability, loan).unwrap(),
        300_000.0
    );

    // Reported current cash flow matches the recurring schedule.
    assert_eq!(result.current_cash_flow.income, 320_000.0);
    assert_eq!(result.current_cash_flow.expense, 120_000.0);
    assert_eq!(result.current_cash_flow.net, 200_000.0);
    assert!(result.has_data);

    // Net balance combines assets minus liabilities.
    assert_eq!(result.monthly[0].net_balance(), 625_000.0);
}
