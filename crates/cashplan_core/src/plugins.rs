//! Standard entity-kind plugins
//!
//! The four built-in kinds of a household plan. Assets are the balance
//! holders; income, expense, and liability plugins all declare a
//! dependency on assets because their effects credit or debit a linked
//! asset balance.
//!
//! Balance conventions: asset balances are deliberately not clamped on
//! withdrawal, so an over-drawn account shows up as a negative balance in
//! the projection instead of being hidden. Liability balances never go
//! below zero; repayments beyond the outstanding principal stop reducing
//! the debt.

use crate::error::RegistryError;
use crate::model::{EntityKind, GroupId, Record, Source, SourceMeta};
use crate::plugin::{EntityPlugin, MonthlyContext, PostMonthlyContext};
use crate::registry::PluginRegistry;

/// Months per year, used to derive the monthly compounding rate.
const MONTHS_PER_YEAR: f64 = 12.0;

/// Savings and investment accounts: tracked balance, contributions and
/// withdrawals, monthly-compounded interest.
#[derive(Debug)]
pub struct AssetPlugin;

impl EntityPlugin for AssetPlugin {
    fn kind(&self) -> EntityKind {
        EntityKind::Asset
    }

    fn create_sources(&self, record: &Record) -> Vec<Source> {
        let Record::Asset(r) = record else {
            return Vec::new();
        };
        vec![Source {
            id: r.id,
            name: r.name.clone(),
            kind: EntityKind::Asset,
            inflows: r.contributions.clone(),
            outflows: r.withdrawals.clone(),
            meta: SourceMeta {
                opening_balance: Some(r.opening_balance),
                annual_rate: (r.annual_rate != 0.0).then_some(r.annual_rate),
                linked_asset: None,
                group: r.group,
            },
        }]
    }

    fn initial_balance(&self, source: &Source) -> Option<f64> {
        source.meta.opening_balance
    }

    fn apply_monthly_effect(&self, cx: &mut MonthlyContext<'_>) {
        // Contributions raise the balance, withdrawals lower it; no clamp.
        cx.balances
            .add(EntityKind::Asset, cx.source.id, cx.change.net());
    }

    fn post_monthly_process(&self, cx: &mut PostMonthlyContext<'_>) {
        // Interest compounds monthly on the current balance, inclusive of
        // this month's contributions and withdrawals.
        for source in cx.sources.iter().filter(|s| s.kind == EntityKind::Asset) {
            let Some(rate) = source.meta.annual_rate else {
                continue;
            };
            let Some(balance) = cx.balances.balance(EntityKind::Asset, source.id) else {
                continue;
            };
            let interest = balance * rate / MONTHS_PER_YEAR;
            if interest != 0.0 {
                cx.balances.add(EntityKind::Asset, source.id, interest);
                cx.inflows.add(&source.name, interest);
            }
        }
    }

    fn group_id(&self, record: &Record) -> Option<GroupId> {
        record.group()
    }
}

/// Recurring income, optionally deposited into an asset.
#[derive(Debug)]
pub struct IncomePlugin;

impl EntityPlugin for IncomePlugin {
    fn kind(&self) -> EntityKind {
        EntityKind::Income
    }

    fn dependencies(&self) -> &[EntityKind] {
        &[EntityKind::Asset]
    }

    fn create_sources(&self, record: &Record) -> Vec<Source> {
        let Record::Income(r) = record else {
            return Vec::new();
        };
        vec![Source {
            id: r.id,
            name: r.name.clone(),
            kind: EntityKind::Income,
            inflows: r.cycles.clone(),
            outflows: Vec::new(),
            meta: SourceMeta {
                linked_asset: r.deposit_to,
                group: r.group,
                ..SourceMeta::default()
            },
        }]
    }

    fn apply_monthly_effect(&self, cx: &mut MonthlyContext<'_>) {
        cx.inflows.add(&cx.source.name, cx.change.income);
        if let Some(target) = cx.source.meta.linked_asset {
            cx.balances.add(EntityKind::Asset, target, cx.change.income);
        }
    }

    fn group_id(&self, record: &Record) -> Option<GroupId> {
        record.group()
    }
}

/// Recurring expenses, optionally paid out of an asset.
#[derive(Debug)]
pub struct ExpensePlugin;

impl EntityPlugin for ExpensePlugin {
    fn kind(&self) -> EntityKind {
        EntityKind::Expense
    }

    fn dependencies(&self) -> &[EntityKind] {
        &[EntityKind::Asset]
    }

    fn create_sources(&self, record: &Record) -> Vec<Source> {
        let Record::Expense(r) = record else {
            return Vec::new();
        };
        vec![Source {
            id: r.id,
            name: r.name.clone(),
            kind: EntityKind::Expense,
            inflows: Vec::new(),
            outflows: r.cycles.clone(),
            meta: SourceMeta {
                linked_asset: r.pay_from,
                group: r.group,
                ..SourceMeta::default()
            },
        }]
    }

    fn apply_monthly_effect(&self, cx: &mut MonthlyContext<'_>) {
        cx.outflows.add(&cx.source.name, cx.change.expense);
        if let Some(target) = cx.source.meta.linked_asset {
            cx.balances.add(EntityKind::Asset, target, -cx.change.expense);
        }
    }

    fn group_id(&self, record: &Record) -> Option<GroupId> {
        record.group()
    }
}

/// Debts paid down by recurring repayments; the outstanding balance is
/// clamped at zero.
#[derive(Debug)]
pub struct LiabilityPlugin;

impl EntityPlugin for LiabilityPlugin {
    fn kind(&self) -> EntityKind {
        EntityKind::Liability
    }

    fn dependencies(&self) -> &[EntityKind] {
        &[EntityKind::Asset]
    }

    fn create_sources(&self, record: &Record) -> Vec<Source> {
        let Record::Liability(r) = record else {
            return Vec::new();
        };
        vec![Source {
            id: r.id,
            name: r.name.clone(),
            kind: EntityKind::Liability,
            inflows: Vec::new(),
            outflows: r.repayments.clone(),
            meta: SourceMeta {
                opening_balance: Some(r.principal),
                linked_asset: r.pay_from,
                group: r.group,
                ..SourceMeta::default()
            },
        }]
    }

    fn initial_balance(&self, source: &Source) -> Option<f64> {
        source.meta.opening_balance
    }

    fn apply_monthly_effect(&self, cx: &mut MonthlyContext<'_>) {
        let repayment = cx.change.expense;
        let outstanding = cx
            .balances
            .balance(EntityKind::Liability, cx.source.id)
            .unwrap_or(0.0);
        cx.balances.set_balance(
            EntityKind::Liability,
            cx.source.id,
            (outstanding - repayment).max(0.0),
        );

        cx.outflows.add(&cx.source.name, repayment);
        if let Some(funding) = cx.source.meta.linked_asset {
            cx.balances.add(EntityKind::Asset, funding, -repayment);
        }
    }

    fn group_id(&self, record: &Record) -> Option<GroupId> {
        record.group()
    }
}

/// Registry with the four standard plugins, registered in dependency order.
pub fn standard_registry() -> Result<PluginRegistry, RegistryError> {
    let mut registry = PluginRegistry::new();
    registry.register(Box::new(AssetPlugin))?;
    registry.register(Box::new(IncomePlugin))?;
    registry.register(Box::new(ExpensePlugin))?;
    registry.register(Box::new(LiabilityPlugin))?;
    Ok(registry)
}
