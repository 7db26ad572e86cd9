//! Domain records
//!
//! Records are what the user edits: one per asset, income, expense, or
//! liability. The plugin layer converts them into [`Source`]s when a
//! projection run starts. Record ids become source ids, so they must be
//! unique across the whole plan.
//!
//! [`Source`]: super::source::Source

use serde::{Deserialize, Serialize};

use super::ids::{EntityKind, GroupId, SourceId};
use super::recurrence::Cycle;

/// A savings or investment account holding a balance that can earn
/// monthly-compounded interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub id: SourceId,
    pub name: String,
    pub opening_balance: f64,
    /// Yearly return rate; 0.0 means the balance does not grow.
    #[serde(default)]
    pub annual_rate: f64,
    /// Deposits into the asset.
    #[serde(default)]
    pub contributions: Vec<Cycle>,
    /// Withdrawals out of the asset.
    #[serde(default)]
    pub withdrawals: Vec<Cycle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupId>,
}

impl AssetRecord {
    pub fn new(id: SourceId, name: impl Into<String>, opening_balance: f64) -> Self {
        Self {
            id,
            name: name.into(),
            opening_balance,
            annual_rate: 0.0,
            contributions: Vec::new(),
            withdrawals: Vec::new(),
            group: None,
        }
    }

    pub fn annual_rate(mut self, rate: f64) -> Self {
        self.annual_rate = rate;
        self
    }

    pub fn contribution(mut self, cycle: Cycle) -> Self {
        self.contributions.push(cycle);
        self
    }

    pub fn withdrawal(mut self, cycle: Cycle) -> Self {
        self.withdrawals.push(cycle);
        self
    }

    pub fn group(mut self, group: GroupId) -> Self {
        self.group = Some(group);
        self
    }
}

/// Recurring money coming into the household
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeRecord {
    pub id: SourceId,
    pub name: String,
    #[serde(default)]
    pub cycles: Vec<Cycle>,
    /// Asset the income is deposited into, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit_to: Option<SourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupId>,
}

impl IncomeRecord {
    pub fn new(id: SourceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cycles: Vec::new(),
            deposit_to: None,
            group: None,
        }
    }

    pub fn cycle(mut self, cycle: Cycle) -> Self {
        self.cycles.push(cycle);
        self
    }

    pub fn deposit_to(mut self, asset: SourceId) -> Self {
        self.deposit_to = Some(asset);
        self
    }

    pub fn group(mut self, group: GroupId) -> Self {
        self.group = Some(group);
        self
    }
}

/// Recurring money leaving the household
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: SourceId,
    pub name: String,
    #[serde(default)]
    pub cycles: Vec<Cycle>,
    /// Asset the expense is paid from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_from: Option<SourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupId>,
}

impl ExpenseRecord {
    pub fn new(id: SourceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cycles: Vec::new(),
            pay_from: None,
            group: None,
        }
    }

    pub fn cycle(mut self, cycle: Cycle) -> Self {
        self.cycles.push(cycle);
        self
    }

    pub fn pay_from(mut self, asset: SourceId) -> Self {
        self.pay_from = Some(asset);
        self
    }

    pub fn group(mut self, group: GroupId) -> Self {
        self.group = Some(group);
        self
    }
}

/// A debt with an outstanding principal paid down by recurring repayments.
/// The tracked balance never goes below zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiabilityRecord {
    pub id: SourceId,
    pub name: String,
    pub principal: f64,
    #[serde(default)]
    pub repayments: Vec<Cycle>,
    /// Asset the repayments are drawn from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_from: Option<SourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupId>,
}

impl LiabilityRecord {
    pub fn new(id: SourceId, name: impl Into<String>, principal: f64) -> Self {
        Self {
            id,
            name: name.into(),
            principal,
            repayments: Vec::new(),
            pay_from: None,
            group: None,
        }
    }

    pub fn repayment(mut self, cycle: Cycle) -> Self {
        self.repayments.push(cycle);
        self
    }

    pub fn pay_from(mut self, asset: SourceId) -> Self {
        self.pay_from = Some(asset);
        self
    }

    pub fn group(mut self, group: GroupId) -> Self {
        self.group = Some(group);
        self
    }
}

/// Any domain record, tagged by entity kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Asset(AssetRecord),
    Income(IncomeRecord),
    Expense(ExpenseRecord),
    Liability(LiabilityRecord),
}

impl Record {
    pub fn id(&self) -> SourceId {
        match self {
            Record::Asset(r) => r.id,
            Record::Income(r) => r.id,
            Record::Expense(r) => r.id,
            Record::Liability(r) => r.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Record::Asset(r) => &r.name,
            Record::Income(r) => &r.name,
            Record::Expense(r) => &r.name,
            Record::Liability(r) => &r.name,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Record::Asset(_) => EntityKind::Asset,
            Record::Income(_) => EntityKind::Income,
            Record::Expense(_) => EntityKind::Expense,
            Record::Liability(_) => EntityKind::Liability,
        }
    }

    pub fn group(&self) -> Option<GroupId> {
        match self {
            Record::Asset(r) => r.group,
            Record::Income(r) => r.group,
            Record::Expense(r) => r.group,
            Record::Liability(r) => r.group,
        }
    }
}
