//! Plan builder
//!
//! The builder collects domain records and a horizon, then `build()` turns
//! them into a runnable [`SimulationSetup`]: standard plugins registered in
//! dependency order, every record converted to sources through its
//! plugin's `create_sources`, and referential integrity checked loudly up
//! front.
//!
//! # Example
//!
//! ```ignore
//! use cashplan_core::config::PlanBuilder;
//! use cashplan_core::model::{AssetRecord, Cycle, CycleId, ExpenseRecord, IncomeRecord, SourceId};
//!
//! let setup = PlanBuilder::new()
//!     .years(30)
//!     .asset(AssetRecord::new(SourceId(1), "Savings", 2_000_000.0).annual_rate(0.015))
//!     .income(
//!         IncomeRecord::new(SourceId(2), "Salary")
//!             .cycle(Cycle::monthly(CycleId(1), 320_000.0, 0))
//!             .deposit_to(SourceId(1)),
//!     )
//!     .expense(
//!         ExpenseRecord::new(SourceId(3), "Rent")
//!             .cycle(Cycle::monthly(CycleId(2), 95_000.0, 0))
//!             .pay_from(SourceId(1)),
//!     )
//!     .build()?;
//! let result = setup.run()?;
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::calculator::Calculator;
use crate::error::{PlanError, SimulationError};
use crate::model::{
    AssetRecord, ExpenseRecord, IncomeRecord, LiabilityRecord, Record, SimulationResult, Source,
    SourceId,
};
use crate::plugins::standard_registry;
use crate::registry::PluginRegistry;
use crate::simulation::Simulator;

/// 30 years; the horizon used when a plan does not specify one.
pub const DEFAULT_PLAN_MONTHS: u32 = 360;

fn default_months() -> u32 {
    DEFAULT_PLAN_MONTHS
}

/// Serializable description of a household plan: the records to project
/// and the projection horizon in months
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default = "default_months")]
    pub months: u32,
    /// Calendar month the projection's month 0 corresponds to, for
    /// display layers; the core itself only sees month offsets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<jiff::civil::Date>,
    #[serde(default)]
    pub records: Vec<Record>,
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            months: DEFAULT_PLAN_MONTHS,
            start: None,
            records: Vec::new(),
        }
    }
}

impl Plan {
    /// Validate the plan and assemble it into a runnable setup.
    pub fn build(&self) -> Result<SimulationSetup, PlanError> {
        let mut seen = FxHashSet::default();
        for record in &self.records {
            if !seen.insert(record.id()) {
                return Err(PlanError::DuplicateRecordId(record.id()));
            }
        }

        let asset_ids: FxHashSet<SourceId> = self
            .records
            .iter()
            .filter_map(|r| match r {
                Record::Asset(a) => Some(a.id),
                _ => None,
            })
            .collect();
        for record in &self.records {
            let target = match record {
                Record::Asset(_) => None,
                Record::Income(r) => r.deposit_to,
                Record::Expense(r) => r.pay_from,
                Record::Liability(r) => r.pay_from,
            };
            if let Some(target) = target
                && !asset_ids.contains(&target)
            {
                return Err(PlanError::UnknownLinkedAsset {
                    record: record.id(),
                    target,
                });
            }
        }

        let registry = standard_registry()?;
        let mut calculator = Calculator::new();
        for record in &self.records {
            // Every record kind has a standard plugin, so the lookup cannot
            // miss here; a kind without a plugin would simply contribute no
            // sources.
            if let Some(plugin) = registry.get(record.kind()) {
                for source in plugin.create_sources(record) {
                    calculator.add_source(source);
                }
            }
        }

        Ok(SimulationSetup {
            calculator,
            registry,
            months: self.months,
        })
    }
}

/// Fluent builder over [`Plan`]
#[derive(Debug, Clone, Default)]
pub struct PlanBuilder {
    plan: Plan,
}

impl PlanBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn months(mut self, months: u32) -> Self {
        self.plan.months = months;
        self
    }

    pub fn years(mut self, years: u32) -> Self {
        self.plan.months = years * 12;
        self
    }

    pub fn start(mut self, year: i16, month: i8, day: i8) -> Self {
        self.plan.start = Some(jiff::civil::date(year, month, day));
        self
    }

    pub fn asset(mut self, record: AssetRecord) -> Self {
        self.plan.records.push(Record::Asset(record));
        self
    }

    pub fn income(mut self, record: IncomeRecord) -> Self {
        self.plan.records.push(Record::Income(record));
        self
    }

    pub fn expense(mut self, record: ExpenseRecord) -> Self {
        self.plan.records.push(Record::Expense(record));
        self
    }

    pub fn liability(mut self, record: LiabilityRecord) -> Self {
        self.plan.records.push(Record::Liability(record));
        self
    }

    pub fn record(mut self, record: Record) -> Self {
        self.plan.records.push(record);
        self
    }

    pub fn plan(self) -> Plan {
        self.plan
    }

    pub fn build(self) -> Result<SimulationSetup, PlanError> {
        self.plan.build()
    }
}

/// A validated, populated simulation: calculator, registry, and horizon
#[derive(Debug)]
pub struct SimulationSetup {
    pub calculator: Calculator<Source>,
    pub registry: PluginRegistry,
    pub months: u32,
}

impl SimulationSetup {
    /// Run the projection over this setup's horizon.
    pub fn run(&self) -> Result<SimulationResult, SimulationError> {
        Simulator::new(&self.calculator, &self.registry, self.months)?.simulate()
    }

    /// Run the projection over an explicit horizon.
    pub fn run_for(&self, months: u32) -> Result<SimulationResult, SimulationError> {
        Simulator::new(&self.calculator, &self.registry, months)?.simulate()
    }
}
