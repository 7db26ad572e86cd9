//! Cash-flow sources
//!
//! One [`Source`] is produced per domain record by the owning plugin's
//! `create_sources`. Sources are created fresh each time a projection run
//! starts and never mutated: `calculate` is a pure function of the month
//! index plus the source's own data.

use crate::error::CycleError;
use crate::evaluate::calculate_cycles_for_month;

use super::flow::CashFlowChange;
use super::ids::{EntityKind, GroupId, SourceId};
use super::recurrence::Cycle;

/// The contract the aggregator needs from a cash-flow source. Kept as a
/// trait so callers can aggregate over representations other than the
/// record-backed [`Source`].
pub trait CashFlowSource {
    fn id(&self) -> SourceId;
    fn name(&self) -> &str;
    fn kind(&self) -> EntityKind;
    /// Realized cash flow for one month. Must not mutate shared state;
    /// balance mutation belongs to the plugins, not the source.
    fn calculate(&self, month: u32) -> Result<CashFlowChange, CycleError>;
}

/// Extra per-source data carried from the domain record for the owning
/// plugin's use. Absent fields mean the capability is simply not used
/// (an asset without `annual_rate` earns no interest).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceMeta {
    /// Opening balance, for kinds that track one.
    pub opening_balance: Option<f64>,
    /// Yearly interest rate, compounded monthly at `annual_rate / 12`.
    pub annual_rate: Option<f64>,
    /// Asset this source deposits into or draws from.
    pub linked_asset: Option<SourceId>,
    pub group: Option<GroupId>,
}

/// One financial entity's month-indexed cash-flow generator
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    pub id: SourceId,
    pub name: String,
    pub kind: EntityKind,
    /// Cycles contributing to the income side.
    pub inflows: Vec<Cycle>,
    /// Cycles contributing to the expense side.
    pub outflows: Vec<Cycle>,
    pub meta: SourceMeta,
}

impl Source {
    pub fn new(id: SourceId, name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            inflows: Vec::new(),
            outflows: Vec::new(),
            meta: SourceMeta::default(),
        }
    }
}

impl CashFlowSource for Source {
    fn id(&self) -> SourceId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> EntityKind {
        self.kind
    }

    fn calculate(&self, month: u32) -> Result<CashFlowChange, CycleError> {
        Ok(CashFlowChange {
            income: calculate_cycles_for_month(&self.inflows, month)?,
            expense: calculate_cycles_for_month(&self.outflows, month)?,
        })
    }
}
