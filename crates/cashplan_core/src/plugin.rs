//! Entity-kind capability dispatch
//!
//! An [`EntityPlugin`] is the capability bundle that lets one entity kind
//! participate in a projection: converting its domain records into sources,
//! seeding balances, reacting to each source's monthly cash flow, and
//! running an end-of-month pass. Optional capabilities have explicit
//! "not implemented" representations: `initial_balance` returns `None`,
//! the effect hooks default to no-ops.
//!
//! Monthly-effect handlers are free to mutate balances of *any* kind; this
//! is how cross-entity effects like "salary deposits into savings" are
//! expressed without the aggregator knowing about assets.

use crate::model::{CashFlowChange, EntityKind, GroupId, Record, Source};
use crate::simulation_state::{BalanceStore, FlowAccumulator};

/// Context for one (source, nonzero cash-flow) pair in one month
pub struct MonthlyContext<'a> {
    pub month: u32,
    pub source: &'a Source,
    pub change: CashFlowChange,
    pub balances: &'a mut BalanceStore,
    pub inflows: &'a mut FlowAccumulator,
    pub outflows: &'a mut FlowAccumulator,
    /// Full source list of the run, read-only.
    pub sources: &'a [Source],
}

/// Context for a plugin's once-per-month, end-of-month pass
pub struct PostMonthlyContext<'a> {
    pub month: u32,
    pub balances: &'a mut BalanceStore,
    pub inflows: &'a mut FlowAccumulator,
    pub outflows: &'a mut FlowAccumulator,
    pub sources: &'a [Source],
}

/// Capability bundle for one entity kind.
///
/// Registered once per kind in a [`PluginRegistry`]; the registry is built
/// before a run starts and treated as read-only while it executes.
///
/// [`PluginRegistry`]: crate::registry::PluginRegistry
pub trait EntityPlugin: std::fmt::Debug {
    fn kind(&self) -> EntityKind;

    /// Entity kinds whose plugins must be registered before this one and
    /// whose end-of-month passes must run first.
    fn dependencies(&self) -> &[EntityKind] {
        &[]
    }

    /// Convert one domain record into its sources. Records of a foreign
    /// kind yield nothing.
    fn create_sources(&self, record: &Record) -> Vec<Source>;

    /// Opening balance for a source, if this kind tracks one. `None` means
    /// no balance entry is created for the source.
    fn initial_balance(&self, _source: &Source) -> Option<f64> {
        None
    }

    /// React to one source's nonzero cash flow in one month.
    fn apply_monthly_effect(&self, _cx: &mut MonthlyContext<'_>) {}

    /// End-of-month pass over all sources of this kind, run after every
    /// source has been processed, in dependency order.
    fn post_monthly_process(&self, _cx: &mut PostMonthlyContext<'_>) {}

    /// Display group for a record, if the kind groups its records.
    fn group_id(&self, _record: &Record) -> Option<GroupId> {
        None
    }
}
