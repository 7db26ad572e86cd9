//! Month-by-month projection
//!
//! The [`Simulator`] orchestrates one run: seed balances, then for each
//! month realize cash flow through the calculator, dispatch each nonzero
//! change to the owning plugin, run every plugin's end-of-month pass in
//! dependency order, and snapshot the state. Months are strictly
//! sequential: month `m + 1` depends on the balance store as month `m`
//! left it.

use std::collections::HashMap;

use crate::calculator::Calculator;
use crate::error::SimulationError;
use crate::model::{CurrentCashFlow, MonthlySnapshot, SimulationResult, Source};
use crate::plugin::{MonthlyContext, PostMonthlyContext};
use crate::registry::PluginRegistry;
use crate::simulation_state::{BalanceStore, FlowAccumulator};

pub const MIN_SIMULATION_MONTHS: u32 = 1;
/// 100 years; bounds the work of one run.
pub const MAX_SIMULATION_MONTHS: u32 = 1200;

/// One projection run over a populated calculator and a validated registry.
///
/// `simulate()` is idempotent and side-effect-free on its inputs: the
/// calculator and registry are read, never mutated, and all working state
/// lives inside the call.
#[derive(Debug)]
pub struct Simulator<'a> {
    calculator: &'a Calculator<Source>,
    registry: &'a PluginRegistry,
    months: u32,
}

impl<'a> Simulator<'a> {
    /// Fails fast when `months` is outside `[1, 1200]`.
    pub fn new(
        calculator: &'a Calculator<Source>,
        registry: &'a PluginRegistry,
        months: u32,
    ) -> Result<Self, SimulationError> {
        if !(MIN_SIMULATION_MONTHS..=MAX_SIMULATION_MONTHS).contains(&months) {
            return Err(SimulationError::InvalidMonthCount { months });
        }
        Ok(Self {
            calculator,
            registry,
            months,
        })
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    pub fn simulate(&self) -> Result<SimulationResult, SimulationError> {
        let sources = self.calculator.sources();
        tracing::debug!(
            months = self.months,
            sources = sources.len(),
            "starting projection"
        );

        let mut balances = BalanceStore::new();
        for source in sources {
            match self.registry.get(source.kind) {
                Some(plugin) => {
                    if let Some(opening) = plugin.initial_balance(source) {
                        balances.set_balance(source.kind, source.id, opening);
                    }
                }
                None => {
                    // Cash flow is still reported for this source, but no
                    // balance tracking or monthly effects apply.
                    tracing::warn!(
                        kind = %source.kind,
                        source = %source.name,
                        "no plugin registered for source kind"
                    );
                }
            }
        }

        let post_order = self.registry.sorted()?;

        let mut monthly = Vec::with_capacity(self.months as usize);
        for month in 0..self.months {
            let breakdown = self.calculator.breakdown(month)?;
            let mut inflows = FlowAccumulator::new();
            let mut outflows = FlowAccumulator::new();
            let mut income = HashMap::new();
            let mut expense = HashMap::new();

            // Sources process in calculator insertion order, not map order,
            // to keep the run deterministic.
            for source in sources {
                let Some(&change) = breakdown.get(&source.id) else {
                    continue;
                };

                if let Some(plugin) = self.registry.get(source.kind) {
                    let mut cx = MonthlyContext {
                        month,
                        source,
                        change,
                        balances: &mut balances,
                        inflows: &mut inflows,
                        outflows: &mut outflows,
                        sources,
                    };
                    plugin.apply_monthly_effect(&mut cx);
                }

                // The raw change is recorded whether or not a plugin
                // handled it, so unplugged sources still show up in
                // reporting.
                if change.income != 0.0 {
                    income.insert(source.id, change.income);
                }
                if change.expense != 0.0 {
                    expense.insert(source.id, change.expense);
                }
            }

            for plugin in &post_order {
                let mut cx = PostMonthlyContext {
                    month,
                    balances: &mut balances,
                    inflows: &mut inflows,
                    outflows: &mut outflows,
                    sources,
                };
                plugin.post_monthly_process(&mut cx);
            }

            monthly.push(MonthlySnapshot {
                month,
                income,
                expense,
                inflows: inflows.into_map(),
                outflows: outflows.into_map(),
                balances: balances.snapshot(),
            });
        }

        let current = self.calculator.calculate_for_period(0)?;
        let has_data =
            current.total_income != 0.0 || current.total_expense != 0.0 || !balances.is_empty();

        Ok(SimulationResult {
            monthly,
            current_cash_flow: CurrentCashFlow {
                income: current.total_income,
                expense: current.total_expense,
                net: current.net_cash_flow,
            },
            has_data,
        })
    }
}
