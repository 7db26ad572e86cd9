//! Projection results
//!
//! Output types from a projection run. Snapshots are produced by the
//! simulator and never mutated afterwards; the charting/aggregation layers
//! consume them as-is. Breakdown maps omit zero entries, so a source id
//! being present means the source was active that month.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ids::{EntityKind, SourceId};

/// One month's snapshot of realized cash flow and running balances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySnapshot {
    /// Zero-based month offset from the start of the projection.
    pub month: u32,
    /// Income per source; sources with zero income this month are absent.
    pub income: HashMap<SourceId, f64>,
    /// Expense per source; sources with zero expense this month are absent.
    pub expense: HashMap<SourceId, f64>,
    /// Labeled inflows recorded by plugins (salary deposits, interest, ...).
    pub inflows: HashMap<String, f64>,
    /// Labeled outflows recorded by plugins (bills, loan repayments, ...).
    pub outflows: HashMap<String, f64>,
    /// Running balances at the end of the month, keyed by entity kind then
    /// source id. An entry exists only if some plugin created it.
    pub balances: HashMap<EntityKind, HashMap<SourceId, f64>>,
}

impl MonthlySnapshot {
    pub fn balance(&self, kind: EntityKind, id: SourceId) -> Option<f64> {
        self.balances.get(&kind)?.get(&id).copied()
    }

    /// Net worth proxy: assets minus liabilities at the end of the month.
    pub fn net_balance(&self) -> f64 {
        let sum = |kind: EntityKind| -> f64 {
            self.balances
                .get(&kind)
                .map(|entries| entries.values().sum())
                .unwrap_or(0.0)
        };
        sum(EntityKind::Asset) - sum(EntityKind::Liability)
    }

    pub fn total_income(&self) -> f64 {
        self.income.values().sum()
    }

    pub fn total_expense(&self) -> f64 {
        self.expense.values().sum()
    }
}

/// Cash flow totals for the first projected month, used by callers to
/// answer "what does a typical month look like right now"
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentCashFlow {
    pub income: f64,
    pub expense: f64,
    pub net: f64,
}

/// Complete results from one projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub monthly: Vec<MonthlySnapshot>,
    pub current_cash_flow: CurrentCashFlow,
    /// True iff there is nonzero current cash flow or at least one tracked
    /// balance; "is there anything to show", not simulation success.
    pub has_data: bool,
}

impl SimulationResult {
    pub fn months(&self) -> usize {
        self.monthly.len()
    }

    /// Balance of one source at the end of a given month.
    pub fn balance_at(&self, month: u32, kind: EntityKind, id: SourceId) -> Option<f64> {
        self.monthly
            .iter()
            .find(|m| m.month == month)
            .and_then(|m| m.balance(kind, id))
    }

    /// Balance of one source at the end of the projection.
    pub fn final_balance(&self, kind: EntityKind, id: SourceId) -> Option<f64> {
        self.monthly.last().and_then(|m| m.balance(kind, id))
    }
}
