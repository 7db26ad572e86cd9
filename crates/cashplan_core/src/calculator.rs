//! Cash-flow aggregation
//!
//! The [`Calculator`] holds the set of sources participating in a
//! projection and answers per-month totals and per-source breakdowns. It
//! owns nothing but its source list; balance mutation is the simulator's
//! and plugins' job.

use rustc_hash::FxHashMap;

use crate::error::CycleError;
use crate::model::{CashFlowChange, CashFlowSource, Source, SourceId};

/// Per-month cash flow summary with its per-source breakdown.
///
/// Totals are recomputed from the breakdown so the two can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodCashFlow {
    pub month: u32,
    pub total_income: f64,
    pub total_expense: f64,
    pub net_cash_flow: f64,
    pub breakdown: FxHashMap<SourceId, CashFlowChange>,
}

/// Aggregator over named cash-flow sources, generic over the source
/// representation. Iteration order is insertion order and is preserved by
/// replacement, which keeps projection output deterministic.
#[derive(Debug, Clone)]
pub struct Calculator<S = Source> {
    sources: Vec<S>,
}

impl<S: CashFlowSource> Default for Calculator<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CashFlowSource> Calculator<S> {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Upsert by id: replaces an existing source in place, else appends.
    pub fn add_source(&mut self, source: S) {
        match self.sources.iter_mut().find(|s| s.id() == source.id()) {
            Some(slot) => *slot = source,
            None => self.sources.push(source),
        }
    }

    /// No-op if the id is absent.
    pub fn remove_source(&mut self, id: SourceId) {
        self.sources.retain(|s| s.id() != id);
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// The source list in insertion order.
    pub fn sources(&self) -> &[S] {
        &self.sources
    }

    pub fn source_by_id(&self, id: SourceId) -> Option<&S> {
        self.sources.iter().find(|s| s.id() == id)
    }

    /// Sum of every source's cash flow for the month.
    pub fn calculate_total(&self, month: u32) -> Result<CashFlowChange, CycleError> {
        let mut total = CashFlowChange::ZERO;
        for source in &self.sources {
            total += source.calculate(month)?;
        }
        Ok(total)
    }

    /// Per-source cash flow for the month, omitting sources whose change is
    /// exactly zero on both sides. Callers rely on key presence to know
    /// which sources were active.
    pub fn breakdown(&self, month: u32) -> Result<FxHashMap<SourceId, CashFlowChange>, CycleError> {
        let mut breakdown = FxHashMap::default();
        for source in &self.sources {
            let change = source.calculate(month)?;
            if !change.is_zero() {
                breakdown.insert(source.id(), change);
            }
        }
        Ok(breakdown)
    }

    /// Breakdown plus totals for one month.
    pub fn calculate_for_period(&self, month: u32) -> Result<PeriodCashFlow, CycleError> {
        let breakdown = self.breakdown(month)?;
        let total_income: f64 = breakdown.values().map(|c| c.income).sum();
        let total_expense: f64 = breakdown.values().map(|c| c.expense).sum();
        Ok(PeriodCashFlow {
            month,
            total_income,
            total_expense,
            net_cash_flow: total_income - total_expense,
            breakdown,
        })
    }
}

impl<S: CashFlowSource + Clone> Calculator<S> {
    /// Defensive copy of the source list for callers outside the run.
    pub fn sources_cloned(&self) -> Vec<S> {
        self.sources.clone()
    }
}
