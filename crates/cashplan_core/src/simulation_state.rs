//! Mutable working state for one projection run
//!
//! The balance store and flow accumulators are the only shared mutable
//! state in a run. They are owned by the simulator for the duration of one
//! `simulate()` call, handed to plugins by `&mut` inside context structs,
//! and never escape to concurrent callers.

use std::collections::HashMap;

use rustc_hash::FxHashMap;

use crate::model::{EntityKind, SourceId};

/// Two-level table of running balances, keyed by entity kind then source
/// id. An entry exists only once a plugin creates it, either by seeding an
/// initial balance or through a monthly effect; absence, not zero, is the
/// initial state.
#[derive(Debug, Clone, Default)]
pub struct BalanceStore {
    entries: FxHashMap<EntityKind, FxHashMap<SourceId, f64>>,
}

impl BalanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(|kind| kind.is_empty())
    }

    pub fn balance(&self, kind: EntityKind, id: SourceId) -> Option<f64> {
        self.entries.get(&kind)?.get(&id).copied()
    }

    pub fn set_balance(&mut self, kind: EntityKind, id: SourceId, balance: f64) {
        self.entries.entry(kind).or_default().insert(id, balance);
    }

    /// Add `delta` to a balance, creating the entry at zero if absent.
    pub fn add(&mut self, kind: EntityKind, id: SourceId, delta: f64) {
        *self
            .entries
            .entry(kind)
            .or_default()
            .entry(id)
            .or_insert(0.0) += delta;
    }

    /// Copy of the current contents for a monthly snapshot.
    pub fn snapshot(&self) -> HashMap<EntityKind, HashMap<SourceId, f64>> {
        self.entries
            .iter()
            .filter(|(_, balances)| !balances.is_empty())
            .map(|(kind, balances)| {
                (
                    *kind,
                    balances.iter().map(|(id, value)| (*id, *value)).collect(),
                )
            })
            .collect()
    }
}

/// Labeled amounts accumulated by plugins within one month (e.g. "Savings"
/// interest as an inflow, "Rent" as an outflow). Reset every month.
#[derive(Debug, Clone, Default)]
pub struct FlowAccumulator {
    amounts: FxHashMap<String, f64>,
}

impl FlowAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, label: &str, amount: f64) {
        if amount != 0.0 {
            *self.amounts.entry(label.to_owned()).or_insert(0.0) += amount;
        }
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.amounts.get(label).copied()
    }

    pub fn into_map(self) -> HashMap<String, f64> {
        self.amounts.into_iter().collect()
    }
}
