//! Recurrence rules
//!
//! A [`Cycle`] describes when and how much money a source moves: an amount,
//! a repeat pattern, and a start/end window expressed in zero-based month
//! offsets from the projection's month 0. Cycles are constructed by the
//! adapter layer from user input and are immutable once handed to the
//! evaluator.

use serde::{Deserialize, Serialize};

use super::ids::CycleId;

/// Unit for a custom repeat interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalUnit {
    Month,
    Year,
}

/// Repeat pattern of a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CycleKind {
    /// Fires every month in range.
    Monthly,
    /// Fires every 12th month, at the same offset as the start month.
    Yearly,
    /// Fires every `every` months or years. `every` must be nonzero; the
    /// evaluator rejects a zero interval as a configuration error rather
    /// than treating the cycle as inactive.
    Custom { every: u32, unit: IntervalUnit },
}

/// A recurrence rule: when and how much money a source moves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cycle {
    pub id: CycleId,
    #[serde(flatten)]
    pub kind: CycleKind,
    /// Zero-based absolute month offset at which the cycle starts firing.
    pub start_month: u32,
    /// Last month (inclusive) the cycle may fire; `None` means open-ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_month: Option<u32>,
    pub amount: f64,
}

impl Cycle {
    pub fn monthly(id: CycleId, amount: f64, start_month: u32) -> Self {
        Self {
            id,
            kind: CycleKind::Monthly,
            start_month,
            end_month: None,
            amount,
        }
    }

    pub fn yearly(id: CycleId, amount: f64, start_month: u32) -> Self {
        Self {
            id,
            kind: CycleKind::Yearly,
            start_month,
            end_month: None,
            amount,
        }
    }

    pub fn every_months(id: CycleId, every: u32, amount: f64, start_month: u32) -> Self {
        Self {
            id,
            kind: CycleKind::Custom {
                every,
                unit: IntervalUnit::Month,
            },
            start_month,
            end_month: None,
            amount,
        }
    }

    pub fn every_years(id: CycleId, every: u32, amount: f64, start_month: u32) -> Self {
        Self {
            id,
            kind: CycleKind::Custom {
                every,
                unit: IntervalUnit::Year,
            },
            start_month,
            end_month: None,
            amount,
        }
    }

    /// Close the cycle at `end_month` (inclusive).
    pub fn until(mut self, end_month: u32) -> Self {
        self.end_month = Some(end_month);
        self
    }
}
