//! Recurrence evaluation
//!
//! Pure functions answering "does this cycle fire in month `m`, and how much
//! money do these cycles move in total". All month arithmetic is on
//! zero-based absolute month offsets; nothing here touches balances.

use crate::error::CycleError;
use crate::model::{Cycle, CycleKind, IntervalUnit};

/// Whether a cycle fires in the given month.
///
/// A cycle is active when the month lies inside its `[start_month,
/// end_month]` window and the month hits the repeat pattern, anchored at
/// `start_month`. Overlapping cycles are evaluated independently; this
/// function never looks at more than one rule.
pub fn is_cycle_active_in_month(cycle: &Cycle, month: u32) -> Result<bool, CycleError> {
    if month < cycle.start_month {
        return Ok(false);
    }
    if let Some(end) = cycle.end_month
        && month > end
    {
        return Ok(false);
    }

    let elapsed = month - cycle.start_month;
    match cycle.kind {
        CycleKind::Monthly => Ok(true),
        CycleKind::Yearly => Ok(elapsed % 12 == 0),
        CycleKind::Custom { every, unit } => {
            if every == 0 {
                // Malformed input reaching the evaluator, not an inactive cycle.
                return Err(CycleError::InvalidCustomInterval(cycle.id));
            }
            let step = match unit {
                IntervalUnit::Month => every,
                IntervalUnit::Year => every * 12,
            };
            Ok(elapsed % step == 0)
        }
    }
}

/// Sum of `amount` over all cycles active in the given month. Cycles that
/// overlap in the same month both contribute.
pub fn calculate_cycles_for_month(cycles: &[Cycle], month: u32) -> Result<f64, CycleError> {
    let mut total = 0.0;
    for cycle in cycles {
        if is_cycle_active_in_month(cycle, month)? {
            total += cycle.amount;
        }
    }
    Ok(total)
}
