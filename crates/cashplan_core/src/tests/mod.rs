//! Integration tests for the cashplan projection engine
//!
//! Tests are organized by topic:
//! - `cycles` - Recurrence rule evaluation
//! - `calculator` - Cash-flow aggregation and breakdowns
//! - `registry` - Plugin registration and dependency ordering
//! - `simulation` - Month-by-month projection mechanics
//! - `builder_dsl` - Plan builder and end-to-end household scenarios

mod builder_dsl;
mod simulation;
