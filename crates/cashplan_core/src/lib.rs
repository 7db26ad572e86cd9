//! Household cash-flow projection library
//!
//! This crate projects a household's cash position forward in monthly steps,
//! combining recurring income, expenses, liability repayments, and
//! interest-bearing assets into a multi-year forecast. It supports:
//! - Recurrence rules (monthly, yearly, custom intervals) with start/end bounds
//! - A generic cash-flow aggregator over heterogeneous sources
//! - Per-entity-kind plugins for balance tracking and cross-entity effects
//!   (e.g. a salary depositing into a savings account)
//! - Monthly interest compounding on asset balances
//! - Deterministic month-by-month projection up to 100 years
//!
//! # Builder DSL
//!
//! Use the fluent builder API for ergonomic plan setup:
//!
//! ```ignore
//! use cashplan_core::config::PlanBuilder;
//! use cashplan_core::model::{AssetRecord, Cycle, CycleId, IncomeRecord, SourceId};
//!
//! let setup = PlanBuilder::new()
//!     .years(10)
//!     .asset(
//!         AssetRecord::new(SourceId(1), "Savings", 1_000_000.0)
//!             .annual_rate(0.02),
//!     )
//!     .income(
//!         IncomeRecord::new(SourceId(2), "Salary")
//!             .cycle(Cycle::monthly(CycleId(1), 300_000.0, 0))
//!             .deposit_to(SourceId(1)),
//!     )
//!     .build()?;
//!
//! let result = setup.run()?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod calculator;
pub mod error;
pub mod evaluate;
pub mod month_math;
pub mod plugin;
pub mod plugins;
pub mod registry;
pub mod simulation;
pub mod simulation_state;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use calculator::Calculator;
pub use config::{Plan, PlanBuilder, SimulationSetup};
pub use registry::PluginRegistry;
pub use simulation::{MAX_SIMULATION_MONTHS, MIN_SIMULATION_MONTHS, Simulator};
