//! Plan assembly
//!
//! A [`Plan`] is the serializable description of a household's records plus
//! a projection horizon; [`PlanBuilder`] is the fluent way to put one
//! together in code. Building a plan registers the standard plugins,
//! validates references, and converts every record into its sources.

mod builder;

pub use builder::{DEFAULT_PLAN_MONTHS, Plan, PlanBuilder, SimulationSetup};
