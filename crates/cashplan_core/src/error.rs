use std::fmt;

use crate::model::{CycleId, EntityKind, SourceId};
use crate::simulation::{MAX_SIMULATION_MONTHS, MIN_SIMULATION_MONTHS};

/// Errors raised while evaluating recurrence rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleError {
    /// A custom cycle reached the evaluator with a zero repeat interval.
    InvalidCustomInterval(CycleId),
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleError::InvalidCustomInterval(id) => {
                write!(f, "custom cycle {id:?} has a zero repeat interval")
            }
        }
    }
}

impl std::error::Error for CycleError {}

/// Errors raised by plugin registration and dependency ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// A plugin declared a dependency on a kind that is not registered yet.
    MissingDependency {
        kind: EntityKind,
        missing: EntityKind,
    },
    /// The dependency graph contains a cycle; `kind` is the entity kind
    /// that closed it.
    CircularDependency { kind: EntityKind },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::MissingDependency { kind, missing } => {
                write!(
                    f,
                    "plugin for {kind} depends on {missing}, which is not registered; \
                     register {missing} first"
                )
            }
            RegistryError::CircularDependency { kind } => {
                write!(f, "circular dependency detected at plugin for {kind}")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Errors raised by the simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationError {
    /// Projection length outside the supported range.
    InvalidMonthCount { months: u32 },
    Cycle(CycleError),
    Registry(RegistryError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidMonthCount { months } => {
                write!(
                    f,
                    "simulation length must be between {MIN_SIMULATION_MONTHS} and \
                     {MAX_SIMULATION_MONTHS} months, got {months}"
                )
            }
            SimulationError::Cycle(e) => write!(f, "{e}"),
            SimulationError::Registry(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Cycle(e) => Some(e),
            SimulationError::Registry(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CycleError> for SimulationError {
    fn from(e: CycleError) -> Self {
        SimulationError::Cycle(e)
    }
}

impl From<RegistryError> for SimulationError {
    fn from(e: RegistryError) -> Self {
        SimulationError::Registry(e)
    }
}

/// Errors raised while assembling a plan into a runnable simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanError {
    /// Two records share an id; ids must be unique across the whole plan.
    DuplicateRecordId(SourceId),
    /// A record references an asset that does not exist in the plan.
    UnknownLinkedAsset { record: SourceId, target: SourceId },
    Registry(RegistryError),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::DuplicateRecordId(id) => {
                write!(f, "duplicate record id {id:?} in plan")
            }
            PlanError::UnknownLinkedAsset { record, target } => {
                write!(
                    f,
                    "record {record:?} references asset {target:?}, which is not in the plan"
                )
            }
            PlanError::Registry(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlanError::Registry(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RegistryError> for PlanError {
    fn from(e: RegistryError) -> Self {
        PlanError::Registry(e)
    }
}
