//! Unique identifiers for projection entities
//!
//! Each entity type has its own ID type to provide type safety and prevent
//! mixing up different kinds of identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a cash-flow source. Record ids double as source
/// ids, so they must be unique across a whole plan, not just within one
/// entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SourceId(pub u16);

/// Unique identifier for a recurrence rule within a source
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CycleId(pub u16);

/// Identifier for a display group of records (e.g. one loan's repayments)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupId(pub u16);

/// The fixed set of financial entity kinds that can participate in a
/// projection. Balance tracking is keyed by kind first, source id second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Asset,
    Income,
    Expense,
    Liability,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Asset,
        EntityKind::Income,
        EntityKind::Expense,
        EntityKind::Liability,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Asset => "asset",
            EntityKind::Income => "income",
            EntityKind::Expense => "expense",
            EntityKind::Liability => "liability",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
