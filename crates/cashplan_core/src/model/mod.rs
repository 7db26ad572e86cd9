mod flow;
mod ids;
mod records;
mod recurrence;
mod results;
mod source;

pub use flow::CashFlowChange;
pub use ids::{CycleId, EntityKind, GroupId, SourceId};
pub use records::{AssetRecord, ExpenseRecord, IncomeRecord, LiabilityRecord, Record};
pub use recurrence::{Cycle, CycleKind, IntervalUnit};
pub use results::{CurrentCashFlow, MonthlySnapshot, SimulationResult};
pub use source::{CashFlowSource, Source, SourceMeta};
