//! Wizard data model shared by the catalog, the controller, the REST layer
//! and the HTTP client.

mod module;
mod phase;
mod plan;

pub use module::{Module, Step};
pub use phase::Phase;
pub use plan::{MigrationPlan, MigrationStepSummary, OverallStatus};
