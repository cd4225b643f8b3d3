//! Migration plan and recipe step payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A plan produced for a version pair. Held client-side only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MigrationPlan {
    pub source_version: String,
    pub target_version: String,
    pub summary: String,
}

/// One code-transformation recipe step reported by the mock engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MigrationStepSummary {
    pub id: u32,
    pub description: String,
    pub completed: bool,
}

/// Overall status reported alongside recipe steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum OverallStatus {
    Pending,
    InProgress,
    Completed,
}

impl OverallStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OverallStatus::Pending => "pending",
            OverallStatus::InProgress => "in-progress",
            OverallStatus::Completed => "completed",
        }
    }
}
