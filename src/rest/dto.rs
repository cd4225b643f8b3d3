//! Data Transfer Objects for the REST API.
//!
//! The same types are used by the HTTP client, so the wire format lives in
//! exactly one place. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::types::{MigrationStepSummary, Module, OverallStatus, Phase};

// =============================================================================
// Health
// =============================================================================

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

// =============================================================================
// Plan
// =============================================================================

/// Request a migration plan for a version pair
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub source_version: String,
    pub target_version: String,
}

/// Wizard form submitted when proceeding from the plan.
///
/// All fields are optional; the mock engine only echoes the versions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProceedRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_layer_repo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_layer_repo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_layer_repo_url: Option<String>,
}

/// Modules of the first phase, plus the plan summary when versions were given
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProceedResponse {
    pub modules: Vec<Module>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migration_summary: Option<String>,
}

// =============================================================================
// Steps and modules
// =============================================================================

/// Recipe progress and modules for a phase
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StepResponse {
    pub steps: Vec<MigrationStepSummary>,
    pub status_message: String,
    pub overall_status: OverallStatus,
    pub modules: Vec<Module>,
}

/// Modules for a phase
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StepModulesResponse {
    pub modules: Vec<Module>,
}

/// Phase catalog
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PhasesResponse {
    pub phases: Vec<Phase>,
}

// =============================================================================
// Blueprint
// =============================================================================

/// Run the blueprint layer migration against a repository
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintRequest {
    pub repo_url: String,
}

/// Blueprint run result with links to the generated changes
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintResponse {
    pub steps: Vec<MigrationStepSummary>,
    pub status_message: String,
    pub overall_status: OverallStatus,
    pub sourcegraph_link: String,
    pub pull_request_link: String,
    pub modules: Vec<Module>,
}
