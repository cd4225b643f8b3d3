//! OpenAPI specification builder using utoipa.

use axum::Json;
use utoipa::OpenApi;

use crate::rest::dto::{
    BlueprintRequest, BlueprintResponse, HealthResponse, PhasesResponse, PlanRequest,
    ProceedRequest, ProceedResponse, StepModulesResponse, StepResponse,
};
use crate::rest::error::ErrorResponse;
use crate::types::{MigrationPlan, MigrationStepSummary, Module, OverallStatus, Phase, Step};

/// OpenAPI documentation for the mock migration API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Migration Wizard API",
        description = "Mock migration engine serving static plans, steps and module catalogs.",
        license(name = "MIT")
    ),
    paths(
        crate::rest::routes::health::health,
        crate::rest::routes::migration::plan,
        crate::rest::routes::migration::proceed,
        crate::rest::routes::migration::step,
        crate::rest::routes::migration::step_modules,
        crate::rest::routes::migration::phases,
        crate::rest::routes::migration::blueprint,
    ),
    components(
        schemas(
            // Domain types
            Phase,
            Module,
            Step,
            MigrationPlan,
            MigrationStepSummary,
            OverallStatus,
            // Response types
            HealthResponse,
            ProceedResponse,
            StepResponse,
            StepModulesResponse,
            PhasesResponse,
            BlueprintResponse,
            ErrorResponse,
            // Request types
            PlanRequest,
            ProceedRequest,
            BlueprintRequest,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Migration", description = "Mock migration plan, step and module endpoints"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Generate the OpenAPI specification as a JSON string
    pub fn json() -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::openapi())
    }

    /// Generate the OpenAPI specification as a YAML string
    pub fn yaml() -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&Self::openapi())
    }
}

/// Serve the OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
