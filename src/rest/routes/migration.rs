//! Mock migration endpoints.
//!
//! Every handler rebuilds its response from the static catalog. Unknown or
//! non-numeric step ids produce an empty module list rather than an error.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::catalog;
use crate::rest::dto::{
    BlueprintRequest, BlueprintResponse, PhasesResponse, PlanRequest, ProceedRequest,
    ProceedResponse, StepModulesResponse, StepResponse,
};
use crate::rest::error::{ApiError, ErrorResponse};
use crate::rest::state::ApiState;
use crate::types::{MigrationPlan, Module};

/// Phase the wizard starts on after proceeding from the plan
const FIRST_PHASE: u32 = 1;

/// Parse a `:stepId` path segment; anything unparsable maps to no modules
fn parse_step_id(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

fn modules_for_step(raw: &str) -> Vec<Module> {
    parse_step_id(raw)
        .map(catalog::modules_for_phase)
        .unwrap_or_default()
}

/// Generate a migration plan for a version pair
#[utoipa::path(
    post,
    path = "/api/migration/plan",
    tag = "Migration",
    request_body = PlanRequest,
    responses(
        (status = 200, description = "Migration plan", body = MigrationPlan),
        (status = 400, description = "Missing versions", body = ErrorResponse)
    )
)]
pub async fn plan(
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<Json<MigrationPlan>, ApiError> {
    let Json(request) = payload?;

    tracing::info!(
        source = %request.source_version,
        target = %request.target_version,
        "Generating migration plan"
    );

    Ok(Json(catalog::build_plan(
        &request.source_version,
        &request.target_version,
    )))
}

/// Proceed from the plan into the wizard
#[utoipa::path(
    post,
    path = "/api/migration/proceed",
    tag = "Migration",
    request_body = ProceedRequest,
    responses(
        (status = 200, description = "Modules of the first phase", body = ProceedResponse),
        (status = 400, description = "Missing request body", body = ErrorResponse)
    )
)]
pub async fn proceed(
    payload: Result<Json<ProceedRequest>, JsonRejection>,
) -> Result<Json<ProceedResponse>, ApiError> {
    let Json(request) = payload?;

    let migration_summary = match (&request.source_version, &request.target_version) {
        (Some(source), Some(target)) => Some(catalog::plan_summary(source, target)),
        _ => None,
    };

    tracing::info!(
        has_summary = migration_summary.is_some(),
        "Proceeding with migration"
    );

    Ok(Json(ProceedResponse {
        modules: catalog::modules_for_phase(FIRST_PHASE),
        migration_summary,
    }))
}

/// Recipe progress and modules for a phase
#[utoipa::path(
    get,
    path = "/api/migration/step/{stepId}",
    tag = "Migration",
    params(
        ("stepId" = String, Path, description = "Phase id (1-based)")
    ),
    responses(
        (status = 200, description = "Step status and modules", body = StepResponse)
    )
)]
pub async fn step(Path(step_id): Path<String>) -> Json<StepResponse> {
    tracing::debug!(step_id = %step_id, "Fetching step status");

    Json(StepResponse {
        steps: catalog::migration_steps(),
        status_message: catalog::STATUS_MESSAGE.to_string(),
        overall_status: catalog::overall_status(),
        modules: modules_for_step(&step_id),
    })
}

/// Modules for a phase
#[utoipa::path(
    get,
    path = "/api/migration/step/{stepId}/modules",
    tag = "Migration",
    params(
        ("stepId" = String, Path, description = "Phase id (1-based)")
    ),
    responses(
        (status = 200, description = "Modules for the phase (empty when unknown)", body = StepModulesResponse)
    )
)]
pub async fn step_modules(Path(step_id): Path<String>) -> Json<StepModulesResponse> {
    let modules = modules_for_step(&step_id);
    tracing::debug!(step_id = %step_id, count = modules.len(), "Fetching step modules");

    Json(StepModulesResponse { modules })
}

/// Phase catalog
#[utoipa::path(
    get,
    path = "/api/migration/phases",
    tag = "Migration",
    responses(
        (status = 200, description = "All wizard phases in order", body = PhasesResponse)
    )
)]
pub async fn phases() -> Json<PhasesResponse> {
    Json(PhasesResponse {
        phases: catalog::phases(),
    })
}

/// Run the blueprint layer migration for a phase
#[utoipa::path(
    post,
    path = "/api/migration/blueprint/{stepId}",
    tag = "Migration",
    params(
        ("stepId" = String, Path, description = "Phase id (1-based)")
    ),
    request_body = BlueprintRequest,
    responses(
        (status = 200, description = "Blueprint run result", body = BlueprintResponse),
        (status = 400, description = "Missing repository URL", body = ErrorResponse)
    )
)]
pub async fn blueprint(
    State(state): State<ApiState>,
    Path(step_id): Path<String>,
    payload: Result<Json<BlueprintRequest>, JsonRejection>,
) -> Result<Json<BlueprintResponse>, ApiError> {
    let Json(request) = payload?;

    tracing::info!(
        step_id = %step_id,
        repo_url = %request.repo_url,
        delay = ?state.blueprint_delay,
        "Running blueprint migration"
    );

    if !state.blueprint_delay.is_zero() {
        tokio::time::sleep(state.blueprint_delay).await;
    }

    Ok(Json(BlueprintResponse {
        steps: catalog::migration_steps(),
        status_message: catalog::STATUS_MESSAGE.to_string(),
        overall_status: catalog::overall_status(),
        sourcegraph_link: catalog::SOURCEGRAPH_LINK.to_string(),
        pull_request_link: catalog::PULL_REQUEST_LINK.to_string(),
        modules: modules_for_step(&step_id),
    }))
}
