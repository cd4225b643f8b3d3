//! Typed HTTP client for the mock migration API.
//!
//! One method per endpoint. Non-2xx answers become [`ClientError::Status`],
//! whose message reads "failed to <action>: HTTP <status>".

use std::time::Duration;

use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;

pub mod error;

pub use error::ClientError;

use crate::config::ClientConfig;
use crate::rest::dto::{
    BlueprintRequest, BlueprintResponse, HealthResponse, PhasesResponse, PlanRequest,
    ProceedRequest, ProceedResponse, StepModulesResponse, StepResponse,
};
use crate::types::{MigrationPlan, Module, Phase};

/// Client for the migration API
#[derive(Clone)]
pub struct MigrationClient {
    http: reqwest::Client,
    base_url: String,
}

impl MigrationClient {
    /// Create a client from configuration
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::with_base_url(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    /// Create a client for an explicit base URL
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let parsed =
            Url::parse(base_url).map_err(|_| ClientError::InvalidBaseUrl(base_url.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| ClientError::Transport {
                action: "build HTTP client",
                source,
            })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        action: &'static str,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|source| ClientError::Transport { action, source })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(action, status = status.as_u16(), "Migration API request failed");
            return Err(ClientError::Status {
                action,
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ClientError::Decode { action, source })
    }

    /// Check that the API is up
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        self.send_json("check API health", self.http.get(self.url("/api/health")))
            .await
    }

    /// Generate a migration plan for a version pair
    pub async fn plan(
        &self,
        source_version: &str,
        target_version: &str,
    ) -> Result<MigrationPlan, ClientError> {
        let body = PlanRequest {
            source_version: source_version.to_string(),
            target_version: target_version.to_string(),
        };
        self.send_json(
            "generate migration plan",
            self.http.post(self.url("/api/migration/plan")).json(&body),
        )
        .await
    }

    /// Proceed from the plan into the wizard
    pub async fn proceed(&self, request: &ProceedRequest) -> Result<ProceedResponse, ClientError> {
        let mut response: ProceedResponse = self
            .send_json(
                "proceed with migration",
                self.http.post(self.url("/api/migration/proceed")).json(request),
            )
            .await?;
        response.modules = normalize(response.modules);
        Ok(response)
    }

    /// Recipe progress and modules for a phase
    pub async fn step(&self, phase_id: u32) -> Result<StepResponse, ClientError> {
        let mut response: StepResponse = self
            .send_json(
                "load migration step",
                self.http
                    .get(self.url(&format!("/api/migration/step/{phase_id}"))),
            )
            .await?;
        response.modules = normalize(response.modules);
        Ok(response)
    }

    /// Modules for a phase, normalized
    pub async fn step_modules(&self, phase_id: u32) -> Result<Vec<Module>, ClientError> {
        let response: StepModulesResponse = self
            .send_json(
                "load modules",
                self.http
                    .get(self.url(&format!("/api/migration/step/{phase_id}/modules"))),
            )
            .await?;
        Ok(normalize(response.modules))
    }

    /// Phase catalog
    pub async fn phases(&self) -> Result<Vec<Phase>, ClientError> {
        let response: PhasesResponse = self
            .send_json(
                "load phases",
                self.http.get(self.url("/api/migration/phases")),
            )
            .await?;
        Ok(response.phases)
    }

    /// Run the blueprint layer migration. The server answers after a delay.
    pub async fn blueprint(
        &self,
        phase_id: u32,
        repo_url: &str,
    ) -> Result<BlueprintResponse, ClientError> {
        let body = BlueprintRequest {
            repo_url: repo_url.to_string(),
        };
        let mut response: BlueprintResponse = self
            .send_json(
                "run blueprint migration",
                self.http
                    .post(self.url(&format!("/api/migration/blueprint/{phase_id}")))
                    .json(&body),
            )
            .await?;
        response.modules = normalize(response.modules);
        Ok(response)
    }
}

fn normalize(modules: Vec<Module>) -> Vec<Module> {
    modules.into_iter().map(Module::normalized).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_from_default_config() {
        let client = MigrationClient::new(&ClientConfig::default()).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:7008");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client =
            MigrationClient::with_base_url("http://localhost:9000/", Duration::from_secs(1))
                .unwrap();
        assert_eq!(client.url("/api/health"), "http://localhost:9000/api/health");
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let err = MigrationClient::with_base_url("not a url", Duration::from_secs(1))
            .err()
            .unwrap();
        assert!(matches!(err, ClientError::InvalidBaseUrl(_)));

        let err = MigrationClient::with_base_url("ftp://example.com", Duration::from_secs(1))
            .err()
            .unwrap();
        assert!(matches!(err, ClientError::InvalidBaseUrl(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            MigrationClient::with_base_url(&format!("http://{addr}"), Duration::from_secs(2))
                .unwrap();
        let err = client.step_modules(1).await.unwrap_err();
        assert!(matches!(err, ClientError::Transport { .. }));
        assert!(err.to_string().starts_with("failed to load modules"));
    }
}
