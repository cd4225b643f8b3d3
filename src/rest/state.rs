//! Shared state for the REST server.
//!
//! The mock engine holds no mutable state; every response is rebuilt from the
//! static catalog. Only immutable settings are shared across requests.

use std::time::Duration;

use crate::config::Config;

/// Shared state for the REST API
#[derive(Clone)]
pub struct ApiState {
    /// Artificial delay applied by the blueprint endpoint
    pub blueprint_delay: Duration,
}

impl ApiState {
    /// Create new API state from config
    pub fn new(config: &Config) -> Self {
        Self {
            blueprint_delay: config.blueprint_delay(),
        }
    }

    /// Override the blueprint delay
    pub fn with_blueprint_delay(mut self, delay: Duration) -> Self {
        self.blueprint_delay = delay;
        self
    }
}
