//! Where the wizard gets its modules from.
//!
//! `CatalogSource` reads the static catalog in-process; `MigrationClient`
//! fetches the same catalog over HTTP. Tests can plug in their own source.

use async_trait::async_trait;

use crate::api::{ClientError, MigrationClient};
use crate::catalog;
use crate::types::Module;

/// Provider of the module catalog for a phase
#[async_trait]
pub trait ModuleSource: Send + Sync {
    /// Short label for status lines and logs
    fn name(&self) -> &str;

    /// Modules for a phase; unknown phases yield an empty list
    async fn modules_for_phase(&self, phase_id: u32) -> Result<Vec<Module>, ClientError>;
}

/// In-process static catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogSource;

#[async_trait]
impl ModuleSource for CatalogSource {
    fn name(&self) -> &str {
        "offline catalog"
    }

    async fn modules_for_phase(&self, phase_id: u32) -> Result<Vec<Module>, ClientError> {
        Ok(catalog::modules_for_phase(phase_id))
    }
}

#[async_trait]
impl ModuleSource for MigrationClient {
    fn name(&self) -> &str {
        self.base_url()
    }

    async fn modules_for_phase(&self, phase_id: u32) -> Result<Vec<Module>, ClientError> {
        self.step_modules(phase_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_catalog_source_matches_catalog() {
        let modules = CatalogSource.modules_for_phase(3).await.unwrap();
        assert_eq!(modules, catalog::modules_for_phase(3));
    }

    #[tokio::test]
    async fn test_catalog_source_unknown_phase() {
        let modules = CatalogSource.modules_for_phase(99).await.unwrap();
        assert!(modules.is_empty());
    }
}
