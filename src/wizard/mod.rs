//! Wizard state controller.
//!
//! Tracks the active phase and the modules loaded for it. Each module owns
//! its step cursor; completion flags are always derived from that cursor.
//! Out-of-range phase moves and unknown module ids are silent no-ops.

use crate::api::ClientError;
use crate::catalog;
use crate::types::{Module, Phase};

pub mod source;

pub use source::{CatalogSource, ModuleSource};

#[cfg(test)]
mod tests;

/// Phase cursor plus the module list for the active phase
#[derive(Debug, Clone)]
pub struct Wizard {
    phases: Vec<Phase>,
    /// Index into `phases`
    current: usize,
    modules: Vec<Module>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(catalog::phases())
    }
}

impl Wizard {
    /// Start on the first of the given phases with no modules loaded
    pub fn new(phases: Vec<Phase>) -> Self {
        Self {
            phases,
            current: 0,
            modules: Vec::new(),
        }
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// The active phase, `None` only for an empty phase catalog
    pub fn current_phase(&self) -> Option<&Phase> {
        self.phases.get(self.current)
    }

    /// 0-based position of the active phase
    pub fn current_phase_index(&self) -> usize {
        self.current
    }

    pub fn is_first_phase(&self) -> bool {
        self.current == 0
    }

    pub fn is_last_phase(&self) -> bool {
        self.current + 1 >= self.phases.len()
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn module(&self, module_id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == module_id)
    }

    /// True once modules are loaded and every one has been completed.
    ///
    /// An empty list (nothing loaded yet, or a failed load) never qualifies.
    pub fn ready_to_advance(&self) -> bool {
        !self.modules.is_empty() && self.modules.iter().all(Module::is_completed)
    }

    /// Move to the next phase and clear modules. No-op on the last phase.
    pub fn advance_phase(&mut self) -> bool {
        if self.is_last_phase() {
            tracing::debug!(phase = self.current + 1, "Already on last phase");
            return false;
        }
        self.current += 1;
        self.modules.clear();
        tracing::info!(phase = self.current + 1, "Advanced phase");
        true
    }

    /// Move to the previous phase and clear modules. No-op on the first phase.
    pub fn retreat_phase(&mut self) -> bool {
        if self.is_first_phase() {
            tracing::debug!("Already on first phase");
            return false;
        }
        self.current -= 1;
        self.modules.clear();
        tracing::info!(phase = self.current + 1, "Retreated phase");
        true
    }

    /// Move a module's cursor, clamped to its last step.
    ///
    /// Returns false when no loaded module has that id.
    pub fn set_module_step(&mut self, module_id: &str, step_index: usize) -> bool {
        let Some(module) = self.modules.iter_mut().find(|m| m.id == module_id) else {
            tracing::debug!(module_id, "Ignoring step change for unknown module");
            return false;
        };

        let applied = module.set_current_step(step_index);
        tracing::debug!(
            module_id,
            requested = step_index,
            applied,
            completed = module.is_completed(),
            "Module step changed"
        );
        true
    }

    /// Advance a module one step, stopping at its last step
    pub fn next_module_step(&mut self, module_id: &str) -> bool {
        match self.module(module_id) {
            Some(module) if !module.is_on_last_step() => {
                let next = module.current_step_index() + 1;
                self.set_module_step(module_id, next)
            }
            _ => false,
        }
    }

    /// Move a module back one step, stopping at its first step
    pub fn previous_module_step(&mut self, module_id: &str) -> bool {
        match self.module(module_id) {
            Some(module) if !module.is_on_first_step() => {
                let previous = module.current_step_index() - 1;
                self.set_module_step(module_id, previous)
            }
            _ => false,
        }
    }

    /// Jump a module to its last step, marking it completed
    pub fn complete_module(&mut self, module_id: &str) -> bool {
        match self.module(module_id) {
            Some(module) => {
                let last = module.last_step_index();
                self.set_module_step(module_id, last)
            }
            None => false,
        }
    }

    /// Replace the module list wholesale
    pub fn replace_modules(&mut self, modules: Vec<Module>) {
        self.modules = modules;
    }

    /// Fetch the catalog for a phase and replace the module list.
    ///
    /// On failure the module list is left empty and the error returned.
    pub async fn load_modules_for_phase<S>(
        &mut self,
        source: &S,
        phase_id: u32,
    ) -> Result<usize, ClientError>
    where
        S: ModuleSource + ?Sized,
    {
        self.modules.clear();
        let modules = source.modules_for_phase(phase_id).await?;
        let count = modules.len();
        tracing::info!(phase_id, count, source = source.name(), "Loaded modules");
        self.replace_modules(modules);
        Ok(count)
    }

    /// Convenience: load modules for whichever phase is active
    pub async fn load_current_phase<S>(&mut self, source: &S) -> Result<usize, ClientError>
    where
        S: ModuleSource + ?Sized,
    {
        match self.current_phase().map(|p| p.id) {
            Some(phase_id) => self.load_modules_for_phase(source, phase_id).await,
            None => {
                self.modules.clear();
                Ok(0)
            }
        }
    }
}
