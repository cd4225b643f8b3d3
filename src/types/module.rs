//! Migration modules and their steps.
//!
//! A module owns an ordered list of steps and a step cursor. Every completion
//! flag is derived from the cursor, so the only way to change progress is
//! through [`Module::set_current_step`].

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single unit of work within a module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Step {
    pub name: String,
    /// True iff this step sits before the owning module's cursor
    pub completed: bool,
    pub instructions: String,
}

impl Step {
    /// Create a step that has not been completed yet
    pub fn pending(name: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            completed: false,
            instructions: instructions.into(),
        }
    }
}

/// A named group of steps belonging to a phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: String,
    pub title: String,
    pub description: String,
    /// 0-based step cursor, always within `[0, steps.len() - 1]`
    current_step: usize,
    /// True iff the cursor sits on the last step
    is_completed: bool,
    steps: Vec<Step>,
}

impl Module {
    /// Create a module with its cursor on the first step
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        steps: Vec<Step>,
    ) -> Self {
        let mut module = Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            current_step: 0,
            is_completed: false,
            steps,
        };
        module.refresh_completion();
        module
    }

    /// Clamp the cursor and recompute derived fields.
    ///
    /// Modules deserialized from the wire carry whatever flags the sender
    /// wrote; this restores the invariants before the module is used.
    pub fn normalized(mut self) -> Self {
        self.current_step = self.current_step.min(self.last_step_index());
        self.refresh_completion();
        self
    }

    pub fn current_step_index(&self) -> usize {
        self.current_step
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The step under the cursor, `None` for a module without steps
    pub fn current_step(&self) -> Option<&Step> {
        self.steps.get(self.current_step)
    }

    /// Index of the last step (0 for an empty module)
    pub fn last_step_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn is_on_first_step(&self) -> bool {
        self.current_step == 0
    }

    pub fn is_on_last_step(&self) -> bool {
        !self.steps.is_empty() && self.current_step == self.last_step_index()
    }

    /// Move the cursor, clamped to the last step.
    ///
    /// Returns the index actually applied.
    pub fn set_current_step(&mut self, index: usize) -> usize {
        self.current_step = index.min(self.last_step_index());
        self.refresh_completion();
        self.current_step
    }

    fn refresh_completion(&mut self) {
        let cursor = self.current_step;
        for (i, step) in self.steps.iter_mut().enumerate() {
            step.completed = i < cursor;
        }
        self.is_completed = self.is_on_last_step();
    }
}
