//! Terminal wizard state: the controller plus selection and status line.

use crate::types::Module;
use crate::ui::keybindings::Action;
use crate::wizard::{ModuleSource, Wizard};

/// Message shown under the module panes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

impl StatusLine {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// What the event loop must do after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Modules for the active phase must be fetched
    Reload,
    Quit,
}

pub struct WizardApp {
    wizard: Wizard,
    /// Index of the highlighted module
    selected: usize,
    status: Option<StatusLine>,
}

impl WizardApp {
    pub fn new(wizard: Wizard) -> Self {
        Self {
            wizard,
            selected: 0,
            status: None,
        }
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_module(&self) -> Option<&Module> {
        self.wizard.modules().get(self.selected)
    }

    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    fn selected_id(&self) -> Option<String> {
        self.selected_module().map(|m| m.id.clone())
    }

    /// Apply a user action to the wizard
    pub fn apply(&mut self, action: Action) -> Effect {
        match action {
            Action::Quit => return Effect::Quit,
            Action::NextPhase => {
                if !self.wizard.ready_to_advance() {
                    self.status = Some(StatusLine::error(
                        "Complete every module before moving to the next phase",
                    ));
                } else if self.wizard.advance_phase() {
                    return Effect::Reload;
                } else {
                    self.status = Some(StatusLine::info("Migration workflow complete"));
                }
            }
            Action::PreviousPhase => {
                if self.wizard.retreat_phase() {
                    return Effect::Reload;
                }
            }
            Action::SelectNextModule => {
                if self.selected + 1 < self.wizard.modules().len() {
                    self.selected += 1;
                }
            }
            Action::SelectPreviousModule => {
                self.selected = self.selected.saturating_sub(1);
            }
            Action::NextStep => {
                if let Some(id) = self.selected_id() {
                    self.wizard.next_module_step(&id);
                }
            }
            Action::PreviousStep => {
                if let Some(id) = self.selected_id() {
                    self.wizard.previous_module_step(&id);
                }
            }
            Action::CompleteModule => {
                if let Some(id) = self.selected_id() {
                    self.wizard.complete_module(&id);
                    if self.wizard.ready_to_advance() && !self.wizard.is_last_phase() {
                        self.status = Some(StatusLine::info(
                            "All modules complete, press → for the next phase",
                        ));
                    }
                }
            }
            Action::Reload => return Effect::Reload,
        }
        Effect::None
    }

    /// Fetch modules for the active phase and reset the selection
    pub async fn reload<S>(&mut self, source: &S)
    where
        S: ModuleSource + ?Sized,
    {
        self.selected = 0;
        match self.wizard.load_current_phase(source).await {
            Ok(count) => {
                let phase = self
                    .wizard
                    .current_phase()
                    .map(|p| p.name.clone())
                    .unwrap_or_default();
                self.status = Some(StatusLine::info(format!(
                    "{phase}: {count} module(s) from {}",
                    source.name()
                )));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Module load failed");
                self.status = Some(StatusLine::error(e.to_string()));
            }
        }
    }
}
