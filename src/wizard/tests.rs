//! Tests for the wizard state controller

use async_trait::async_trait;

use super::*;
use crate::types::Step;

/// Source that always answers with a server error
struct FailingSource;

#[async_trait]
impl ModuleSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn modules_for_phase(&self, _phase_id: u32) -> Result<Vec<Module>, ClientError> {
        Err(ClientError::Status {
            action: "load modules",
            status: 500,
        })
    }
}

async fn loaded_wizard(phase_id: u32) -> Wizard {
    let mut wizard = Wizard::default();
    wizard
        .load_modules_for_phase(&CatalogSource, phase_id)
        .await
        .unwrap();
    wizard
}

fn two_step_module(id: &str) -> Module {
    Module::new(
        id,
        id,
        "",
        vec![Step::pending("first", ""), Step::pending("second", "")],
    )
}

#[test]
fn test_wizard_starts_on_first_phase_without_modules() {
    let wizard = Wizard::default();
    assert_eq!(wizard.current_phase().unwrap().id, 1);
    assert!(wizard.is_first_phase());
    assert!(!wizard.is_last_phase());
    assert!(wizard.modules().is_empty());
}

#[test]
fn test_advance_phase_stops_at_last() {
    let mut wizard = Wizard::default();
    assert!(wizard.advance_phase());
    assert!(wizard.advance_phase());
    assert_eq!(wizard.current_phase().unwrap().id, 3);
    assert!(wizard.is_last_phase());

    assert!(!wizard.advance_phase());
    assert_eq!(wizard.current_phase().unwrap().id, 3);
}

#[test]
fn test_retreat_phase_stops_at_first() {
    let mut wizard = Wizard::default();
    assert!(!wizard.retreat_phase());
    assert_eq!(wizard.current_phase_index(), 0);

    wizard.advance_phase();
    assert!(wizard.retreat_phase());
    assert_eq!(wizard.current_phase().unwrap().id, 1);
}

#[tokio::test]
async fn test_phase_change_clears_modules() {
    let mut wizard = loaded_wizard(1).await;
    assert!(!wizard.modules().is_empty());
    assert!(wizard.advance_phase());
    assert!(wizard.modules().is_empty());

    wizard.load_current_phase(&CatalogSource).await.unwrap();
    assert!(!wizard.modules().is_empty());
    assert!(wizard.retreat_phase());
    assert!(wizard.modules().is_empty());
}

#[tokio::test]
async fn test_noop_phase_change_keeps_modules() {
    let mut wizard = loaded_wizard(1).await;
    assert!(!wizard.retreat_phase());
    assert_eq!(wizard.modules().len(), 2);
}

#[tokio::test]
async fn test_load_phase_two_modules() {
    let wizard = loaded_wizard(2).await;
    let titles: Vec<&str> = wizard.modules().iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Data Storage", "Data Lifecycle Management"]);
}

#[tokio::test]
async fn test_load_unknown_phase_is_empty() {
    let mut wizard = loaded_wizard(1).await;
    let count = wizard
        .load_modules_for_phase(&CatalogSource, 99)
        .await
        .unwrap();
    assert_eq!(count, 0);
    assert!(wizard.modules().is_empty());
}

#[tokio::test]
async fn test_load_replaces_rather_than_merges() {
    let mut wizard = loaded_wizard(1).await;
    wizard.complete_module("core-infra");

    wizard
        .load_modules_for_phase(&CatalogSource, 1)
        .await
        .unwrap();
    let module = wizard.module("core-infra").unwrap();
    assert_eq!(module.current_step_index(), 0);
    assert!(!module.is_completed());
}

#[tokio::test]
async fn test_failed_load_leaves_no_modules() {
    let mut wizard = loaded_wizard(1).await;
    let err = wizard
        .load_modules_for_phase(&FailingSource, 1)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(wizard.modules().is_empty());
}

#[tokio::test]
async fn test_set_module_step_derives_completion() {
    let mut wizard = loaded_wizard(2).await;
    let step_count = wizard.module("data-storage").unwrap().steps().len();

    for s in 0..step_count {
        assert!(wizard.set_module_step("data-storage", s));
        let module = wizard.module("data-storage").unwrap();
        for (i, step) in module.steps().iter().enumerate() {
            assert_eq!(step.completed, i < s, "cursor {s}, step {i}");
        }
        assert_eq!(module.is_completed(), s == step_count - 1);
    }
}

#[tokio::test]
async fn test_set_module_step_clamps() {
    let mut wizard = loaded_wizard(1).await;
    assert!(wizard.set_module_step("core-infra", 100));
    let module = wizard.module("core-infra").unwrap();
    assert_eq!(module.current_step_index(), module.last_step_index());
    assert!(module.is_completed());
}

#[tokio::test]
async fn test_set_module_step_touches_only_addressed_module() {
    let mut wizard = loaded_wizard(1).await;
    wizard.set_module_step("core-infra", 1);
    let other = wizard.module("cluster-config").unwrap();
    assert_eq!(other.current_step_index(), 0);
}

#[tokio::test]
async fn test_unknown_module_is_ignored() {
    let mut wizard = loaded_wizard(1).await;
    let before = wizard.modules().to_vec();
    assert!(!wizard.set_module_step("no-such-module", 1));
    assert!(!wizard.next_module_step("no-such-module"));
    assert!(!wizard.complete_module("no-such-module"));
    assert_eq!(wizard.modules(), before.as_slice());
}

#[test]
fn test_next_and_previous_stop_at_bounds() {
    let mut wizard = Wizard::default();
    wizard.replace_modules(vec![two_step_module("m")]);

    assert!(!wizard.previous_module_step("m"));
    assert!(wizard.next_module_step("m"));
    assert!(!wizard.next_module_step("m"));
    assert_eq!(wizard.module("m").unwrap().current_step_index(), 1);

    assert!(wizard.previous_module_step("m"));
    assert_eq!(wizard.module("m").unwrap().current_step_index(), 0);
}

#[test]
fn test_ready_to_advance_requires_all_modules_completed() {
    let mut wizard = Wizard::default();
    assert!(!wizard.ready_to_advance());

    wizard.replace_modules(vec![two_step_module("a"), two_step_module("b")]);
    assert!(!wizard.ready_to_advance());

    wizard.complete_module("a");
    assert!(!wizard.ready_to_advance());

    wizard.complete_module("b");
    assert!(wizard.ready_to_advance());
}

#[tokio::test]
async fn test_failed_load_is_not_ready_to_advance() {
    let mut wizard = Wizard::default();
    wizard
        .load_modules_for_phase(&FailingSource, 1)
        .await
        .unwrap_err();
    assert!(!wizard.ready_to_advance());
}

#[test]
fn test_empty_phase_catalog() {
    let mut wizard = Wizard::new(vec![]);
    assert!(wizard.current_phase().is_none());
    assert!(!wizard.advance_phase());
    assert!(!wizard.retreat_phase());
}
