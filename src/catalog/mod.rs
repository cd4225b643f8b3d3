//! Static migration catalog.
//!
//! Everything the mock migration engine reports comes from the constant
//! tables in this module. Nothing here is computed from outside input except
//! the plan summary, which echoes the requested versions.

use crate::types::{
    MigrationPlan, MigrationStepSummary, Module, OverallStatus, Phase, Step,
};

/// EKS versions offered by the plan form, newest first
pub const EKS_VERSIONS: &[&str] = &["1.27", "1.26", "1.25", "1.24", "1.23", "1.22", "1.21"];

/// True for a version the plan form offers
pub fn is_known_version(version: &str) -> bool {
    EKS_VERSIONS.contains(&version)
}

pub const STATUS_MESSAGE: &str = "All migration steps have been successfully completed.";
pub const SOURCEGRAPH_LINK: &str = "https://sourcegraph.example.com/batch-changes/123";
pub const PULL_REQUEST_LINK: &str = "https://github.com/example/repo/pull/456";

struct PhaseDef {
    id: u32,
    name: &'static str,
    description: &'static str,
}

struct StepDef {
    name: &'static str,
    instructions: &'static str,
}

struct ModuleDef {
    phase: u32,
    id: &'static str,
    title: &'static str,
    description: &'static str,
    steps: &'static [StepDef],
}

const PHASES: &[PhaseDef] = &[
    PhaseDef {
        id: 1,
        name: "Base Layer",
        description: "Networking and cluster foundations",
    },
    PhaseDef {
        id: 2,
        name: "Data Layer",
        description: "Persistent storage and data lifecycle",
    },
    PhaseDef {
        id: 3,
        name: "Integration Layer",
        description: "Service mesh, gateways and blueprint wiring",
    },
];

const MODULES: &[ModuleDef] = &[
    ModuleDef {
        phase: 1,
        id: "core-infra",
        title: "Core Infrastructure",
        description: "Setup and configure core infrastructure components",
        steps: &[
            StepDef {
                name: "VPC Setup",
                instructions: "Configure VPC settings:\n1. Update CIDR blocks\n2. Configure subnets\n3. Set up routing tables",
            },
            StepDef {
                name: "Network Config",
                instructions: "Set up networking:\n1. Configure NAT gateways\n2. Set up internet gateways\n3. Configure route tables",
            },
            StepDef {
                name: "Security Groups",
                instructions: "Configure security:\n1. Define security group rules\n2. Set up NACL policies\n3. Review network policies",
            },
        ],
    },
    ModuleDef {
        phase: 1,
        id: "cluster-config",
        title: "Cluster Configuration",
        description: "Configure EKS cluster settings and components",
        steps: &[
            StepDef {
                name: "Node Groups",
                instructions: "Upgrade node groups:\n1. Create new launch templates\n2. Roll managed node groups\n3. Drain and cordon old nodes",
            },
            StepDef {
                name: "Add-ons",
                instructions: "Update cluster add-ons:\n1. Upgrade VPC CNI\n2. Upgrade CoreDNS\n3. Upgrade kube-proxy",
            },
            StepDef {
                name: "Monitoring",
                instructions: "Verify monitoring:\n1. Check control plane logs\n2. Review node metrics\n3. Confirm alerting rules",
            },
        ],
    },
    ModuleDef {
        phase: 2,
        id: "data-storage",
        title: "Data Storage",
        description: "Configure data persistence and storage solutions",
        steps: &[
            StepDef {
                name: "Volume Setup",
                instructions: "Set up volumes:\n1. Configure EBS settings\n2. Set up volume types\n3. Configure encryption",
            },
            StepDef {
                name: "Storage Class",
                instructions: "Configure storage classes:\n1. Define storage classes\n2. Set up parameters\n3. Configure provisioners",
            },
            StepDef {
                name: "Backup Config",
                instructions: "Set up backups:\n1. Configure backup policies\n2. Set up retention\n3. Test recovery",
            },
        ],
    },
    ModuleDef {
        phase: 2,
        id: "data-lifecycle",
        title: "Data Lifecycle Management",
        description: "Manage retention, archival and cleanup of migrated data",
        steps: &[
            StepDef {
                name: "Retention Policies",
                instructions: "Define retention:\n1. Classify data sets\n2. Set retention periods\n3. Apply lifecycle rules",
            },
            StepDef {
                name: "Archival",
                instructions: "Configure archival:\n1. Choose archive tiers\n2. Schedule snapshot exports\n3. Verify restore paths",
            },
            StepDef {
                name: "Cleanup",
                instructions: "Clean up legacy data:\n1. Identify orphaned volumes\n2. Remove stale snapshots\n3. Audit remaining resources",
            },
        ],
    },
    ModuleDef {
        phase: 3,
        id: "integration-setup",
        title: "Integration Setup",
        description: "Configure integration components and services",
        steps: &[
            StepDef {
                name: "Service Mesh",
                instructions: "Set up service mesh:\n1. Install Istio\n2. Configure sidecars\n3. Set up routing",
            },
            StepDef {
                name: "API Gateway",
                instructions: "Configure API gateway:\n1. Set up routes\n2. Configure SSL\n3. Set up rate limiting",
            },
            StepDef {
                name: "External Services",
                instructions: "Configure external services:\n1. Set up endpoints\n2. Configure authentication\n3. Set up monitoring",
            },
        ],
    },
    ModuleDef {
        phase: 3,
        id: "blueprint-integration",
        title: "Blueprint Integration",
        description: "Integrate with existing blueprint components",
        steps: &[
            StepDef {
                name: "Dependencies",
                instructions: "Resolve dependencies:\n1. Pin blueprint module versions\n2. Update provider constraints\n3. Run terraform init",
            },
            StepDef {
                name: "Configuration",
                instructions: "Apply configuration:\n1. Merge layer variables\n2. Review the terraform plan\n3. Apply changes",
            },
            StepDef {
                name: "Validation",
                instructions: "Validate the migration:\n1. Run smoke tests\n2. Check workload health\n3. Sign off the rollout",
            },
        ],
    },
];

const RECIPE_STEPS: &[&str] = &[
    "Apply open rewrite recipe (eks-microservices) to migrate from 4.1.1 to 4.2.x",
    "Apply open rewrite recipe (eks-microservices) to migrate from 4.2.x to 4.3.x",
    "Apply open rewrite recipe (eks-microservices) to migrate from 4.3.x to 6.0.x",
];

/// All phases in order
pub fn phases() -> Vec<Phase> {
    PHASES.iter().map(PhaseDef::to_phase).collect()
}

/// Look up a phase by its 1-based id
pub fn phase(id: u32) -> Option<Phase> {
    PHASES.iter().find(|p| p.id == id).map(PhaseDef::to_phase)
}

/// Fresh modules for a phase, cursors on the first step.
///
/// Unknown phase ids yield an empty list.
pub fn modules_for_phase(phase_id: u32) -> Vec<Module> {
    MODULES
        .iter()
        .filter(|m| m.phase == phase_id)
        .map(ModuleDef::to_module)
        .collect()
}

/// Recipe steps reported by the mock engine, all completed
pub fn migration_steps() -> Vec<MigrationStepSummary> {
    RECIPE_STEPS
        .iter()
        .zip(1..)
        .map(|(description, id)| MigrationStepSummary {
            id,
            description: (*description).to_string(),
            completed: true,
        })
        .collect()
}

/// The mock engine always reports a finished run
pub fn overall_status() -> OverallStatus {
    OverallStatus::Completed
}

/// Summary text for a version pair; both versions appear verbatim
pub fn plan_summary(source_version: &str, target_version: &str) -> String {
    format!(
        "Mock migration plan for EKS {source_version} -> {target_version}.\n \
         1. Migrate from 4.1.1 to 4.2.x\n \
         2. Migrate from 4.2.x to 4.3.x\n \
         3. Migrate from 4.3.x to 6.0.5"
    )
}

pub fn build_plan(source_version: &str, target_version: &str) -> MigrationPlan {
    MigrationPlan {
        source_version: source_version.to_string(),
        target_version: target_version.to_string(),
        summary: plan_summary(source_version, target_version),
    }
}

impl PhaseDef {
    fn to_phase(&self) -> Phase {
        Phase {
            id: self.id,
            name: self.name.to_string(),
            description: self.description.to_string(),
        }
    }
}

impl ModuleDef {
    fn to_module(&self) -> Module {
        let steps = self
            .steps
            .iter()
            .map(|s| Step::pending(s.name, s.instructions))
            .collect();
        Module::new(self.id, self.title, self.description, steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_phases_are_ordered_from_one() {
        let ids: Vec<u32> = phases().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_phase_lookup() {
        assert_eq!(phase(2).unwrap().name, "Data Layer");
        assert!(phase(0).is_none());
        assert!(phase(4).is_none());
    }

    #[test]
    fn test_phase_two_modules() {
        let titles: Vec<String> = modules_for_phase(2).into_iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["Data Storage", "Data Lifecycle Management"]);
    }

    #[test]
    fn test_unknown_phase_is_empty() {
        assert!(modules_for_phase(0).is_empty());
        assert!(modules_for_phase(99).is_empty());
    }

    #[test]
    fn test_every_phase_has_modules() {
        for phase in phases() {
            assert!(!modules_for_phase(phase.id).is_empty(), "phase {}", phase.id);
        }
    }

    #[test]
    fn test_module_ids_unique() {
        let mut seen = HashSet::new();
        for phase in phases() {
            for module in modules_for_phase(phase.id) {
                assert!(seen.insert(module.id.clone()), "duplicate id {}", module.id);
            }
        }
    }

    #[test]
    fn test_catalog_modules_start_fresh() {
        for module in modules_for_phase(1) {
            assert_eq!(module.current_step_index(), 0);
            assert!(!module.is_completed());
            assert!(!module.steps().is_empty());
            assert!(module.steps().iter().all(|s| !s.instructions.is_empty()));
        }
    }

    #[test]
    fn test_migration_steps_numbered_and_completed() {
        let steps = migration_steps();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].id, 1);
        assert_eq!(steps[2].id, 3);
        assert!(steps.iter().all(|s| s.completed));
    }

    #[test]
    fn test_plan_echoes_versions() {
        let plan = build_plan("1.21", "1.27");
        assert_eq!(plan.source_version, "1.21");
        assert_eq!(plan.target_version, "1.27");
        assert!(plan.summary.contains("1.21"));
        assert!(plan.summary.contains("1.27"));
    }

    #[test]
    fn test_eks_versions_newest_first() {
        assert_eq!(EKS_VERSIONS.first(), Some(&"1.27"));
        assert_eq!(EKS_VERSIONS.last(), Some(&"1.21"));
        assert!(is_known_version("1.24"));
        assert!(!is_known_version("1.30"));
    }
}
