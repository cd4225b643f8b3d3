use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A top-level migration stage shown in the wizard stepper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Phase {
    /// 1-based, ordered
    pub id: u32,
    pub name: String,
    pub description: String,
}
