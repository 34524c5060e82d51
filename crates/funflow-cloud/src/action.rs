//! Planned actions for a dry run

use crate::model::ResourceKind;
use serde::{Deserialize, Serialize};

/// Represents a planned action for a network resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    /// Type of action to perform
    pub action_type: ActionType,

    pub kind: ResourceKind,

    /// Reserved name of the resource
    pub name: String,

    /// Provider ID when the resource already exists
    pub resource_id: Option<String>,

    /// Description of the action
    pub description: String,
}

impl Action {
    pub fn create(kind: ResourceKind, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            action_type: ActionType::Create,
            kind,
            description: format!("create {} {}", kind, name),
            name,
            resource_id: None,
        }
    }

    pub fn no_op(kind: ResourceKind, name: impl Into<String>, id: impl Into<String>) -> Self {
        let name = name.into();
        let id = id.into();
        Self {
            action_type: ActionType::NoOp,
            kind,
            description: format!("{} {} already exists ({})", kind, name, id),
            name,
            resource_id: Some(id),
        }
    }
}

/// Type of action to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// Create a new resource
    Create,
    /// No changes needed
    NoOp,
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionType::Create => write!(f, "create"),
            ActionType::NoOp => write!(f, "no-op"),
        }
    }
}

/// Plan containing all actions to be applied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// List of actions to perform
    pub actions: Vec<Action>,

    /// Whether the plan has any changes
    pub has_changes: bool,
}

impl Plan {
    pub fn new(actions: Vec<Action>) -> Self {
        let has_changes = actions.iter().any(|a| a.action_type != ActionType::NoOp);
        Self {
            actions,
            has_changes,
        }
    }

    /// Get actions by type
    pub fn actions_by_type(&self, action_type: ActionType) -> Vec<&Action> {
        self.actions
            .iter()
            .filter(|a| a.action_type == action_type)
            .collect()
    }

    /// Summary of the plan
    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            create: self.actions_by_type(ActionType::Create).len(),
            no_change: self.actions_by_type(ActionType::NoOp).len(),
        }
    }
}

/// Summary of planned actions
#[derive(Debug, Clone)]
pub struct PlanSummary {
    pub create: usize,
    pub no_change: usize,
}

impl std::fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to create, {} unchanged", self.create, self.no_change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_summary() {
        let plan = Plan::new(vec![
            Action::no_op(ResourceKind::Vpc, "fc-fun-vpc", "vpc-1"),
            Action::create(ResourceKind::VSwitch, "fc-fun-vswitch-1"),
            Action::create(ResourceKind::SecurityGroup, "fc-fun-sg-1"),
        ]);

        assert!(plan.has_changes);
        assert_eq!(plan.summary().to_string(), "2 to create, 1 unchanged");
    }

    #[test]
    fn test_plan_without_changes() {
        let plan = Plan::new(vec![Action::no_op(ResourceKind::Vpc, "fc-fun-vpc", "vpc-1")]);
        assert!(!plan.has_changes);
    }
}
