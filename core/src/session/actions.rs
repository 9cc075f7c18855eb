use serde::{Deserialize, Serialize};

use crate::item::PickItem;
use crate::traits::TaskService;

/// Secondary action offered next to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemAction {
    /// Open the configuration of the entry's task.
    Configure,
}

impl ItemAction {
    pub fn label(&self) -> &'static str {
        match self {
            ItemAction::Configure => "Configure Task",
        }
    }
}

/// Per-entry secondary actions for the run flow.
#[derive(Debug, Clone, Default)]
pub struct TaskActionProvider;

impl TaskActionProvider {
    pub fn has_actions(&self, item: &dyn PickItem) -> bool {
        item.task().is_some()
    }

    pub fn actions(&self, item: &dyn PickItem) -> Vec<ItemAction> {
        if self.has_actions(item) {
            vec![ItemAction::Configure]
        } else {
            Vec::new()
        }
    }

    /// Returns true when the picker should close.
    pub async fn run_action(
        &self,
        action: ItemAction,
        item: &dyn PickItem,
        tasks: &dyn TaskService,
    ) -> anyhow::Result<bool> {
        let Some(task) = item.task() else {
            return Ok(false);
        };
        match action {
            ItemAction::Configure => {
                tracing::info!(label = %task.label, "configuring task from picker action");
                tasks.configure(task).await?;
            }
        }
        Ok(true)
    }
}
