use async_trait::async_trait;

use super::{InteractionMode, PickItem};
use crate::task::TaskDescriptor;
use crate::traits::{TaskService, WorkspaceInfo};

/// A detected task whose configuration can be opened.
#[derive(Debug, Clone)]
pub struct ConfigurableItem {
    task: TaskDescriptor,
    label: String,
    description: String,
}

impl ConfigurableItem {
    pub fn new(task: TaskDescriptor, workspace: &dyn WorkspaceInfo) -> Self {
        let label = format!("{}: {}", task.source, task.label);
        let description = match &task.scope {
            Some(scope) => workspace.scope_long_name(scope),
            None => task.source.clone(),
        };
        Self {
            task,
            label,
            description,
        }
    }
}

#[async_trait]
impl PickItem for ConfigurableItem {
    fn label(&self) -> &str {
        &self.label
    }

    fn description(&self) -> Option<&str> {
        Some(&self.description)
    }

    fn task(&self) -> Option<&TaskDescriptor> {
        Some(&self.task)
    }

    async fn dispatch(
        &self,
        mode: InteractionMode,
        tasks: &dyn TaskService,
    ) -> anyhow::Result<bool> {
        if mode != InteractionMode::Open {
            return Ok(false);
        }
        tracing::info!(label = %self.task.label, "opening task configuration");
        tasks.configure(&self.task).await?;
        Ok(true)
    }
}
