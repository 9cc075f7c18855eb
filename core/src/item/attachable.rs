use async_trait::async_trait;

use super::{InteractionMode, PickItem};
use crate::task::RunningTaskInfo;
use crate::traits::TaskService;

/// A running task backed by a terminal.
#[derive(Debug, Clone)]
pub struct AttachableItem {
    task_id: u64,
    terminal_id: u64,
    label: String,
}

impl AttachableItem {
    /// Returns `None` for tasks without a terminal session; those cannot be
    /// attached to.
    pub fn new(info: &RunningTaskInfo) -> Option<Self> {
        let terminal_id = info.terminal_id?;
        Some(Self {
            task_id: info.task_id,
            terminal_id,
            label: format!("Task id: {}, label: {}", info.task_id, info.config.label),
        })
    }
}

#[async_trait]
impl PickItem for AttachableItem {
    fn label(&self) -> &str {
        &self.label
    }

    async fn dispatch(
        &self,
        mode: InteractionMode,
        tasks: &dyn TaskService,
    ) -> anyhow::Result<bool> {
        if mode != InteractionMode::Open {
            return Ok(false);
        }
        tracing::info!(
            task_id = self.task_id,
            terminal_id = self.terminal_id,
            "attaching to running task"
        );
        tasks.attach(self.terminal_id, self.task_id).await?;
        Ok(true)
    }
}
