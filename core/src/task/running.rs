use serde::{Deserialize, Serialize};

use super::descriptor::TaskDescriptor;

/// Snapshot of a live task instance as reported by the execution engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningTaskInfo {
    /// Unique per running instance.
    pub task_id: u64,
    /// Present only when the task is backed by an interactive terminal.
    #[serde(default)]
    pub terminal_id: Option<u64>,
    pub config: TaskDescriptor,
}

impl RunningTaskInfo {
    pub fn new(task_id: u64, terminal_id: Option<u64>, config: TaskDescriptor) -> Self {
        Self {
            task_id,
            terminal_id,
            config,
        }
    }

    pub fn is_attachable(&self) -> bool {
        self.terminal_id.is_some()
    }
}
