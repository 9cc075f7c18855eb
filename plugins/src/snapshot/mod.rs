//! Task snapshot files: a frozen view of what a task provider and execution
//! engine would report, loaded from JSON or TOML.

mod service;

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use taskpick_core::api::{RunningTaskInfo, TaskDescriptor};

pub use service::{DispatchAction, DispatchRecord, SnapshotTaskService};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskSnapshot {
    /// Workspace root folders. Anything but exactly one counts as multi-root.
    #[serde(default)]
    pub folders: Vec<String>,

    /// Recently run task labels, newest first.
    #[serde(default)]
    pub recent: Vec<String>,

    #[serde(default)]
    pub configured: Vec<TaskDescriptor>,

    #[serde(default)]
    pub detected: Vec<TaskDescriptor>,

    #[serde(default)]
    pub running: Vec<RunningTaskInfo>,
}

impl TaskSnapshot {
    pub fn parse(raw: &str, is_json: bool) -> anyhow::Result<Self> {
        if is_json {
            Ok(serde_json::from_str(raw)?)
        } else {
            Ok(toml::from_str(raw)?)
        }
    }

    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read task snapshot {}", path.display()))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        Self::parse(&raw, is_json)
            .with_context(|| format!("invalid task snapshot {}", path.display()))
    }
}
