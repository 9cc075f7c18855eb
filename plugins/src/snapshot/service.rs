use std::sync::{Mutex, MutexGuard, PoisonError};

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use taskpick_core::api::{RunningTaskInfo, TaskDescriptor, TaskService};

use super::TaskSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum DispatchAction {
    Run { source: String, label: String },
    RunConfigured { source: String, label: String },
    Attach { terminal_id: u64, task_id: u64 },
    Configure { source: String, label: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct DispatchRecord {
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub action: DispatchAction,
}

/// Task service over a [`TaskSnapshot`].
///
/// Nothing is executed: dispatched calls are validated against the snapshot
/// and appended to an in-memory log. Successful runs move the task to the
/// front of the recent history.
pub struct SnapshotTaskService {
    configured: Vec<TaskDescriptor>,
    detected: Vec<TaskDescriptor>,
    running: Vec<RunningTaskInfo>,
    recent: Mutex<Vec<String>>,
    log: Mutex<Vec<DispatchRecord>>,
}

fn guard<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SnapshotTaskService {
    pub fn new(snapshot: TaskSnapshot) -> Self {
        Self {
            configured: snapshot.configured,
            detected: snapshot.detected,
            running: snapshot.running,
            recent: Mutex::new(snapshot.recent),
            log: Mutex::new(Vec::new()),
        }
    }

    pub fn dispatched(&self) -> Vec<DispatchRecord> {
        guard(&self.log).clone()
    }

    fn record(&self, action: DispatchAction) {
        tracing::info!(?action, "task dispatched");
        guard(&self.log).push(DispatchRecord {
            at: Utc::now(),
            action,
        });
    }

    fn promote_recent(&self, label: &str) {
        let mut recent = guard(&self.recent);
        recent.retain(|l| l != label);
        recent.insert(0, label.to_string());
    }
}

fn find<'a>(list: &'a [TaskDescriptor], source: &str, label: &str) -> Option<&'a TaskDescriptor> {
    list.iter().find(|t| t.source == source && t.label == label)
}

#[async_trait]
impl TaskService for SnapshotTaskService {
    fn name(&self) -> &str {
        "snapshot"
    }

    fn recent_tasks(&self) -> Vec<TaskDescriptor> {
        guard(&self.recent)
            .iter()
            .map(TaskDescriptor::label_only)
            .collect()
    }

    async fn configured_tasks(&self) -> Result<Vec<TaskDescriptor>> {
        Ok(self.configured.clone())
    }

    async fn provided_tasks(&self) -> Result<Vec<TaskDescriptor>> {
        Ok(self.detected.clone())
    }

    async fn running_tasks(&self) -> Result<Vec<RunningTaskInfo>> {
        Ok(self.running.clone())
    }

    async fn run(&self, source: &str, label: &str) -> Result<()> {
        if find(&self.detected, source, label).is_none() {
            bail!("no detected task '{label}' from {source}");
        }
        self.record(DispatchAction::Run {
            source: source.to_string(),
            label: label.to_string(),
        });
        self.promote_recent(label);
        Ok(())
    }

    async fn run_configured(&self, source: &str, label: &str) -> Result<()> {
        if find(&self.configured, source, label).is_none() {
            bail!("no configured task '{label}' in {source}");
        }
        self.record(DispatchAction::RunConfigured {
            source: source.to_string(),
            label: label.to_string(),
        });
        self.promote_recent(label);
        Ok(())
    }

    async fn attach(&self, terminal_id: u64, task_id: u64) -> Result<()> {
        let attached = self
            .running
            .iter()
            .any(|t| t.task_id == task_id && t.terminal_id == Some(terminal_id));
        if !attached {
            bail!("task {task_id} is not running in terminal {terminal_id}");
        }
        self.record(DispatchAction::Attach {
            terminal_id,
            task_id,
        });
        Ok(())
    }

    async fn configure(&self, task: &TaskDescriptor) -> Result<()> {
        self.record(DispatchAction::Configure {
            source: task.source.clone(),
            label: task.label.clone(),
        });
        Ok(())
    }
}
