#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use taskpick_core::api::{
    PickOutcome, Picker, PickerModel, PickerOptions, RunningTaskInfo, TaskDescriptor,
    TaskService, WorkspaceInfo,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Run { source: String, label: String },
    RunConfigured { source: String, label: String },
    Attach { terminal_id: u64, task_id: u64 },
    Configure { label: String },
}

#[derive(Default)]
pub struct FakeTasks {
    pub recent: Vec<TaskDescriptor>,
    pub configured: Vec<TaskDescriptor>,
    pub detected: Vec<TaskDescriptor>,
    pub running: Vec<RunningTaskInfo>,
    pub fail_queries: bool,
    pub calls: Mutex<Vec<Call>>,
}

impl FakeTasks {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.fail_queries {
            anyhow::bail!("provider offline");
        }
        Ok(())
    }
}

#[async_trait]
impl TaskService for FakeTasks {
    fn name(&self) -> &str {
        "fake"
    }

    fn recent_tasks(&self) -> Vec<TaskDescriptor> {
        self.recent.clone()
    }

    async fn configured_tasks(&self) -> anyhow::Result<Vec<TaskDescriptor>> {
        self.check()?;
        Ok(self.configured.clone())
    }

    async fn provided_tasks(&self) -> anyhow::Result<Vec<TaskDescriptor>> {
        self.check()?;
        Ok(self.detected.clone())
    }

    async fn running_tasks(&self) -> anyhow::Result<Vec<RunningTaskInfo>> {
        self.check()?;
        Ok(self.running.clone())
    }

    async fn run(&self, source: &str, label: &str) -> anyhow::Result<()> {
        self.record(Call::Run {
            source: source.into(),
            label: label.into(),
        });
        Ok(())
    }

    async fn run_configured(&self, source: &str, label: &str) -> anyhow::Result<()> {
        self.record(Call::RunConfigured {
            source: source.into(),
            label: label.into(),
        });
        Ok(())
    }

    async fn attach(&self, terminal_id: u64, task_id: u64) -> anyhow::Result<()> {
        self.record(Call::Attach {
            terminal_id,
            task_id,
        });
        Ok(())
    }

    async fn configure(&self, task: &TaskDescriptor) -> anyhow::Result<()> {
        self.record(Call::Configure {
            label: task.label.clone(),
        });
        Ok(())
    }
}

pub struct Workspace {
    pub multi_root: bool,
}

impl WorkspaceInfo for Workspace {
    fn is_multi_root(&self) -> bool {
        self.multi_root
    }

    fn scope_long_name(&self, scope: &str) -> String {
        format!("{scope} (workspace)")
    }
}

/// Replays a fixed list of outcomes, then cancels. Records what it was shown.
#[derive(Default)]
pub struct ScriptedPicker {
    pub script: VecDeque<PickOutcome>,
    pub seen_labels: Vec<Vec<String>>,
    pub seen_options: Vec<PickerOptions>,
    pub saw_action_provider: Vec<bool>,
}

impl ScriptedPicker {
    pub fn new(script: impl IntoIterator<Item = PickOutcome>) -> Self {
        Self {
            script: script.into_iter().collect(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl Picker for ScriptedPicker {
    async fn pick(
        &mut self,
        model: PickerModel<'_>,
        options: &PickerOptions,
    ) -> anyhow::Result<PickOutcome> {
        self.seen_labels.push(
            model
                .results("whatever the user typed")
                .iter()
                .map(|i| i.label().to_string())
                .collect(),
        );
        self.seen_options.push(options.clone());
        self.saw_action_provider
            .push(model.action_provider().is_some());
        Ok(self.script.pop_front().unwrap_or(PickOutcome::Cancelled))
    }
}

/// Never answers; the user walked away with the picker open.
pub struct StalledPicker;

#[async_trait]
impl Picker for StalledPicker {
    async fn pick(
        &mut self,
        _model: PickerModel<'_>,
        _options: &PickerOptions,
    ) -> anyhow::Result<PickOutcome> {
        std::future::pending().await
    }
}

pub fn cfg(label: &str) -> TaskDescriptor {
    TaskDescriptor::configured(label, "/ws/server", "shell")
}

pub fn det(label: &str) -> TaskDescriptor {
    TaskDescriptor::contributed(label, "npm", "npm")
}

pub fn recent(label: &str) -> TaskDescriptor {
    TaskDescriptor::label_only(label)
}

pub fn shared(tasks: FakeTasks) -> Arc<FakeTasks> {
    Arc::new(tasks)
}
