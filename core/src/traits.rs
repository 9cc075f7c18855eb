use async_trait::async_trait;

use crate::item::PickItem;
use crate::session::{PickOutcome, PickerOptions, TaskActionProvider};
use crate::task::{RunningTaskInfo, TaskDescriptor};

/// Task provider and execution engine.
#[async_trait]
pub trait TaskService: Send + Sync {
    fn name(&self) -> &str;

    /// Recently run tasks, newest first. Only labels are meaningful.
    fn recent_tasks(&self) -> Vec<TaskDescriptor>;
    async fn configured_tasks(&self) -> anyhow::Result<Vec<TaskDescriptor>>;
    /// Every auto-detected task.
    async fn provided_tasks(&self) -> anyhow::Result<Vec<TaskDescriptor>>;
    async fn running_tasks(&self) -> anyhow::Result<Vec<RunningTaskInfo>>;

    async fn run(&self, source: &str, label: &str) -> anyhow::Result<()>;
    async fn run_configured(&self, source: &str, label: &str) -> anyhow::Result<()>;
    async fn attach(&self, terminal_id: u64, task_id: u64) -> anyhow::Result<()>;
    async fn configure(&self, task: &TaskDescriptor) -> anyhow::Result<()>;
}

/// Workspace layout and display formatting.
pub trait WorkspaceInfo: Send + Sync {
    /// True unless the workspace is a single directory.
    fn is_multi_root(&self) -> bool;
    fn scope_long_name(&self, scope: &str) -> String;
}

/// What the picker widget sees while presenting.
#[derive(Clone, Copy)]
pub struct PickerModel<'a> {
    items: &'a [Box<dyn PickItem>],
    action_provider: Option<&'a TaskActionProvider>,
}

impl<'a> PickerModel<'a> {
    pub fn new(
        items: &'a [Box<dyn PickItem>],
        action_provider: Option<&'a TaskActionProvider>,
    ) -> Self {
        Self {
            items,
            action_provider,
        }
    }

    /// Pull callback for the picker. Text matching is the picker's job, so
    /// the full candidate set is returned whatever the filter.
    pub fn results(&self, _filter: &str) -> &'a [Box<dyn PickItem>] {
        self.items
    }

    pub fn action_provider(&self) -> Option<&'a TaskActionProvider> {
        self.action_provider
    }
}

/// The picker widget: renders items, matches user input, reports a choice.
#[async_trait]
pub trait Picker: Send {
    async fn pick(
        &mut self,
        model: PickerModel<'_>,
        options: &PickerOptions,
    ) -> anyhow::Result<PickOutcome>;
}
