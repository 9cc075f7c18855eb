use async_trait::async_trait;

use super::{InteractionMode, PickItem};
use crate::task::{TaskDescriptor, TaskKind};
use crate::traits::TaskService;
use crate::util::{path_display_name, scope_path};

pub const GROUP_RECENT: &str = "recently used tasks";
pub const GROUP_CONFIGURED: &str = "configured tasks";
pub const GROUP_DETECTED: &str = "detected tasks";

/// A task definition that can be started.
#[derive(Debug, Clone)]
pub struct RunnableItem {
    task: TaskDescriptor,
    group_label: Option<&'static str>,
    show_separator: bool,
    description: Option<String>,
}

impl RunnableItem {
    pub fn new(
        task: TaskDescriptor,
        group_label: Option<&'static str>,
        show_separator: bool,
        is_multi_root: bool,
    ) -> Self {
        let description = describe(&task, is_multi_root);
        Self {
            task,
            group_label,
            show_separator,
            description,
        }
    }
}

fn describe(task: &TaskDescriptor, is_multi_root: bool) -> Option<String> {
    if !is_multi_root {
        return None;
    }
    let text = match (&task.kind, &task.scope) {
        (TaskKind::Contributed { .. }, Some(scope)) => scope_path(scope),
        (TaskKind::Contributed { source_name }, None) => source_name.clone(),
        (TaskKind::Configured { .. }, _) => path_display_name(&task.source),
    };
    Some(text)
}

#[async_trait]
impl PickItem for RunnableItem {
    fn label(&self) -> &str {
        &self.task.label
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn group_label(&self) -> Option<&str> {
        self.group_label
    }

    fn show_separator(&self) -> bool {
        self.show_separator
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
        let TaskDescriptor { label, source, .. } = &self.task;
        if self.task.is_contributed() {
            tracing::info!(%label, %source, "running detected task");
            tasks.run(source, label).await?;
        } else {
            tracing::info!(%label, %source, "running configured task");
            tasks.run_configured(source, label).await?;
        }
        Ok(true)
    }
}
