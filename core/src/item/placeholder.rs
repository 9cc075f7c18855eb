use async_trait::async_trait;

use super::{InteractionMode, PickItem};
use crate::traits::TaskService;

pub const NO_TASKS_FOUND: &str = "No tasks found";

/// Informational entry shown when a flow has nothing to offer.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderItem;

#[async_trait]
impl PickItem for PlaceholderItem {
    fn label(&self) -> &str {
        NO_TASKS_FOUND
    }

    async fn dispatch(
        &self,
        _mode: InteractionMode,
        _tasks: &dyn TaskService,
    ) -> anyhow::Result<bool> {
        Ok(false)
    }
}
