//! Selectable picker entries.
//!
//! Every entry implements [`PickItem`]; the concrete variants differ only in
//! how they are built and which task-service call they dispatch to.

mod attachable;
mod builder;
mod configurable;
mod placeholder;
mod runnable;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::task::TaskDescriptor;
use crate::traits::TaskService;

pub use attachable::AttachableItem;
pub use builder::{build_attach_items, build_configure_items, build_run_items};
pub use configurable::ConfigurableItem;
pub use placeholder::{PlaceholderItem, NO_TASKS_FOUND};
pub use runnable::{RunnableItem, GROUP_CONFIGURED, GROUP_DETECTED, GROUP_RECENT};

/// How the user interacted with an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    /// Confirmed the entry.
    Open,
    /// Moved focus onto the entry without confirming.
    Preview,
}

#[async_trait]
pub trait PickItem: Send + Sync + std::fmt::Debug {
    fn label(&self) -> &str;

    fn description(&self) -> Option<&str> {
        None
    }

    fn group_label(&self) -> Option<&str> {
        None
    }

    fn show_separator(&self) -> bool {
        false
    }

    /// The task definition behind this entry, when there is one.
    fn task(&self) -> Option<&TaskDescriptor> {
        None
    }

    /// Returns true when the picker should close.
    async fn dispatch(&self, mode: InteractionMode, tasks: &dyn TaskService)
        -> anyhow::Result<bool>;
}
