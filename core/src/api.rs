//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `taskpick_core::api` instead of reaching into internal modules.

pub use crate::config::{load_default, load_from_path, AppConfig, LoggingConfig, PickerConfig};
pub use crate::context::{AppContext, Services, ServicesFactory};
pub use crate::error::{CliError, PickerError};
pub use crate::item::{InteractionMode, PickItem, NO_TASKS_FOUND};
pub use crate::reconcile::{reconcile, Reconciled};
pub use crate::session::{
    ItemAction, PickFlow, PickOutcome, PickerOptions, PickerSession, SessionPhase,
    TaskActionProvider,
};
pub use crate::task::{same_task, RunningTaskInfo, TaskDescriptor, TaskKind};
pub use crate::traits::{Picker, PickerModel, TaskService, WorkspaceInfo};
