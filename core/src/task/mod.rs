pub mod descriptor;
pub mod running;

pub use descriptor::{same_task, TaskDescriptor, TaskKind};
pub use running::RunningTaskInfo;
