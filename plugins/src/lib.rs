pub mod factory;
pub mod services;
pub mod snapshot;
pub mod workspace;

pub use services::SnapshotServicesFactory;
pub use snapshot::{DispatchAction, DispatchRecord, SnapshotTaskService, TaskSnapshot};
pub use workspace::SnapshotWorkspace;
