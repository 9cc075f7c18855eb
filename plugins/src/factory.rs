use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use taskpick_core::api::AppConfig;

use crate::snapshot::{SnapshotTaskService, TaskSnapshot};
use crate::workspace::SnapshotWorkspace;

pub async fn load_snapshot(cfg: &AppConfig) -> Result<TaskSnapshot> {
    let path = Path::new(&cfg.snapshot.path);
    tracing::debug!(path = %path.display(), "loading task snapshot");
    TaskSnapshot::load(path).await
}

pub fn build_task_service(snapshot: &TaskSnapshot) -> Arc<SnapshotTaskService> {
    Arc::new(SnapshotTaskService::new(snapshot.clone()))
}

pub fn build_workspace(snapshot: &TaskSnapshot) -> Arc<SnapshotWorkspace> {
    Arc::new(SnapshotWorkspace::new(snapshot.folders.clone()))
}
