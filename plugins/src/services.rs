//! ServicesFactory implementation: builds the task service and workspace
//! collaborators from config for the CLI.
use async_trait::async_trait;
use taskpick_core::api::{AppConfig, Services, ServicesFactory};

use crate::factory;

#[derive(Default)]
pub struct SnapshotServicesFactory;

#[async_trait]
impl ServicesFactory for SnapshotServicesFactory {
    async fn build_services(&self, cfg: &AppConfig) -> anyhow::Result<Services> {
        let snapshot = factory::load_snapshot(cfg).await?;
        Ok(Services {
            tasks: factory::build_task_service(&snapshot),
            workspace: factory::build_workspace(&snapshot),
        })
    }
}
