use std::sync::Arc;

use crate::config::AppConfig;
use crate::session::PickerSession;
use crate::traits::{TaskService, WorkspaceInfo};

#[derive(Clone)]
pub struct Services {
    pub tasks: Arc<dyn TaskService>,
    pub workspace: Arc<dyn WorkspaceInfo>,
}

#[async_trait::async_trait]
pub trait ServicesFactory: Send + Sync {
    async fn build_services(&self, cfg: &AppConfig) -> anyhow::Result<Services>;
}

#[derive(Clone)]
pub struct AppContext {
    cfg: AppConfig,
    services: Services,
}

impl AppContext {
    pub async fn new(cfg: AppConfig, factory: &dyn ServicesFactory) -> anyhow::Result<Self> {
        let services = factory.build_services(&cfg).await?;
        tracing::debug!(tasks = services.tasks.name(), "services ready");
        Ok(Self { cfg, services })
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.cfg
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    /// A fresh, idle picker session over this context's services.
    pub fn session(&self) -> PickerSession {
        PickerSession::new(
            self.services.tasks.clone(),
            self.services.workspace.clone(),
            self.cfg.picker.clone(),
        )
    }
}
