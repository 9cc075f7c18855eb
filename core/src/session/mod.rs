//! Picker session: gathers task data, materialises the entry list, hands it
//! to the picker widget and dispatches whatever the user chose.
//!
//! Each entry point (run / attach / configure) rebuilds the entry list and
//! action provider from scratch; nothing carries over between flows.

pub mod actions;
pub mod phase;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::PickerConfig;
use crate::error::PickerError;
use crate::item::{
    build_attach_items, build_configure_items, build_run_items, InteractionMode, PickItem,
};
use crate::reconcile::reconcile;
use crate::traits::{Picker, PickerModel, TaskService, WorkspaceInfo};

pub use actions::{ItemAction, TaskActionProvider};
pub use phase::{PhaseTransition, SessionPhase, TransitionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickFlow {
    Run,
    Attach,
    Configure,
}

impl PickFlow {
    /// The run flow keeps bucket order; the others let the picker rank by
    /// match quality.
    pub fn sort_by_relevance(&self) -> bool {
        !matches!(self, PickFlow::Run)
    }

    fn placeholder<'a>(&self, cfg: &'a PickerConfig) -> &'a str {
        match self {
            PickFlow::Run => &cfg.run_placeholder,
            PickFlow::Attach => &cfg.attach_placeholder,
            PickFlow::Configure => &cfg.configure_placeholder,
        }
    }
}

/// Options passed to the picker widget alongside the model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickerOptions {
    pub placeholder: String,
    pub match_on_label: bool,
    pub sort_by_relevance: bool,
}

/// What the user did with the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// Interacted with the entry at `index` of the model's results.
    Selected { index: usize, mode: InteractionMode },
    /// Triggered a secondary action on the entry at `index`.
    Action { index: usize, action: ItemAction },
    /// Closed the picker without choosing anything.
    Cancelled,
}

type Built = (Vec<Box<dyn PickItem>>, Option<TaskActionProvider>);

pub struct PickerSession {
    tasks: Arc<dyn TaskService>,
    workspace: Arc<dyn WorkspaceInfo>,
    config: PickerConfig,
    phase: SessionPhase,
    items: Vec<Box<dyn PickItem>>,
    action_provider: Option<TaskActionProvider>,
}

impl PickerSession {
    pub fn new(
        tasks: Arc<dyn TaskService>,
        workspace: Arc<dyn WorkspaceInfo>,
        config: PickerConfig,
    ) -> Self {
        Self {
            tasks,
            workspace,
            config,
            phase: SessionPhase::Idle,
            items: Vec::new(),
            action_provider: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn items(&self) -> &[Box<dyn PickItem>] {
        &self.items
    }

    pub fn action_provider(&self) -> Option<&TaskActionProvider> {
        self.action_provider.as_ref()
    }

    /// Pull callback: the full entry list, whatever the user typed.
    pub fn results(&self, filter: &str) -> &[Box<dyn PickItem>] {
        self.model().results(filter)
    }

    pub fn model(&self) -> PickerModel<'_> {
        PickerModel::new(&self.items, self.action_provider.as_ref())
    }

    pub async fn select_task_to_run(
        &mut self,
        picker: &mut dyn Picker,
    ) -> Result<bool, PickerError> {
        self.select(PickFlow::Run, picker).await
    }

    pub async fn select_task_to_attach(
        &mut self,
        picker: &mut dyn Picker,
    ) -> Result<bool, PickerError> {
        self.select(PickFlow::Attach, picker).await
    }

    pub async fn select_task_to_configure(
        &mut self,
        picker: &mut dyn Picker,
    ) -> Result<bool, PickerError> {
        self.select(PickFlow::Configure, picker).await
    }

    /// Build the entries for `flow` and present them. Returns true when an
    /// entry was dispatched and the picker closed because of it.
    pub async fn select(
        &mut self,
        flow: PickFlow,
        picker: &mut dyn Picker,
    ) -> Result<bool, PickerError> {
        let options = self.prepare(flow).await?;
        self.present(picker, &options).await
    }

    /// Idle -> Building -> Ready.
    ///
    /// A list left over from an earlier flow that never closed (a dropped
    /// `select` future, `prepare` without `present`) is abandoned first.
    pub async fn prepare(&mut self, flow: PickFlow) -> Result<PickerOptions, PickerError> {
        if self.phase != SessionPhase::Idle {
            tracing::debug!(phase = ?self.phase, ?flow, "abandoning previous picker list");
            self.transition(SessionPhase::Idle)?;
        }
        self.transition(SessionPhase::Building)?;
        self.items.clear();
        self.action_provider = None;

        let (items, action_provider) = match self.build(flow).await {
            Ok(built) => built,
            Err(e) => {
                tracing::warn!(?flow, error = %e, "failed to gather tasks");
                self.transition(SessionPhase::Idle)?;
                return Err(e);
            }
        };
        self.items = items;
        self.action_provider = action_provider;
        self.transition(SessionPhase::Ready)?;

        Ok(PickerOptions {
            placeholder: flow.placeholder(&self.config).to_string(),
            match_on_label: true,
            sort_by_relevance: flow.sort_by_relevance(),
        })
    }

    /// Ready -> Presenting -> Idle.
    pub async fn present(
        &mut self,
        picker: &mut dyn Picker,
        options: &PickerOptions,
    ) -> Result<bool, PickerError> {
        self.transition(SessionPhase::Presenting)?;
        let result = self.drive(picker, options).await;
        self.transition(SessionPhase::Idle)?;
        result
    }

    async fn build(&self, flow: PickFlow) -> Result<Built, PickerError> {
        match flow {
            PickFlow::Run => {
                let recent = self.tasks.recent_tasks();
                let configured = self.tasks.configured_tasks().await?;
                let detected = self.tasks.provided_tasks().await?;
                let reconciled = reconcile(&recent, &configured, &detected);
                let action_provider = (!reconciled.is_empty()).then(TaskActionProvider::default);
                let items = build_run_items(&reconciled, self.workspace.is_multi_root());
                Ok((items, action_provider))
            }
            PickFlow::Attach => {
                let running = self.tasks.running_tasks().await?;
                Ok((build_attach_items(&running), None))
            }
            PickFlow::Configure => {
                let detected = self.tasks.provided_tasks().await?;
                Ok((build_configure_items(detected, self.workspace.as_ref()), None))
            }
        }
    }

    async fn drive(
        &self,
        picker: &mut dyn Picker,
        options: &PickerOptions,
    ) -> Result<bool, PickerError> {
        loop {
            let closed = match picker.pick(self.model(), options).await? {
                PickOutcome::Cancelled => {
                    tracing::debug!("picker closed without a selection");
                    return Ok(false);
                }
                PickOutcome::Selected { index, mode } => match self.items.get(index) {
                    Some(item) => item.dispatch(mode, self.tasks.as_ref()).await?,
                    None => {
                        tracing::warn!(index, "picker selected an entry out of range");
                        false
                    }
                },
                PickOutcome::Action { index, action } => {
                    match (self.action_provider.as_ref(), self.items.get(index)) {
                        (Some(provider), Some(item)) => {
                            provider
                                .run_action(action, item.as_ref(), self.tasks.as_ref())
                                .await?
                        }
                        _ => {
                            tracing::warn!(index, ?action, "no action available for entry");
                            false
                        }
                    }
                }
            };
            if closed {
                return Ok(true);
            }
        }
    }

    fn transition(&mut self, to: SessionPhase) -> Result<(), TransitionError> {
        PhaseTransition::validate(self.phase, to)?;
        tracing::debug!(from = ?self.phase, ?to, "picker session phase");
        self.phase = to;
        Ok(())
    }
}
