use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Where a task definition came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskKind {
    /// Declared explicitly in a task configuration file.
    Configured {
        #[serde(default)]
        task_type: String,
    },
    /// Auto-detected by a task provider (npm scripts, make targets, ...).
    Contributed { source_name: String },
}

/// Identifies a task definition.
///
/// Equality and hashing only look at `label`: the same logical task is seen
/// by label alone when it comes from recent history and as a full
/// descriptor when it comes from configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDescriptor {
    pub label: String,
    /// Opaque origin identifier: a file path or a provider id.
    pub source: String,
    /// Containing folder/workspace identifier.
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(flatten)]
    pub kind: TaskKind,
}

impl TaskDescriptor {
    pub fn configured(
        label: impl Into<String>,
        source: impl Into<String>,
        task_type: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            source: source.into(),
            scope: None,
            kind: TaskKind::Configured {
                task_type: task_type.into(),
            },
        }
    }

    pub fn contributed(
        label: impl Into<String>,
        source: impl Into<String>,
        source_name: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            source: source.into(),
            scope: None,
            kind: TaskKind::Contributed {
                source_name: source_name.into(),
            },
        }
    }

    /// A descriptor carrying nothing but a label, as recorded in recent history.
    pub fn label_only(label: impl Into<String>) -> Self {
        Self::configured(label, String::new(), String::new())
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn is_contributed(&self) -> bool {
        matches!(self.kind, TaskKind::Contributed { .. })
    }
}

/// Task identity: two descriptors name the same task iff their labels match.
pub fn same_task(a: &TaskDescriptor, b: &TaskDescriptor) -> bool {
    a.label == b.label
}

impl PartialEq for TaskDescriptor {
    fn eq(&self, other: &Self) -> bool {
        same_task(self, other)
    }
}

impl Eq for TaskDescriptor {}

impl Hash for TaskDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}
