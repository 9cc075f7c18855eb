//! Merges recent, configured and detected task lists into three disjoint
//! buckets ordered by source priority (recent > configured > detected).

use crate::task::{same_task, TaskDescriptor};

/// Output of [`reconcile`]. The three buckets never share a label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciled {
    pub recent: Vec<TaskDescriptor>,
    pub configured: Vec<TaskDescriptor>,
    pub detected: Vec<TaskDescriptor>,
}

impl Reconciled {
    pub fn len(&self) -> usize {
        self.recent.len() + self.configured.len() + self.detected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Buckets in presentation order.
    pub fn buckets(&self) -> [&[TaskDescriptor]; 3] {
        [&self.recent, &self.configured, &self.detected]
    }
}

fn contains(list: &[TaskDescriptor], task: &TaskDescriptor) -> bool {
    list.iter().any(|t| same_task(t, task))
}

fn find<'a>(list: &'a [TaskDescriptor], task: &TaskDescriptor) -> Option<&'a TaskDescriptor> {
    list.iter().find(|t| same_task(t, task))
}

/// Reconcile the three task sources.
///
/// Recent entries are resolved to their full descriptor (configured first,
/// then detected) and dropped when neither knows them. Configured entries
/// already promoted to recent are skipped. Detected entries are skipped when
/// they were promoted to recent or when *any* entry of the unfiltered
/// `configured` list shares their label.
pub fn reconcile(
    recent: &[TaskDescriptor],
    configured: &[TaskDescriptor],
    detected: &[TaskDescriptor],
) -> Reconciled {
    let mut out = Reconciled::default();

    for entry in recent {
        let Some(resolved) = find(configured, entry).or_else(|| find(detected, entry)) else {
            tracing::trace!(label = %entry.label, "dropping stale recent task");
            continue;
        };
        if !contains(&out.recent, resolved) {
            out.recent.push(resolved.clone());
        }
    }

    out.configured = configured
        .iter()
        .filter(|task| !contains(&out.recent, task))
        .cloned()
        .collect();

    // Checked against the raw configured list on purpose: a configured task
    // promoted to recent still hides its detected twin.
    out.detected = detected
        .iter()
        .filter(|task| !contains(&out.recent, task) && !contains(configured, task))
        .cloned()
        .collect();

    tracing::debug!(
        recent = out.recent.len(),
        configured = out.configured.len(),
        detected = out.detected.len(),
        "reconciled task lists"
    );
    out
}
