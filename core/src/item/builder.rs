use super::{
    AttachableItem, ConfigurableItem, PickItem, PlaceholderItem, RunnableItem, GROUP_CONFIGURED,
    GROUP_DETECTED, GROUP_RECENT,
};
use crate::reconcile::Reconciled;
use crate::task::{RunningTaskInfo, TaskDescriptor};
use crate::traits::WorkspaceInfo;

fn or_placeholder(items: Vec<Box<dyn PickItem>>) -> Vec<Box<dyn PickItem>> {
    if items.is_empty() {
        vec![Box::new(PlaceholderItem)]
    } else {
        items
    }
}

/// Runnable entries for the run flow, bucket by bucket.
///
/// The first entry of each non-empty bucket carries the bucket's group
/// label, and gets a separator when an earlier bucket produced entries.
pub fn build_run_items(reconciled: &Reconciled, is_multi_root: bool) -> Vec<Box<dyn PickItem>> {
    let groups = [GROUP_RECENT, GROUP_CONFIGURED, GROUP_DETECTED];
    let mut items: Vec<Box<dyn PickItem>> = Vec::with_capacity(reconciled.len());

    for (bucket, group) in reconciled.buckets().into_iter().zip(groups) {
        let preceded = !items.is_empty();
        for (idx, task) in bucket.iter().enumerate() {
            let first = idx == 0;
            items.push(Box::new(RunnableItem::new(
                task.clone(),
                first.then_some(group),
                first && preceded,
                is_multi_root,
            )));
        }
    }

    or_placeholder(items)
}

/// Attachable entries for running tasks; tasks without a terminal are skipped.
pub fn build_attach_items(running: &[RunningTaskInfo]) -> Vec<Box<dyn PickItem>> {
    let items = running
        .iter()
        .filter_map(AttachableItem::new)
        .map(|item| Box::new(item) as Box<dyn PickItem>)
        .collect();
    or_placeholder(items)
}

/// Configurable entries for every detected task, unreconciled.
pub fn build_configure_items(
    detected: Vec<TaskDescriptor>,
    workspace: &dyn WorkspaceInfo,
) -> Vec<Box<dyn PickItem>> {
    let items = detected
        .into_iter()
        .map(|task| Box::new(ConfigurableItem::new(task, workspace)) as Box<dyn PickItem>)
        .collect();
    or_placeholder(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::NO_TASKS_FOUND;
    use crate::reconcile::reconcile;
    use pretty_assertions::assert_eq;

    struct SingleRoot;

    impl WorkspaceInfo for SingleRoot {
        fn is_multi_root(&self) -> bool {
            false
        }

        fn scope_long_name(&self, scope: &str) -> String {
            format!("folder {scope}")
        }
    }

    fn cfg(label: &str) -> TaskDescriptor {
        TaskDescriptor::configured(label, "/ws", "shell")
    }

    fn det(label: &str) -> TaskDescriptor {
        TaskDescriptor::contributed(label, "npm", "npm")
    }

    fn shape(items: &[Box<dyn PickItem>]) -> Vec<(String, Option<String>, bool)> {
        items
            .iter()
            .map(|i| {
                (
                    i.label().to_string(),
                    i.group_label().map(str::to_string),
                    i.show_separator(),
                )
            })
            .collect()
    }

    #[test]
    fn group_labels_and_separators_mark_bucket_starts() {
        let reconciled = reconcile(
            &[TaskDescriptor::label_only("a")],
            &[cfg("a"), cfg("b"), cfg("c")],
            &[det("d")],
        );
        let items = build_run_items(&reconciled, false);

        assert_eq!(
            shape(&items),
            vec![
                ("a".into(), Some(GROUP_RECENT.into()), false),
                ("b".into(), Some(GROUP_CONFIGURED.into()), true),
                ("c".into(), None, false),
                ("d".into(), Some(GROUP_DETECTED.into()), true),
            ]
        );
    }

    #[test]
    fn first_non_empty_bucket_gets_no_separator() {
        let reconciled = reconcile(&[], &[], &[det("d"), det("e")]);
        let items = build_run_items(&reconciled, false);

        assert_eq!(
            shape(&items),
            vec![
                ("d".into(), Some(GROUP_DETECTED.into()), false),
                ("e".into(), None, false),
            ]
        );
    }

    #[test]
    fn attach_skips_tasks_without_terminal() {
        let running = vec![
            RunningTaskInfo::new(1, None, cfg("build")),
            RunningTaskInfo::new(2, Some(5), cfg("watch")),
        ];
        let items = build_attach_items(&running);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label(), "Task id: 2, label: watch");
        assert_eq!(items[0].description(), None);
        assert_eq!(items[0].group_label(), None);
    }

    #[test]
    fn configure_labels_with_source_and_scope_name() {
        let items = build_configure_items(
            vec![det("watch").with_scope("app"), det("lint")],
            &SingleRoot,
        );

        assert_eq!(items[0].label(), "npm: watch");
        assert_eq!(items[0].description(), Some("folder app"));
        assert_eq!(items[1].label(), "npm: lint");
        assert_eq!(items[1].description(), Some("npm"));
    }

    #[test]
    fn empty_flows_degrade_to_placeholder() {
        for items in [
            build_run_items(&Reconciled::default(), true),
            build_attach_items(&[RunningTaskInfo::new(1, None, cfg("x"))]),
            build_configure_items(Vec::new(), &SingleRoot),
        ] {
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].label(), NO_TASKS_FOUND);
            assert!(items[0].task().is_none());
        }
    }
}
