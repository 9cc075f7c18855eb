//! Line-oriented picker for terminals: prints the entries, reads a choice.

pub mod matcher;

use std::io::Write;

use async_trait::async_trait;
use taskpick_core::api::{
    InteractionMode, ItemAction, PickOutcome, Picker, PickerModel, PickerOptions,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

use crate::commands::cli::PickArgs;
use matcher::visible_entries;

/// A parsed user answer, before mapping back to model indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Open(usize),
    Configure(usize),
}

fn parse_choice(raw: &str) -> Option<Choice> {
    let raw = raw.trim();
    let (configure, digits) = match raw.strip_prefix(['c', 'C']) {
        Some(rest) => (true, rest.trim()),
        None => (false, raw),
    };
    let n: usize = digits.parse().ok().filter(|n| *n > 0)?;
    Some(if configure {
        Choice::Configure(n - 1)
    } else {
        Choice::Open(n - 1)
    })
}

/// Secondary actions the model's provider offers for entry `index`.
fn entry_actions(model: &PickerModel<'_>, index: usize) -> Vec<ItemAction> {
    match (model.action_provider(), model.results("").get(index)) {
        (Some(provider), Some(item)) => provider.actions(item.as_ref()),
        _ => Vec::new(),
    }
}

pub struct LinePicker<R, W> {
    input: R,
    output: W,
    filter: String,
    mode: InteractionMode,
    /// Answer given up front; when set, the picker never reads `input`.
    preset: Option<String>,
    interactive: bool,
}

impl LinePicker<BufReader<Stdin>, std::io::Stdout> {
    pub fn stdio(args: &PickArgs) -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), std::io::stdout(), args)
    }
}

impl<R, W> LinePicker<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    pub fn new(input: R, output: W, args: &PickArgs) -> Self {
        let mode = if args.preview {
            InteractionMode::Preview
        } else {
            InteractionMode::Open
        };
        Self {
            input,
            output,
            filter: args.filter.clone(),
            mode,
            preset: args.select.clone(),
            interactive: args.select.is_none(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn render(
        &mut self,
        model: &PickerModel<'_>,
        visible: &[usize],
        options: &PickerOptions,
    ) -> std::io::Result<()> {
        let items = model.results(&self.filter);
        if self.filter.is_empty() {
            writeln!(self.output, "{}", options.placeholder)?;
        } else {
            writeln!(self.output, "{} [{}]", options.placeholder, self.filter)?;
        }

        // Group headers only make sense while bucket order is kept.
        let grouped = !options.sort_by_relevance && self.filter.is_empty();
        for (n, &idx) in visible.iter().enumerate() {
            let item = &items[idx];
            if grouped {
                if item.show_separator() {
                    writeln!(self.output, "  ----")?;
                }
                if let Some(group) = item.group_label() {
                    writeln!(self.output, "  {group}")?;
                }
            }
            match item.description() {
                Some(desc) if !desc.is_empty() => {
                    writeln!(self.output, "{:>4}. {}  ({desc})", n + 1, item.label())?
                }
                _ => writeln!(self.output, "{:>4}. {}", n + 1, item.label())?,
            }
        }
        if visible.is_empty() {
            writeln!(self.output, "  (no matching entries)")?;
        }
        let offered = visible
            .iter()
            .find_map(|&idx| entry_actions(model, idx).first().copied());
        if let Some(action) = offered {
            writeln!(
                self.output,
                "number to pick, c<number> to {}, empty to cancel",
                action.label().to_lowercase()
            )?;
        }
        self.output.flush()
    }

    async fn next_answer(&mut self) -> anyhow::Result<Option<String>> {
        if let Some(preset) = self.preset.take() {
            return Ok(Some(preset));
        }
        if !self.interactive {
            return Ok(None);
        }
        write!(self.output, "> ")?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).await?;
        if read == 0 || line.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[async_trait]
impl<R, W> Picker for LinePicker<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    async fn pick(
        &mut self,
        model: PickerModel<'_>,
        options: &PickerOptions,
    ) -> anyhow::Result<PickOutcome> {
        let visible = visible_entries(model.results(&self.filter), &self.filter, options);
        self.render(&model, &visible, options)?;

        loop {
            let Some(answer) = self.next_answer().await? else {
                return Ok(PickOutcome::Cancelled);
            };
            let outcome = match parse_choice(&answer) {
                Some(Choice::Open(n)) => visible.get(n).map(|&index| PickOutcome::Selected {
                    index,
                    mode: self.mode,
                }),
                Some(Choice::Configure(n)) => visible
                    .get(n)
                    .filter(|&&index| {
                        entry_actions(&model, index).contains(&ItemAction::Configure)
                    })
                    .map(|&index| PickOutcome::Action {
                        index,
                        action: ItemAction::Configure,
                    }),
                _ => None,
            };
            match outcome {
                Some(outcome) => return Ok(outcome),
                None => {
                    tracing::debug!(answer = answer.trim(), "unusable picker answer");
                    writeln!(self.output, "invalid selection: {}", answer.trim())?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use taskpick_core::api::{
        reconcile, PickItem, PickerConfig, PickerSession, RunningTaskInfo, TaskActionProvider,
        TaskDescriptor,
    };
    use taskpick_core::item::{build_attach_items, build_run_items, PlaceholderItem};

    fn args(select: Option<&str>, filter: &str) -> PickArgs {
        PickArgs {
            select: select.map(str::to_string),
            filter: filter.to_string(),
            preview: false,
        }
    }

    fn run_items() -> Vec<Box<dyn PickItem>> {
        let reconciled = reconcile(
            &[TaskDescriptor::label_only("test")],
            &[
                TaskDescriptor::configured("build", "/ws", "shell"),
                TaskDescriptor::configured("test", "/ws", "shell"),
            ],
            &[TaskDescriptor::contributed("watch", "npm", "npm")],
        );
        build_run_items(&reconciled, false)
    }

    fn run_options() -> PickerOptions {
        PickerOptions {
            placeholder: PickerConfig::default().run_placeholder,
            match_on_label: true,
            sort_by_relevance: false,
        }
    }

    #[test]
    fn parses_answers() {
        assert_eq!(parse_choice("2\n"), Some(Choice::Open(1)));
        assert_eq!(parse_choice(" c3 "), Some(Choice::Configure(2)));
        assert_eq!(parse_choice("0"), None);
        assert_eq!(parse_choice("x"), None);
    }

    #[tokio::test]
    async fn renders_groups_and_reads_selection() {
        let items = run_items();
        let provider = TaskActionProvider;
        let mut picker = LinePicker::new(&b"9\n2\n"[..], Vec::new(), &args(None, ""));

        let outcome = picker
            .pick(PickerModel::new(&items, Some(&provider)), &run_options())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            PickOutcome::Selected {
                index: 1,
                mode: InteractionMode::Open
            }
        );
        let out = String::from_utf8(picker.into_output()).unwrap();
        assert_eq!(
            out,
            "Select the task to run\n  recently used tasks\n   1. test\n  ----\n  configured tasks\n   2. build\n  ----\n  detected tasks\n   3. watch\nnumber to pick, c<number> to configure task, empty to cancel\n> invalid selection: 9\n> "
        );
    }

    #[tokio::test]
    async fn filter_maps_back_to_model_index() {
        let items = run_items();
        let mut picker = LinePicker::new(&b""[..], Vec::new(), &args(Some("c1"), "wat"));

        let outcome = picker
            .pick(PickerModel::new(&items, Some(&TaskActionProvider)), &run_options())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            PickOutcome::Action {
                index: 2,
                action: ItemAction::Configure
            }
        );
    }

    #[tokio::test]
    async fn preset_answer_is_used_once() {
        let items = build_attach_items(&[RunningTaskInfo::new(
            1,
            Some(3),
            TaskDescriptor::label_only("serve"),
        )]);
        let mut picker = LinePicker::new(&b"1\n"[..], Vec::new(), &args(Some("c1"), ""));
        let options = PickerOptions {
            sort_by_relevance: true,
            ..run_options()
        };

        // No action provider in the attach flow, so `c1` is rejected and the
        // non-interactive picker gives up instead of reading stdin.
        let outcome = picker
            .pick(PickerModel::new(&items, None), &options)
            .await
            .unwrap();
        assert_eq!(outcome, PickOutcome::Cancelled);
    }

    #[tokio::test]
    async fn end_of_input_cancels_the_session() {
        let tasks = std::sync::Arc::new(taskpick_plugins::SnapshotTaskService::new(
            taskpick_plugins::TaskSnapshot {
                configured: vec![TaskDescriptor::configured("build", "/ws", "shell")],
                ..Default::default()
            },
        ));
        let workspace = std::sync::Arc::new(taskpick_plugins::SnapshotWorkspace::new(vec![
            "/ws".into(),
        ]));
        let mut session = PickerSession::new(tasks.clone(), workspace, PickerConfig::default());
        let mut picker = LinePicker::new(&b""[..], Vec::new(), &args(None, ""));

        let dispatched = session.select_task_to_run(&mut picker).await.unwrap();

        assert!(!dispatched);
        assert!(tasks.dispatched().is_empty());
    }

    #[tokio::test]
    async fn entries_without_actions_offer_none() {
        let items: Vec<Box<dyn PickItem>> = vec![Box::new(PlaceholderItem)];
        let mut picker = LinePicker::new(&b""[..], Vec::new(), &args(Some("c1"), ""));

        let outcome = picker
            .pick(PickerModel::new(&items, Some(&TaskActionProvider)), &run_options())
            .await
            .unwrap();

        assert_eq!(outcome, PickOutcome::Cancelled);
        let out = String::from_utf8(picker.into_output()).unwrap();
        assert_eq!(
            out,
            "Select the task to run\n   1. No tasks found\ninvalid selection: c1\n"
        );
    }
}
