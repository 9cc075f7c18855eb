//! CLI assembly: applies command-line overrides to the config, builds the
//! services and runs the chosen picker flow on stdio.
use taskpick_core::api as core_api;

use crate::commands::cli::{Args, Commands};
use crate::picker::LinePicker;

/// Command-line flags win over config files and environment.
pub fn apply_overrides(args: &Args, mut cfg: core_api::AppConfig) -> core_api::AppConfig {
    if let Some(path) = &args.snapshot {
        cfg.snapshot.path = path.clone();
    }
    cfg
}

#[tracing::instrument(name = "cli.pick", skip(command, ctx))]
pub async fn run_pick(
    command: &Commands,
    ctx: &core_api::AppContext,
) -> Result<i32, core_api::CliError> {
    let flow = command.flow();
    let mut session = ctx.session();
    let mut picker = LinePicker::stdio(command.pick_args());

    let dispatched = session.select(flow, &mut picker).await?;
    tracing::debug!(?flow, dispatched, "picker closed");
    Ok(if dispatched { 0 } else { 1 })
}
