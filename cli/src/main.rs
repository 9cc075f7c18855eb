use clap::Parser;
use taskpick_cli::app;
use taskpick_cli::commands::cli;
use taskpick_cli::logging;
use taskpick_core::config;
use taskpick_core::context::AppContext;
use taskpick_core::error;
use taskpick_plugins::SnapshotServicesFactory;

#[tokio::main]
async fn main() {
    let exit = match real_main().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            exit_code_for_error(&e)
        }
    };

    std::process::exit(exit);
}

async fn real_main() -> Result<i32, error::CliError> {
    let args = cli::Args::parse();
    let cfg = match &args.config {
        Some(path) => config::load_from_path(std::path::Path::new(path))
            .map(config::apply_env_overrides),
        None => config::load_default(),
    }
    .map_err(|e| error::CliError::Config(e.to_string()))?;
    let cfg = app::apply_overrides(&args, cfg);
    let _log_guard = logging::init_tracing(&cfg.logging).map_err(error::CliError::Config)?;

    let ctx = AppContext::new(cfg, &SnapshotServicesFactory).await?;
    app::run_pick(&args.command, &ctx).await
}

fn exit_code_for_error(e: &error::CliError) -> i32 {
    // 0: an entry was dispatched
    // 1: picker closed without dispatching (returned as a normal exit code)
    // 11: config error
    // 20: IO error
    // 50: internal/uncategorized
    match e {
        error::CliError::Config(_) => 11,
        error::CliError::Io(_) => 20,
        error::CliError::Picker(_) => 50,
        error::CliError::Anyhow(_) => 50,
    }
}
