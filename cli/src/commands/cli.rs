use clap::{Args as ClapArgs, Parser, Subcommand};
use taskpick_core::api::PickFlow;

#[derive(Parser, Debug)]
#[command(name = "taskpick", version, about = "Pick a workspace task to run, attach to, or configure")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to ~/.taskpick/config.toml, then ./taskpick.toml).
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Task snapshot file (.json or .toml); overrides `snapshot.path`.
    #[arg(long, global = true)]
    pub snapshot: Option<String>,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct PickArgs {
    /// Pick the Nth listed entry (1-based) without prompting.
    /// Prefix with `c` (e.g. `c2`) to configure the entry instead.
    #[arg(long)]
    pub select: Option<String>,

    /// Text typed into the picker; narrows the list by fuzzy label match.
    #[arg(long, default_value = "")]
    pub filter: String,

    /// Focus the entry without confirming it.
    #[arg(long, default_value_t = false)]
    pub preview: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a recent, configured or detected task.
    Run(PickArgs),
    /// Attach to a running task's terminal.
    Attach(PickArgs),
    /// Open the configuration of a detected task.
    Configure(PickArgs),
}

impl Commands {
    pub fn flow(&self) -> PickFlow {
        match self {
            Commands::Run(_) => PickFlow::Run,
            Commands::Attach(_) => PickFlow::Attach,
            Commands::Configure(_) => PickFlow::Configure,
        }
    }

    pub fn pick_args(&self) -> &PickArgs {
        match self {
            Commands::Run(a) | Commands::Attach(a) | Commands::Configure(a) => a,
        }
    }
}
