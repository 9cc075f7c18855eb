use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub picker: PickerConfig,

    #[serde(default)]
    pub snapshot: SnapshotConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or `~/.taskpick/logs`).
    #[serde(default)]
    pub file: bool,

    /// EnvFilter string, e.g. "info" or "taskpick_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Optional directory for log files. See [`log_directory`](super::log_directory).
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: false,
            level: default_logging_level(),
            directory: None,
        }
    }
}

/// Placeholder text shown in the picker input for each flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickerConfig {
    #[serde(default = "default_run_placeholder")]
    pub run_placeholder: String,

    #[serde(default = "default_attach_placeholder")]
    pub attach_placeholder: String,

    #[serde(default = "default_configure_placeholder")]
    pub configure_placeholder: String,
}

fn default_run_placeholder() -> String {
    "Select the task to run".to_string()
}

fn default_attach_placeholder() -> String {
    "Select the task to attach to".to_string()
}

fn default_configure_placeholder() -> String {
    "Select a task to configure".to_string()
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            run_placeholder: default_run_placeholder(),
            attach_placeholder: default_attach_placeholder(),
            configure_placeholder: default_configure_placeholder(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Task snapshot file (`.json` or `.toml`).
    #[serde(default = "default_snapshot_path")]
    pub path: String,
}

fn default_snapshot_path() -> String {
    "./tasks.snapshot.toml".to_string()
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: default_snapshot_path(),
        }
    }
}
