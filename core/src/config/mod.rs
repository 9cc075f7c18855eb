mod load;
mod types;

pub use load::{
    apply_env_overrides, get_taskpick_data_dir, load_default, load_from_path, log_directory,
};
pub use types::{AppConfig, LoggingConfig, PickerConfig, SnapshotConfig};
