use std::path::{Path, PathBuf};

use super::types::{AppConfig, LoggingConfig};

/// Get the default taskpick data directory: ~/.taskpick
pub fn get_taskpick_data_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(PathBuf::from(home).join(".taskpick"))
}

pub fn load_from_path(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)?;
    Ok(toml::from_str::<AppConfig>(&s)?)
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    // Priority 1: ~/.taskpick/config.toml
    let user_config = get_taskpick_data_dir()?.join("config.toml");

    // Priority 2: ./taskpick.toml (current directory)
    let local_config = Path::new("taskpick.toml");

    let cfg = if user_config.exists() {
        load_from_path(&user_config)?
    } else if local_config.exists() {
        load_from_path(local_config)?
    } else {
        AppConfig::default()
    };

    Ok(apply_env_overrides(cfg))
}

/// Environment variable overrides (highest priority).
pub fn apply_env_overrides(mut cfg: AppConfig) -> AppConfig {
    if let Ok(v) = std::env::var("TASKPICK_SNAPSHOT") {
        if !v.trim().is_empty() {
            cfg.snapshot.path = v;
        }
    }
    if let Ok(v) = std::env::var("TASKPICK_LOG_LEVEL") {
        if !v.trim().is_empty() {
            cfg.logging.level = v;
        }
    }
    cfg
}

/// Where log files go: the configured directory, else `~/.taskpick/logs`,
/// else a `taskpick` folder in the OS temp dir when no home is known.
pub fn log_directory(logging: &LoggingConfig) -> PathBuf {
    let configured = logging
        .directory
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty());
    match configured {
        Some(dir) => PathBuf::from(dir),
        None => get_taskpick_data_dir()
            .map(|dir| dir.join("logs"))
            .unwrap_or_else(|_| std::env::temp_dir().join("taskpick")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[picker]
run_placeholder = "Pick one"

[snapshot]
path = "/tmp/tasks.json"
"#
        )
        .unwrap();

        let cfg = load_from_path(file.path()).unwrap();
        assert_eq!(cfg.picker.run_placeholder, "Pick one");
        assert_eq!(cfg.picker.attach_placeholder, "Select the task to attach to");
        assert_eq!(cfg.snapshot.path, "/tmp/tasks.json");
        assert!(cfg.logging.enabled);
        assert!(!cfg.logging.file);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "picker = 3").unwrap();
        assert!(load_from_path(file.path()).is_err());
    }

    #[test]
    fn log_directory_prefers_configured_path() {
        let mut logging = LoggingConfig {
            directory: Some("  /var/log/taskpick ".to_string()),
            ..Default::default()
        };
        assert_eq!(log_directory(&logging), PathBuf::from("/var/log/taskpick"));

        logging.directory = Some("   ".to_string());
        let fallback = log_directory(&logging);
        assert!(fallback.ends_with(".taskpick/logs") || fallback.ends_with("taskpick"));
    }
}
