// ABOUTME: tracing-subscriber setup for the adstudio binary
// ABOUTME: The terminal UI owns stdout, so TUI logs go to a file or nowhere

use adstudio_config::constants::RUST_LOG;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log lines are written
#[derive(Debug, Clone, PartialEq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Disabled,
}

impl LogTarget {
    /// Target for the terminal UI: the configured file, else nothing
    pub fn for_tui(log_file: Option<&Path>) -> Self {
        match log_file {
            Some(path) => LogTarget::File(path.to_path_buf()),
            None => LogTarget::Disabled,
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(RUST_LOG).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber; `RUST_LOG` overrides the `info` default
pub fn init_tracing(target: &LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .compact();

    match target {
        LogTarget::Stderr => builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {}", e)),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {}", e))
        }
        LogTarget::Disabled => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tui_logs_only_to_configured_file() {
        assert_eq!(LogTarget::for_tui(None), LogTarget::Disabled);
        assert_eq!(
            LogTarget::for_tui(Some(Path::new("/tmp/adstudio.log"))),
            LogTarget::File(PathBuf::from("/tmp/adstudio.log"))
        );
    }

    #[test]
    fn test_disabled_target_installs_nothing() {
        assert!(init_tracing(&LogTarget::Disabled).is_ok());
    }
}
