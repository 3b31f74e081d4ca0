//! tracing subscriber setup.
//!
//! The terminal UI owns stdout, so it logs to a file or not at all. The
//! headless front end logs to stderr.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Disabled,
}

impl LogTarget {
    pub fn for_terminal(file: Option<PathBuf>) -> Self {
        file.map(LogTarget::File).unwrap_or(LogTarget::Disabled)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(target: LogTarget) -> io::Result<()> {
    match target {
        LogTarget::Disabled => {}
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(true)
                .with_level(true)
                .with_timer(UtcTime::rfc_3339())
                .with_writer(io::stderr)
                .try_init();
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(true)
                .with_level(true)
                .with_timer(UtcTime::rfc_3339())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
    }
    Ok(())
}
