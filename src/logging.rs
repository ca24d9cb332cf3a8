//! File-backed tracing setup.
//!
//! The terminal belongs to the UI, so log output goes to a file. When no
//! log file can be opened, logging is disabled instead.
//!
//! Filter directives come from `PORTFOLIO_TUI_LOG`, then `RUST_LOG`, then
//! [`DEFAULT_FILTER`], which keeps dependency noise out of the log.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::cli::VERSION;

const APP_DIR: &str = "portfolio-tui";
const LOG_FILE: &str = "portfolio-tui.log";
const FILTER_ENV: &str = "PORTFOLIO_TUI_LOG";
const DEFAULT_FILTER: &str = "warn,portfolio_tui=info";

/// An opened log file and where it lives
struct LogTarget {
    path: PathBuf,
    file: File,
}

pub fn init_tracing() {
    let directives = filter_directives(
        std::env::var(FILTER_ENV).ok(),
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
    );
    let (env_filter, bad_filter) = match EnvFilter::try_new(&directives) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_FILTER), Some(format!("{directives}: {err}"))),
    };

    let candidates = log_file_candidates(dirs::data_local_dir().as_deref());
    let (target, warnings) = open_log_file(&candidates);

    let Some(LogTarget { path, file }) = target else {
        tracing_subscriber::registry().with(env_filter).init();
        return;
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(env_filter)
        .init();

    tracing::info!(path = %path.display(), version = VERSION, "Logging initialized");
    if let Some(bad_filter) = bad_filter {
        tracing::warn!("Invalid log filter, using {DEFAULT_FILTER}: {bad_filter}");
    }
    for warning in warnings {
        tracing::warn!("{warning}");
    }
}

/// First non-empty of the app-specific variable, `RUST_LOG`, the default
fn filter_directives(app_filter: Option<String>, rust_log: Option<String>) -> String {
    [app_filter, rust_log]
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Open the first usable candidate, collecting a warning per failed one
fn open_log_file(candidates: &[PathBuf]) -> (Option<LogTarget>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in candidates {
        if let Some(parent) = candidate.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warnings.push(format!(
                    "Failed to create log dir {}: {e}",
                    parent.display()
                ));
                continue;
            }
        }

        match OpenOptions::new().create(true).append(true).open(candidate) {
            Ok(file) => {
                let target = LogTarget {
                    path: candidate.clone(),
                    file,
                };
                return (Some(target), warnings);
            }
            Err(e) => warnings.push(format!(
                "Failed to open log file {}: {e}",
                candidate.display()
            )),
        }
    }

    (None, warnings)
}

/// `<data_local_dir>/portfolio-tui/logs/` first, `./.portfolio-tui/logs/` last
fn log_file_candidates(data_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(data_dir) = data_dir {
        candidates.push(data_dir.join(APP_DIR).join("logs").join(LOG_FILE));
    }
    candidates.push(PathBuf::from(format!(".{APP_DIR}")).join("logs").join(LOG_FILE));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_candidate_comes_first() {
        let candidates = log_file_candidates(Some(Path::new("/home/elise/.local/share")));
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/home/elise/.local/share/portfolio-tui/logs/portfolio-tui.log"),
                PathBuf::from(".portfolio-tui/logs/portfolio-tui.log"),
            ]
        );
    }

    #[test]
    fn test_local_fallback_without_data_dir() {
        let candidates = log_file_candidates(None);
        assert_eq!(
            candidates,
            vec![PathBuf::from(".portfolio-tui/logs/portfolio-tui.log")]
        );
    }

    #[test]
    fn test_open_log_file_skips_unusable_candidate() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the log directory should be
        let blocker = dir.path().join("blocked");
        fs::write(&blocker, "").unwrap();
        let usable = dir.path().join("logs").join(LOG_FILE);

        let candidates = vec![blocker.join("logs").join(LOG_FILE), usable.clone()];
        let (target, warnings) = open_log_file(&candidates);

        assert_eq!(target.map(|t| t.path), Some(usable.clone()));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Failed to create log dir"));
        assert!(usable.exists());
    }

    #[test]
    fn test_filter_precedence() {
        assert_eq!(
            filter_directives(Some("debug".into()), Some("trace".into())),
            "debug"
        );
        assert_eq!(filter_directives(None, Some("trace".into())), "trace");
        assert_eq!(filter_directives(Some("  ".into()), None), DEFAULT_FILTER);
        assert_eq!(filter_directives(None, None), DEFAULT_FILTER);
    }
}
