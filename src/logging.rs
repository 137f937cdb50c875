use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// File name used when the configured log path names a directory.
pub const DEFAULT_LOG_FILE: &str = "postboard.log";

/// Default filter directive when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("postboard={}", level)
}

/// Splits a configured log path into the directory files are rolled in and
/// the file name prefix. A trailing separator or an existing directory means
/// `postboard.log` inside it; a bare file name rolls in the working directory.
pub fn log_target(path: &Path) -> (PathBuf, String) {
    let names_dir =
        path.is_dir() || path.as_os_str().to_string_lossy().ends_with(['/', '\\']);
    if names_dir {
        return (path.to_path_buf(), DEFAULT_LOG_FILE.to_string());
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
    (dir, file_name)
}

/// Opens a daily-rolled appender for `path`, creating its directory first.
pub fn file_appender(path: &Path) -> Result<RollingFileAppender, String> {
    let (dir, file_name) = log_target(path);
    std::fs::create_dir_all(&dir)
        .map_err(|e| format!("cannot create log directory {}: {}", dir.display(), e))?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(file_name)
        .build(&dir)
        .map_err(|e| format!("cannot open log file in {}: {}", dir.display(), e))
}

/// Initialize the logging system
///
/// Logs go to stderr in compact form. With `log_file` set they are also
/// written as JSON to a daily-rolled file; if that file cannot be opened the
/// stderr logger still comes up and reports why.
pub fn init(verbose: bool, log_file: Option<&Path>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let (appender, file_error) = match log_file.map(file_appender) {
        Some(Ok(appender)) => (Some(appender), None),
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };
    let file_layer = appender.map(|a| fmt::layer().with_writer(a).with_ansi(false).json());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        tracing::warn!(error = %e, "File logging disabled");
    }
}
