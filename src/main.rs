//! hackerstories binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use hackerstories::args::{self, Args};
use hackerstories::config::{self, FilePreferenceStore};

struct StoriesTimer;

impl tracing_subscriber::fmt::time::FormatTime for StoriesTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        // "YYYY-MM-DD-T HH:MM:SS"
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S");
        write!(w, "{ts}")
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Initialize tracing, writing to `~/.config/hackerstories/logs/hackerstories.log`.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let mut log_path = config::logs_dir();
    log_path.push("hackerstories.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(StoriesTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr logger
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(StoriesTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(&args::determine_log_level(&args));

    let mut settings = config::load_settings(&config::settings_path());
    args::apply_overrides(&args, &mut settings);

    if args.search.is_some() {
        if let Err(err) = args::handle_search(&args, &settings).await {
            eprintln!("hackerstories: {err}");
            tracing::error!(error = %err, "Search failed");
            std::process::exit(1);
        }
        return;
    }

    tracing::info!(api_base = %settings.api_base, "hackerstories starting");
    let store = FilePreferenceStore::open(config::state_path());
    if let Err(err) = hackerstories::app::run(settings, Box::new(store)).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("hackerstories exited");
}

#[cfg(test)]
mod tests {
    /// What: FormatTime impl writes a `YYYY-MM-DD-T HH:MM:SS` timestamp
    ///
    /// - Input: Tracing writer buffer
    /// - Output: Buffer holds a 21-character timestamp containing `-T `
    #[test]
    fn stories_timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let t = super::StoriesTimer;
        let _ = t.format_time(&mut writer);
        assert_eq!(buf.len(), 21);
        assert!(buf.contains("-T "));
    }
}
