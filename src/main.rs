//! file-downloader binary entrypoint kept minimal. The runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use file_downloader::args::{self, Args};
use file_downloader::{app, theme};

struct LocalTimer;

impl tracing_subscriber::fmt::time::FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S"))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize the tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset
///
/// Details:
/// - Writes to `<config>/logs/file-downloader.log` through a non-blocking appender,
///   falling back to stderr when the file cannot be opened.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let mut log_path = theme::logs_dir();
    log_path.push("file-downloader.log");
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
                .with_timer(LocalTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(LocalTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Args::parse();
    init_logging(&args::determine_log_level(&cli));

    if cli.list {
        args::list::handle_list(&cli);
    }

    tracing::info!(source = %cli.source_label(), "file-downloader starting");
    if let Err(err) = app::run(&cli).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("file-downloader: {err}");
        std::process::exit(1);
    }
    tracing::info!("file-downloader exited");
}
